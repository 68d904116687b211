use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, PriceListPage, SettingsPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/calculator")]
    Calculator {},
    #[route("/prices")]
    Prices {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::load);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Re-runs the valuation and reports the outcome as a toast.
///
/// With `quiet` set, success is not announced; used after price edits.
pub fn recalculate_with_toast(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    quiet: bool,
) {
    match state.with_mut(|st| st.recalculate().map(|valuation| valuation.total)) {
        Ok(total) => {
            if !quiet {
                push_toast(toasts, ToastKind::Success, format!("Total value: {total}"));
            }
        }
        Err(err) => {
            log::warn!("[inventory] Calculation failed: {err}");
            push_toast(toasts, ToastKind::Error, err.to_string());
        }
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Prices() -> Element {
    rsx! { Shell { PriceListPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
