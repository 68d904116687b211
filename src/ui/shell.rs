use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::pages::SetupPage;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    // Nothing works without an install folder, so setup replaces every route until then.
    if !state.with(|st| st.config.is_configured()) {
        return rsx! {
            SetupPage {}
        };
    }

    let version = version_label();

    rsx! {
        header { class: "app-header",
            div {
                h1 { class: "app-title", "{APP_NAME}" }
                span { class: "app-version", "{version}" }
            }
            nav { class: "nav",
                NavButton { active: matches!(current_route, Route::Calculator {}), onclick: move |_| { nav.push(Route::Calculator {}); }, label: "Calculator" }
                NavButton { active: matches!(current_route, Route::Prices {}), onclick: move |_| { nav.push(Route::Prices {}); }, label: "Price List" }
                NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "Settings" }
            }
        }
        main { class: "content",
            {children}
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-button active" } else { "nav-button" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
