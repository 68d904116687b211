use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut confirming = use_signal(|| false);

    let eq_path = state.with(|st| {
        st.config
            .eq_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default()
    });
    let config_path = state.with(|st| {
        st.config_path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "not saved (no config directory)".to_string())
    });
    let items_path = state.with(|st| st.prices.path().display().to_string());
    let item_count = state.with(|st| st.prices.list().len());

    let on_reset = move |_| {
        let mut state = state;
        confirming.set(false);
        if let Err(err) = state.with_mut(|st| st.reset_install_dir()) {
            push_toast(toasts, ToastKind::Error, format!("Failed to save settings: {err}"));
        } else {
            push_toast(toasts, ToastKind::Info, "EverQuest folder reset.");
        }
    };

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "EverQuest Installation" }
            p { class: "mono", "{eq_path}" }
            p { class: "muted", "Inventory exports (/outputfile inventory) are read from this folder." }
            if confirming() {
                div { class: "confirm",
                    p { "Are you sure you want to reset the EverQuest installation path?" }
                    p { class: "muted", "You will need to select it again." }
                    div { class: "form-row",
                        button { class: "btn btn-danger", onclick: on_reset, "Reset" }
                        button { class: "btn", onclick: move |_| confirming.set(false), "Cancel" }
                    }
                }
            } else {
                button { class: "btn btn-danger", onclick: move |_| confirming.set(true), "Reset EQ Path" }
            }
        }

        section { class: "panel",
            h2 { class: "panel-title", "Data Files" }
            div { class: "field",
                label { "Configuration" }
                p { class: "mono", "{config_path}" }
            }
            div { class: "field",
                label { "Price list ({item_count} items)" }
                p { class: "mono", "{items_path}" }
            }
        }
    }
}
