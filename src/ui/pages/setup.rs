use dioxus::prelude::*;

use crate::{
    domain::{validate_install_dir, AppState},
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
};

/// First-run screen asking for the EverQuest installation folder.
#[component]
pub fn SetupPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut path_input = use_signal(String::new);

    let on_browse = move |_| {
        let mut path_input = path_input;
        spawn(async move {
            let Some(folder) = rfd::AsyncFileDialog::new()
                .set_title("Select EverQuest Installation Folder")
                .pick_folder()
                .await
            else {
                return;
            };
            let raw = folder.path().display().to_string();
            match validate_install_dir(&raw) {
                Ok(_) => path_input.set(raw),
                Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
            }
        });
    };

    let on_save = move |_| {
        let mut state = state;
        match validate_install_dir(&path_input()) {
            Ok(dir) => match state.with_mut(|st| st.set_install_dir(dir)) {
                Ok(()) => push_toast(toasts, ToastKind::Success, "EverQuest folder saved."),
                Err(err) => push_toast(
                    toasts,
                    ToastKind::Warning,
                    format!("Using the folder for this session only; saving failed: {err}"),
                ),
            },
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
    };

    rsx! {
        div { class: "setup panel",
            h2 { "First Time Setup" }
            p { class: "muted", "Please select your EverQuest installation folder:" }
            div { class: "form-row",
                div { class: "field",
                    input {
                        class: "input",
                        value: path_input(),
                        oninput: move |evt| path_input.set(evt.value()),
                        placeholder: "C:\\Users\\Public\\Daybreak Game Company\\Installed Games\\EverQuest",
                    }
                }
                button { class: "btn", onclick: on_browse, "Browse" }
            }
            div { class: "form-row", style: "margin-top: 20px;",
                button { class: "btn btn-primary", onclick: on_save, "Save and Continue" }
            }
        }
    }
}
