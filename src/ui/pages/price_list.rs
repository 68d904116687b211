use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::{
    app::recalculate_with_toast,
    domain::{AppState, Money},
    infra::StoreError,
    ui::components::{
        coin_input::CoinInput,
        price_entry_table::PriceEntryTable,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn PriceListPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut name_input = use_signal(String::new);
    let mut platinum = use_signal(|| "0".to_string());
    let mut gold = use_signal(|| "0".to_string());
    let mut silver = use_signal(|| "0".to_string());
    let mut copper = use_signal(|| "0".to_string());

    let mut selected = use_signal(BTreeSet::<String>::new);
    let mut confirming = use_signal(|| false);

    let entries = state.with(|st| st.prices.entries().cloned().collect::<Vec<_>>());
    let entry_count = entries.len();

    let on_add = move |evt: FormEvent| {
        evt.prevent_default();
        let mut state = state;

        let price = match Money::from_inputs(&platinum(), &gold(), &silver(), &copper()) {
            Ok(price) => price,
            Err(err) => {
                push_toast(
                    toasts,
                    ToastKind::Error,
                    format!("Please enter valid numbers for the price! ({err})"),
                );
                return;
            }
        };

        let name = name_input().trim().to_string();
        match state.with_mut(|st| st.prices.add(&name, price)) {
            Ok(()) => {
                push_toast(toasts, ToastKind::Success, format!("Added {name} to price list!"));
                name_input.set(String::new());
                for mut field in [platinum, gold, silver, copper] {
                    field.set("0".to_string());
                }
            }
            Err(err @ StoreError::Persist(_)) => {
                push_toast(toasts, ToastKind::Error, err.to_string());
            }
            Err(err) => {
                push_toast(toasts, ToastKind::Error, err.to_string());
                return;
            }
        }

        if state.with(|st| st.has_selection()) {
            recalculate_with_toast(state, toasts, true);
        }
    };

    let on_toggle = move |name: String| {
        selected.with_mut(|set| {
            if !set.remove(&name) {
                set.insert(name);
            }
        });
    };

    let on_delete_confirmed = move |_| {
        let mut state = state;
        let names = selected();
        let result = state.with_mut(|st| st.prices.remove(names.iter().map(String::as_str)));
        selected.set(BTreeSet::new());
        confirming.set(false);

        match result {
            Ok(_) => push_toast(toasts, ToastKind::Success, "Selected items have been deleted."),
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }

        if state.with(|st| st.has_selection()) {
            recalculate_with_toast(state, toasts, true);
        }
    };

    let pending = selected();
    let nothing_selected = pending.is_empty();

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Add New Item" }
            form { class: "form-row", onsubmit: on_add,
                div { class: "field",
                    label { "Item Name" }
                    input {
                        class: "input",
                        value: name_input(),
                        oninput: move |evt| name_input.set(evt.value()),
                        placeholder: "e.g. Bat Wing",
                    }
                }
                div { class: "field",
                    label { "Price" }
                    CoinInput { platinum, gold, silver, copper }
                }
                button { class: "btn btn-primary", r#type: "submit", "Save" }
            }
        }

        section { class: "panel",
            h2 { class: "panel-title", "Price List ({entry_count} items)" }
            PriceEntryTable { entries, selected: pending.clone(), on_toggle }

            if confirming() && !nothing_selected {
                div { class: "confirm", style: "margin-top: 12px;",
                    p { "Are you sure you want to delete the following items?" }
                    ul {
                        for name in pending.iter() {
                            li { key: "{name}", "{name}" }
                        }
                    }
                    div { class: "form-row",
                        button { class: "btn btn-danger", onclick: on_delete_confirmed, "Delete" }
                        button { class: "btn", onclick: move |_| confirming.set(false), "Cancel" }
                    }
                }
            } else {
                div { class: "form-row", style: "margin-top: 12px;",
                    button {
                        class: "btn btn-danger",
                        disabled: nothing_selected,
                        onclick: move |_| confirming.set(true),
                        "Delete Selected"
                    }
                }
            }
        }
    }
}
