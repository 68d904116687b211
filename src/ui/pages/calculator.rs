use dioxus::prelude::*;

use crate::{
    app::recalculate_with_toast,
    domain::{server_names, AppState, LineItemColumn},
    ui::components::{
        kpi_card::KpiCard, line_item_table::LineItemTable, toast::ToastMessage,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let character = state.with(|st| st.character.clone());
    let server = state.with(|st| st.server.clone());
    let sort = state.with(|st| st.sort);
    let valuation = state.with(|st| st.valuation.clone());

    let (total_display, summary, items) = match valuation {
        Some(valuation) => {
            let mut items = valuation.items;
            sort.apply(&mut items);
            let summary = format!(
                "{} priced rows, {} without a price",
                items.len(),
                valuation.skipped
            );
            (valuation.total.to_string(), Some(summary), items)
        }
        None => ("—".to_string(), None, Vec::new()),
    };

    let on_character = move |evt: FormEvent| {
        let mut state = state;
        state.with_mut(|st| st.character = evt.value());
    };

    let on_server = move |evt: FormEvent| {
        let mut state = state;
        state.with_mut(|st| st.server = evt.value());
    };

    let on_calculate = move |_| recalculate_with_toast(state, toasts, false);

    let on_sort = move |column: LineItemColumn| {
        let mut state = state;
        state.with_mut(|st| st.sort = st.sort.toggled(column));
    };

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Character" }
            div { class: "form-row",
                div { class: "field",
                    label { "Character Name" }
                    input {
                        class: "input",
                        value: "{character}",
                        oninput: on_character,
                        placeholder: "e.g. Fippy",
                    }
                }
                div { class: "field",
                    label { "Server" }
                    select {
                        class: "select",
                        value: "{server}",
                        onchange: on_server,
                        option { value: "", disabled: true, selected: server.is_empty(), "Select a server" }
                        for name in server_names() {
                            option { value: name, selected: name == server, "{name}" }
                        }
                    }
                }
                button { class: "btn btn-primary", onclick: on_calculate, "Calculate Total Value" }
            }
        }

        KpiCard {
            title: "Total Value".to_string(),
            value: total_display,
            description: summary,
        }

        section { class: "panel",
            h2 { class: "panel-title", "Breakdown" }
            LineItemTable { items, sort, on_sort }
        }
    }
}
