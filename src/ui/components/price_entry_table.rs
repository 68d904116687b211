use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::domain::PriceEntry;

#[component]
pub fn PriceEntryTable(
    entries: Vec<PriceEntry>,
    selected: BTreeSet<String>,
    on_toggle: EventHandler<String>,
) -> Element {
    let is_empty = entries.is_empty();
    let rows = entries
        .into_iter()
        .map(|entry| {
            let checked = selected.contains(&entry.name);
            (entry, checked)
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "table-scroll",
            table { class: "table",
                thead {
                    tr {
                        th { "Select" }
                        th { "Item Name" }
                        th { "Price" }
                    }
                }
                tbody {
                    for (entry, checked) in rows {
                        PriceEntryRow { key: "{entry.name}", entry, checked, on_toggle }
                    }
                    if is_empty {
                        tr {
                            td { class: "table-empty", colspan: "3", "The price list is empty." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PriceEntryRow(entry: PriceEntry, checked: bool, on_toggle: EventHandler<String>) -> Element {
    let class = if checked { "selected" } else { "" };
    let name = entry.name.clone();

    rsx! {
        tr { class: "{class}",
            td {
                input {
                    r#type: "checkbox",
                    checked,
                    onchange: move |_| on_toggle.call(name.clone()),
                }
            }
            td { "{entry.name}" }
            td { class: "num", "{entry.price}" }
        }
    }
}
