use dioxus::prelude::*;

use crate::domain::{LineItem, LineItemColumn, LineItemSort};

#[component]
pub fn LineItemTable(
    items: Vec<LineItem>,
    sort: LineItemSort,
    on_sort: EventHandler<LineItemColumn>,
) -> Element {
    let is_empty = items.is_empty();

    rsx! {
        div { class: "table-scroll",
            table { class: "table",
                thead {
                    tr {
                        for column in LineItemColumn::ALL {
                            th {
                                class: "sortable",
                                onclick: move |_| on_sort.call(column),
                                "{column.label()}{sort.arrow(column)}"
                            }
                        }
                    }
                }
                tbody {
                    for (index, item) in items.into_iter().enumerate() {
                        tr { key: "{index}-{item.name}",
                            td { "{item.name}" }
                            td { class: "num", "{item.quantity}" }
                            td { class: "num", "{item.unit_price}" }
                            td { class: "num", "{item.total}" }
                        }
                    }
                    if is_empty {
                        tr {
                            td { class: "table-empty", colspan: "4",
                                "No priced items yet. Calculate to see the breakdown."
                            }
                        }
                    }
                }
            }
        }
    }
}
