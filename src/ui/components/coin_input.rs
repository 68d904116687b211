use dioxus::prelude::*;

/// Four small boxes for entering a price as p / g / s / c.
#[component]
pub fn CoinInput(
    platinum: Signal<String>,
    gold: Signal<String>,
    silver: Signal<String>,
    copper: Signal<String>,
) -> Element {
    rsx! {
        div { class: "coin-inputs",
            input { class: "input", inputmode: "numeric", value: platinum(), oninput: move |evt| platinum.set(evt.value()) }
            span { class: "coin-unit", "p" }
            input { class: "input", inputmode: "numeric", value: gold(), oninput: move |evt| gold.set(evt.value()) }
            span { class: "coin-unit", "g" }
            input { class: "input", inputmode: "numeric", value: silver(), oninput: move |evt| silver.set(evt.value()) }
            span { class: "coin-unit", "s" }
            input { class: "input", inputmode: "numeric", value: copper(), oninput: move |evt| copper.set(evt.value()) }
            span { class: "coin-unit", "c" }
        }
    }
}
