use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "x-loading-indicator",
            style: "color:black; font-size: 20px; border: 1px solid black; padding: 10px; border-radius: 5px; margin: 15px; text-align: center;",
            "{label}"
        }
    }
}
