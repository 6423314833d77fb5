use dioxus::prelude::*;

use crate::core::site::FocusArea;

#[component]
pub fn FocusAreas(areas: &'static [FocusArea]) -> Element {
    rsx! {
        section { class: "focus-areas",
            h2 { class: "focus-areas__title", "Our Focus Areas" }
            div { class: "focus-areas__grid",
                for area in areas.iter() {
                    div { key: "{area.title}", class: "focus-card",
                        div { class: "focus-card__icon", aria_hidden: "true", "{area.icon}" }
                        h3 { class: "focus-card__title", "{area.title}" }
                        p { class: "focus-card__description", "{area.description}" }
                    }
                }
            }
        }
    }
}
