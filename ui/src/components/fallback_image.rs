use dioxus::prelude::*;
use tracing::debug;

use crate::core::image::{ImageSlot, Presentation};

/// An `<img>` that swaps to `fallback` once the runtime reports a load error
/// for the current `src`, or straight away when `src` is empty.
#[component]
pub fn FallbackImage(
    src: String,
    alt: String,
    #[props(default)] class: String,
    fallback: Element,
) -> Element {
    let mut slot = use_signal(|| ImageSlot::mounted(src.clone()));

    if slot.read().presentation(&src) == Presentation::Fallback {
        return fallback;
    }

    let failed_src = src.clone();
    rsx! {
        img {
            src: "{src}",
            alt: "{alt}",
            class: "{class}",
            onerror: move |_| {
                if slot.write().record_failure(&failed_src) {
                    debug!(src = %failed_src, "image failed to load, showing fallback");
                }
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSize {
    #[default]
    Header,
    Footer,
}

impl LogoSize {
    fn modifier(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
        }
    }
}

/// Organization logo; falls back to a monogram tile.
#[component]
pub fn Logo(
    src: String,
    alt: String,
    monogram: String,
    #[props(default)] size: LogoSize,
) -> Element {
    let modifier = size.modifier();

    rsx! {
        FallbackImage {
            src,
            alt,
            class: "logo logo--{modifier}",
            fallback: rsx! {
                div { class: "logo-mark logo-mark--{modifier}", aria_hidden: "true", "{monogram}" }
            },
        }
    }
}

#[component]
pub fn BannerImage(src: String, alt: String) -> Element {
    rsx! {
        FallbackImage {
            src,
            alt,
            class: "banner",
            fallback: rsx! {
                div { class: "banner-placeholder",
                    span { class: "banner-placeholder__icon", aria_hidden: "true", "🖼" }
                    p { class: "banner-placeholder__label", "Banner Image" }
                }
            },
        }
    }
}
