use dioxus::prelude::*;

use crate::components::{Logo, LogoSize};
use crate::core::site::SiteConfig;

#[component]
pub fn SiteHeader(site: &'static SiteConfig) -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "site-header__brand",
                Logo {
                    src: site.logo_src,
                    alt: "{site.name} Logo",
                    monogram: site.monogram(),
                    size: LogoSize::Header,
                }
                div {
                    div { class: "site-header__name", "{site.name}" }
                    div { class: "site-header__subtitle", {site.subtitle()} }
                }
            }
            span { class: "badge", "Coming Soon" }
        }
    }
}
