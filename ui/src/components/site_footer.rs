use dioxus::prelude::*;

use crate::components::{Logo, LogoSize};
use crate::core::format;
use crate::core::site::SiteConfig;

#[component]
pub fn SiteFooter(site: &'static SiteConfig, year: i32) -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__brand",
                div { class: "site-footer__identity",
                    Logo {
                        src: site.logo_src,
                        alt: "{site.name} Logo",
                        monogram: site.monogram(),
                        size: LogoSize::Footer,
                    }
                    div { class: "site-footer__name", "{site.name}" }
                }
                div { class: "site-footer__copyright", {format::copyright_notice(year, site.name)} }
            }
            div { class: "site-footer__notice", {site.placeholder_notice()} }
        }
    }
}
