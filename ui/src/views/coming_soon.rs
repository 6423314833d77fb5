use dioxus::prelude::*;

use crate::components::{FocusAreas, SiteFooter, SiteHeader};
use crate::core::site::{self, FOCUS_AREAS, SITE};
use crate::core::timing;
use crate::Hero;

/// The whole page. Sets the document title as its only side effect.
#[component]
pub fn ComingSoon() -> Element {
    let year = use_hook(|| timing::now_utc().year());
    let title = SITE.page_title();

    rsx! {
        document::Title { "{title}" }

        div { class: "page page-coming-soon",
            SiteHeader { site: &SITE }

            main { class: "page__main",
                Hero { site: &SITE, launch: site::launch_target() }
                FocusAreas { areas: &FOCUS_AREAS[..] }
            }

            SiteFooter { site: &SITE, year }
        }
    }
}
