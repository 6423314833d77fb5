use dioxus::prelude::*;
use tracing::info;

use crate::components::{use_countdown, BannerImage, CountdownTimer, SubscriptionForm};
use crate::core::countdown::LaunchTarget;
use crate::core::format;
use crate::core::site::SiteConfig;
use crate::core::subscription::{thank_you_message, SupporterTally};

/// Banner, pitch, countdown, subscription form and quick contact. A `None`
/// launch hides the countdown.
#[component]
pub fn Hero(
    site: &'static SiteConfig,
    #[props(!optional)] launch: Option<LaunchTarget>,
) -> Element {
    let countdown = use_countdown(launch);
    let mut tally = use_signal(SupporterTally::default);
    let mut notice = use_signal(|| Option::<String>::None);

    let handle_subscribe = move |email: String| {
        let number = tally.write().record();
        info!(%email, subscriber = number, "subscription captured");
        notice.set(Some(thank_you_message(&email, number)));
    };

    let supporters = format::group_thousands(tally.read().count());
    let socials = site.social.entries();

    rsx! {
        section { class: "hero",
            div { class: "hero__media",
                BannerImage {
                    src: site.banner_src,
                    alt: "{site.name} - Community Service",
                }
            }

            div { class: "hero__content",
                h1 { class: "hero__tagline", "{site.tagline}" }
                p { class: "hero__lead", "{site.description}" }

                CountdownTimer { snapshot: countdown }

                SubscriptionForm { on_submit: handle_subscribe }

                if let Some(message) = notice() {
                    p { class: "subscribe__notice", role: "status", "{message}" }
                }

                div { class: "hero__supporters",
                    "Join {supporters}+ supporters waiting for our launch"
                }

                div { class: "hero__contact",
                    a { class: "hero__contact-link", href: site.mailto(), "✉ {site.contact_email}" }
                    a { class: "hero__contact-link", href: site.tel(), "☎ {site.contact_phone}" }
                    for (label, url) in socials {
                        a {
                            key: "{label}",
                            class: "hero__contact-link",
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
