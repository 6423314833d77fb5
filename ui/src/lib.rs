//! Shared UI crate for the Inspire Lives Foundation coming-soon page. All logic
//! and views live here; the platform crates only launch them.

use dioxus::prelude::*;

pub mod core;
pub mod views;

pub mod components {
    // Countdown hook + display (components/countdown.rs)
    pub mod countdown;
    pub use countdown::{use_countdown, CountdownTimer};

    // Images with a placeholder on load failure (components/fallback_image.rs)
    pub mod fallback_image;
    pub use fallback_image::{BannerImage, FallbackImage, Logo, LogoSize};

    pub mod focus_areas;
    pub use focus_areas::FocusAreas;

    pub mod site_footer;
    pub use site_footer::SiteFooter;

    pub mod site_header;
    pub use site_header::SiteHeader;

    pub mod subscription_form;
    pub use subscription_form::SubscriptionForm;
}

mod hero;
pub use hero::Hero;

/// Shared theme stylesheet (ui/assets/theme/main.css).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod site_content;
}
