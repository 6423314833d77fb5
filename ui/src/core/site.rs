//! Compile-time page content: organization details, contact info, image
//! references, launch timestamp and the focus-area list.

use once_cell::sync::Lazy;
use tracing::warn;

use crate::core::countdown::LaunchTarget;
use crate::core::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLinks {
    pub instagram: &'static str,
    pub facebook: &'static str,
    pub twitter: &'static str,
    pub linkedin: &'static str,
}

impl SocialLinks {
    /// `(label, url)` pairs for the links that are actually set.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("Instagram", self.instagram),
            ("Facebook", self.facebook),
            ("Twitter", self.twitter),
            ("LinkedIn", self.linkedin),
        ]
        .into_iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    /// RFC 3339 with an explicit offset.
    pub launch_at: &'static str,
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
    pub contact_region: &'static str,
    pub social: SocialLinks,
    pub logo_src: &'static str,
    pub banner_src: &'static str,
}

impl SiteConfig {
    pub fn launch_target(&self) -> Result<LaunchTarget, SiteError> {
        LaunchTarget::parse(self.launch_at)
    }

    pub fn page_title(&self) -> String {
        format!("{} — Coming Soon", self.name)
    }

    /// Initials of the first two words, used when the logo is unavailable.
    pub fn monogram(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn subtitle(&self) -> String {
        format!("{} • Non-Profit Organization", self.contact_region)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.contact_phone)
    }

    pub fn placeholder_notice(&self) -> String {
        format!(
            "Built with care in {}. This Coming Soon page is a placeholder while we prepare the full website.",
            self.contact_region
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusArea {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static SITE: SiteConfig = SiteConfig {
    name: "Inspire Lives Foundation",
    tagline: "Inspiring Together, Growing Together",
    description: "At Inspire Lives Foundation, we believe that true progress comes when communities grow together with compassion, equality, and dignity. Established with the vision of empowering lives, our foundation is committed to building a better India through sustainable initiatives in education, healthcare, women empowerment, environment, and youth development.",
    launch_at: "2025-12-01T10:00:00+05:30",
    contact_email: "contact@inspirelives.org",
    contact_phone: "+91-90000-00000",
    contact_region: "India",
    social: SocialLinks {
        instagram: "",
        facebook: "",
        twitter: "",
        linkedin: "",
    },
    logo_src: "/images/logo.png",
    banner_src: "/images/banner1.jpg",
};

pub static FOCUS_AREAS: [FocusArea; 6] = [
    FocusArea {
        title: "Education",
        description: "Access, e‑learning, skill‑building and life skills.",
        icon: "📚",
    },
    FocusArea {
        title: "Healthcare",
        description: "Awareness, camps and community health support.",
        icon: "🏥",
    },
    FocusArea {
        title: "Women Empowerment",
        description: "Skill training, leadership and self‑reliance.",
        icon: "💪",
    },
    FocusArea {
        title: "Environment",
        description: "Sustainability, clean drives and climate action.",
        icon: "🌱",
    },
    FocusArea {
        title: "Youth Development",
        description: "Mentoring, leadership and changemaker programs.",
        icon: "🌟",
    },
    FocusArea {
        title: "Soft Skills",
        description: "Communication, collaboration, critical thinking.",
        icon: "💼",
    },
];

static LAUNCH: Lazy<Option<LaunchTarget>> = Lazy::new(|| match SITE.launch_target() {
    Ok(target) => Some(target),
    Err(err) => {
        warn!(error = %err, "no countdown will be shown");
        None
    }
});

/// The configured launch instant, parsed once per process.
pub fn launch_target() -> Option<LaunchTarget> {
    *LAUNCH
}
