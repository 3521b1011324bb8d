//! Fixed copy and card data for the landing page.

pub const PRODUCT_NAME: &str = "MakerToo";

pub const TAGLINES: [&str; 4] = [
    "Unlock Your Virtual Freedom.",
    "Ethical Tech for a Secure Future.",
    "Privacy-Powered Operations.",
    "Your Digital World, Reimagined.",
];

pub const TESTIMONIAL_QUOTE: &str =
    "\"MakerToo transformed how we operate, giving us peace of mind about our data and ethics.\"";
pub const TESTIMONIAL_AUTHOR: &str = "- A Valued Partner (Placeholder)";

pub const CTA_LABEL: &str = "Claim Your Freedom";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Purple,
    Blue,
    Teal,
    Indigo,
}

impl Theme {
    pub fn class(self) -> &'static str {
        match self {
            Theme::Purple => "theme-purple",
            Theme::Blue => "theme-blue",
            Theme::Teal => "theme-teal",
            Theme::Indigo => "theme-indigo",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Principle {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Detail page the popup points at. Only ever shown as a label.
    pub page: &'static str,
    pub details: &'static str,
    pub theme: Theme,
}

pub static PRINCIPLES: [Principle; 3] = [
    Principle {
        id: 1,
        title: "Ethical Foundation",
        description: "Integrity & Transparency",
        page: "/ethics",
        details: "Explore how our operations are built on a strong ethical framework, ensuring fairness and trust in every interaction.",
        theme: Theme::Purple,
    },
    Principle {
        id: 2,
        title: "Privacy by Design",
        description: "Your Data, Your Control",
        page: "/privacy",
        details: "Discover our commitment to embedding privacy in every solution, safeguarding your information from the ground up.",
        theme: Theme::Blue,
    },
    Principle {
        id: 3,
        title: "Ironclad Security",
        description: "Multi-Layered Protection",
        page: "/security",
        details: "Learn about the robust, cutting-edge security measures we implement to protect your valuable digital assets.",
        theme: Theme::Teal,
    },
];

pub fn principle(id: u32) -> Option<&'static Principle> {
    PRINCIPLES.iter().find(|principle| principle.id == id)
}

#[derive(Debug, PartialEq, Eq)]
pub struct Tool {
    pub label: &'static str,
    pub icon: &'static str,
    pub theme: Theme,
}

pub static TOOLS: [Tool; 4] = [
    Tool {
        label: "Secure Infra",
        icon: "shield",
        theme: Theme::Purple,
    },
    Tool {
        label: "Private Comms",
        icon: "lock",
        theme: Theme::Blue,
    },
    Tool {
        label: "Ethical Data",
        icon: "leaf",
        theme: Theme::Teal,
    },
    Tool {
        label: "Open Solutions",
        icon: "code",
        theme: Theme::Indigo,
    },
];

pub fn footer_text(year: i32) -> String {
    format!("© {year} {PRODUCT_NAME}. Ethical Tech. Virtual Freedom.")
}
