//! Page content
//!
//! Fixed copy for every section of the page that does not depend on the
//! schedule, plus the carousel's paging rules.

use serde::Serialize;

/// Header navigation anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "#overview", label: "Overview" },
    NavLink { href: "#availability", label: "Availability" },
    NavLink { href: "#requirements", label: "Requirements" },
    NavLink { href: "#details", label: "Details" },
];

/// Opened in a new tab by the header's "Learn More" button
pub const LEARN_MORE_URL: &str = "https://utest.com";

/// Element id that "Apply Now" scrolls to
pub const APPLICATION_FORM_ID: &str = "application-form";

// ============================================
// Hero
// ============================================

pub const HERO_BADGE: &str = "Utest x NYU Study";
pub const HERO_BADGE_LOCATION: &str = "In-Person Testing 2025";
pub const HERO_TITLE: &str = "Wearable Tech Testing Study";
pub const HERO_SUBTITLE: &str = "Join us in Midtown Manhattan to test the latest wearable \
technology devices. Help shape the future of global tech products while earning $150 for your time.";

pub const PAYMENT: &str = "$150";
pub const PAYMENT_LABEL: &str = "Paid in 48hrs";
pub const PARTICIPANTS_LABEL: &str = "Participants Till Date";
pub const TIME_COMMITMENT: &str = "3 hrs";
pub const TIME_COMMITMENT_LABEL: &str = "Time Commitment";
pub const EARLIEST_DATE_LABEL: &str = "Earliest Date";

/// One figure in the hero row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroStat {
    pub value: String,
    pub label: &'static str,
}

/// The four hero figures in display order
pub fn hero_stats(total_participants: String, earliest_date: String) -> [HeroStat; 4] {
    [
        HeroStat { value: PAYMENT.to_string(), label: PAYMENT_LABEL },
        HeroStat { value: total_participants, label: PARTICIPANTS_LABEL },
        HeroStat { value: TIME_COMMITMENT.to_string(), label: TIME_COMMITMENT_LABEL },
        HeroStat { value: earliest_date, label: EARLIEST_DATE_LABEL },
    ]
}

// ============================================
// Project overview carousel
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const OVERVIEW_CARDS: [Card; 6] = [
    Card {
        icon: "🎯",
        title: "What You'll Do",
        body: "Test new wearable technology devices and provide valuable feedback. Your input \
               helps ensure devices work for a diverse, global user base.",
    },
    Card {
        icon: "📍",
        title: "Location",
        body: "Meta facility in Midtown Manhattan near Penn Station (ZIP: 10001). Excellent \
               public transportation access via subway, LIRR, and NJ Transit.",
    },
    Card {
        icon: "🔒",
        title: "Privacy Protected",
        body: "No biometrics or personal information beyond your application form will be \
               collected. Your privacy and data security are our priority.",
    },
    Card {
        icon: "💳",
        title: "Fast Payment",
        body: "Receive $150 compensation within 48 hours via Visa gift card or PayPal. Quick \
               and convenient payment processing.",
    },
    Card {
        icon: "🌟",
        title: "User Experience",
        body: "300+ NYU Students and 200+ individuals have already completed our study.",
    },
    Card {
        icon: "⚡",
        title: "Quick Process",
        body: "Most people complete the test at the first attempt.",
    },
];

/// Viewport width at or below which `slides_to_show` changes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakpoint {
    pub max_width: u32,
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
}

/// Slider behavior for the overview carousel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselSettings {
    pub dots: bool,
    pub infinite: bool,
    pub speed_ms: u32,
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
    pub autoplay: bool,
    pub autoplay_speed_ms: u32,
    pub pause_on_hover: bool,
    pub responsive: Vec<Breakpoint>,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            dots: true,
            infinite: true,
            speed_ms: 500,
            slides_to_show: 3,
            slides_to_scroll: 1,
            autoplay: true,
            autoplay_speed_ms: 4000,
            pause_on_hover: true,
            responsive: vec![
                Breakpoint { max_width: 1024, slides_to_show: 2, slides_to_scroll: 1 },
                Breakpoint { max_width: 768, slides_to_show: 1, slides_to_scroll: 1 },
            ],
        }
    }
}

impl CarouselSettings {
    /// Breakpoint in effect for a viewport width: the narrowest one that
    /// still covers it
    fn breakpoint_for(&self, width: u32) -> Option<&Breakpoint> {
        self.responsive
            .iter()
            .filter(|b| width <= b.max_width)
            .min_by_key(|b| b.max_width)
    }

    pub fn slides_to_show_for(&self, width: u32) -> usize {
        self.breakpoint_for(width)
            .map(|b| b.slides_to_show)
            .unwrap_or(self.slides_to_show)
            .max(1)
    }

    pub fn slides_to_scroll_for(&self, width: u32) -> usize {
        self.breakpoint_for(width)
            .map(|b| b.slides_to_scroll)
            .unwrap_or(self.slides_to_scroll)
            .max(1)
    }

    /// Number of distinct start positions (and dots)
    pub fn positions(&self, count: usize, width: u32) -> usize {
        if self.infinite {
            count
        } else {
            count.saturating_sub(self.slides_to_show_for(width)) + 1
        }
    }

    /// Start index after one autoplay step or "next" click
    pub fn advance(&self, index: usize, count: usize, width: u32) -> usize {
        if count == 0 {
            return 0;
        }
        let step = self.slides_to_scroll_for(width);
        let positions = self.positions(count, width);
        let next = index + step;

        if self.infinite {
            next % count
        } else {
            next.min(positions.saturating_sub(1))
        }
    }

    /// Start index after a "previous" click
    pub fn retreat(&self, index: usize, count: usize, width: u32) -> usize {
        if count == 0 {
            return 0;
        }
        let step = self.slides_to_scroll_for(width) % count;

        if self.infinite {
            (index + count - step) % count
        } else {
            index.saturating_sub(step)
        }
    }

    /// Card indices visible from a start position
    pub fn visible(&self, index: usize, count: usize, width: u32) -> Vec<usize> {
        let shown = self.slides_to_show_for(width).min(count);
        (0..shown).map(|offset| (index + offset) % count.max(1)).collect()
    }
}

// ============================================
// Requirements
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RequirementCategory {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const REQUIREMENTS: [RequirementCategory; 3] = [
    RequirementCategory {
        icon: "👤",
        title: "Basic Eligibility",
        items: &[
            "Must be 18 years or older",
            "Proficient in spoken and written English",
            "International students welcome (bring passport)",
            "Available during NYC business hours",
        ],
    },
    RequirementCategory {
        icon: "👁️",
        title: "Physical Requirements",
        items: &[
            "Normal or corrected hearing",
            "Normal vision or able to wear glasses/contacts",
            "Full use of hands and all 10 digits",
            "No pre-existing arm conditions",
        ],
    },
    RequirementCategory {
        icon: "🏥",
        title: "Health & Safety",
        items: &[
            "No history of epilepsy or seizures",
            "No severe traumatic brain injury history",
            "Not pregnant",
        ],
    },
];

// ============================================
// Important information
// ============================================

/// A paragraph segment; `strong` segments are emphasized
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Span {
    pub text: &'static str,
    pub strong: bool,
}

const fn plain(text: &'static str) -> Span {
    Span { text, strong: false }
}

const fn strong(text: &'static str) -> Span {
    Span { text, strong: true }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InfoCard {
    /// Prefix for the card's class names, e.g. "alert" -> `alert-card`
    pub kind: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static [Span],
}

pub const INFO_CARDS: [InfoCard; 3] = [
    InfoCard {
        kind: "eligibility",
        icon: "🎯",
        title: "Eligibility & Exclusions",
        body: &[
            plain("Guaranteed spot unless you've already completed this study. "),
            strong("Not eligible"),
            plain(
                " if you've participated in Gauntlet projects with uTest, User Interviews, \
                 Shiftsmart, or similar vendors.",
            ),
        ],
    },
    InfoCard {
        kind: "alert",
        icon: "📋",
        title: "Required Documentation",
        body: &[
            plain("Bring a "),
            strong("physical copy"),
            plain(
                " of valid state/government-issued ID or passport (for international \
                 students). Digital copies and expired IDs will not be accepted.",
            ),
        ],
    },
    InfoCard {
        kind: "referral",
        icon: "💰",
        title: "Referral Bonus Program",
        body: &[plain(
            "Earn additional compensation for successful referrals! Make sure they mention \
             your name and email during the application process.",
        )],
    },
];

// ============================================
// Application form
// ============================================

/// Embedded third-party form
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormEmbed {
    pub src: &'static str,
    pub width: u32,
    pub height: u32,
    pub title: &'static str,
}

pub const APPLICATION_FORM: FormEmbed = FormEmbed {
    src: "https://docs.google.com/forms/d/e/1FAIpQLSdpyAt-cl1BZXdwrHLB4M9VLtIzB-BruDGsDekEPL8flGgDlg/viewform?embedded=true",
    width: 1400,
    height: 1609,
    title: "Wearable Tech Study Application Form",
};

/// Shown by browsers that do not load the iframe
pub const FORM_LOADING: &str = "Loading application form...";

/// One paragraph each
pub const FORM_INTRO: [&str; 2] = [
    "Should take less than 5 minutes. ",
    "Complete the form below to apply for the wearable technology testing study. Make sure \
     to fill out all required fields.",
];

// ============================================
// Footer
// ============================================

pub const FOOTER_DISCLAIMER: &str =
    "Not formally affiliated with Meta or NYU. Any representation is for informational purposes only.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Link {
    pub href: &'static str,
    pub label: &'static str,
}

pub const SUPPORT_LINKS: [Link; 2] = [
    Link { href: "https://www.utest.com/privacy-policy", label: "Privacy Policy" },
    Link { href: "mailto:gais.impactacademy@gmail.com", label: "Contact Mira" },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SocialLink {
    pub href: &'static str,
    pub icon: &'static str,
    pub alt: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink {
        href: "https://x.com/utest",
        icon: "https://s3.us-east-1.amazonaws.com/utest.com/assets/img/twitter.svg",
        alt: "X",
    },
    SocialLink {
        href: "https://www.instagram.com/utestinc/",
        icon: "https://s3.us-east-1.amazonaws.com/utest.com/assets/img/instagram.svg",
        alt: "Instagram",
    },
    SocialLink {
        href: "https://www.facebook.com/utest",
        icon: "https://s3.us-east-1.amazonaws.com/utest.com/assets/img/facebook.svg",
        alt: "Facebook",
    },
    SocialLink {
        href: "https://www.linkedin.com/company/utest",
        icon: "https://s3.us-east-1.amazonaws.com/utest.com/assets/img/linkedin.svg",
        alt: "LinkedIn",
    },
    SocialLink {
        href: "https://www.reddit.com/r/UTEST/",
        icon: "https://s3.us-east-1.amazonaws.com/utest.com/assets/img/reddit.svg",
        alt: "Reddit",
    },
];
