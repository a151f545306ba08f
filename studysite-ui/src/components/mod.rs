//! UI Components
//!
//! One component per page section.

pub mod application_form;
pub mod availability;
pub mod carousel;
pub mod footer;
pub mod header;
pub mod hero;
pub mod info_cards;
pub mod loading;
pub mod requirements;

pub use application_form::ApplicationForm;
pub use availability::{AvailabilitySection, AvailabilityTableView};
pub use carousel::OverviewCarousel;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use info_cards::InfoCards;
pub use loading::Loading;
pub use requirements::Requirements;
