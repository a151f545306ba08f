//! State Management
//!
//! Page-wide reactive state.

pub mod page;

pub use page::{provide_page_state, PageState};
