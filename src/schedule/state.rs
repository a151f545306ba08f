//! Fetch lifecycle state
//!
//! The availability section is always in exactly one of three states.
//! The document is replaced wholesale; nothing is merged.

use super::error::ScheduleError;
use super::types::ScheduleDocument;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScheduleState {
    /// Request in flight
    #[default]
    Loading,
    /// Request failed, with the message shown to the visitor
    Failed(String),
    /// Document received
    Loaded(ScheduleDocument),
}

impl ScheduleState {
    pub fn from_result(result: Result<ScheduleDocument, ScheduleError>) -> Self {
        match result {
            Ok(doc) => ScheduleState::Loaded(doc),
            Err(e) => ScheduleState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ScheduleState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ScheduleState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The document, only once it has loaded successfully
    pub fn document(&self) -> Option<&ScheduleDocument> {
        match self {
            ScheduleState::Loaded(doc) => Some(doc),
            _ => None,
        }
    }
}

/// Banner text for a failed fetch
pub fn error_banner(message: &str) -> String {
    format!("Unable to load availability data: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state = ScheduleState::default();
        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert!(state.document().is_none());
    }

    #[test]
    fn test_failure_has_no_document() {
        let state = ScheduleState::from_result(Err(ScheduleError::Http { status: 503 }));
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("HTTP error! status: 503"));
        assert!(state.document().is_none());
        assert_eq!(
            error_banner(state.error().unwrap()),
            "Unable to load availability data: HTTP error! status: 503"
        );
    }

    #[test]
    fn test_success() {
        let state = ScheduleState::from_result(Ok(ScheduleDocument::default()));
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.document(), Some(&ScheduleDocument::default()));
    }
}
