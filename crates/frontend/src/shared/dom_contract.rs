//! Element ids the page is built around.
//!
//! The components render these ids; after mounting, [`verify`] checks that every
//! one of them made it into the document.

pub const UPLOAD_FORM: &str = "upload-form";
pub const FILE_INPUT: &str = "pdf-upload";
pub const UPLOAD_BUTTON: &str = "upload-btn";
pub const UPLOAD_STATUS: &str = "upload-status";
pub const CHAT_FORM: &str = "chat-form";
pub const CHAT_INPUT: &str = "chat-input";
pub const SEND_BUTTON: &str = "send-btn";
pub const CHAT_HISTORY: &str = "chat-history";

pub const REQUIRED_IDS: [&str; 8] = [
    UPLOAD_FORM,
    FILE_INPUT,
    UPLOAD_BUTTON,
    UPLOAD_STATUS,
    CHAT_FORM,
    CHAT_INPUT,
    SEND_BUTTON,
    CHAT_HISTORY,
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("no document available")]
    NoDocument,
    #[error("required element #{0} is missing")]
    MissingElement(&'static str),
}

/// First required id for which `present` is false.
pub fn first_missing(present: impl Fn(&str) -> bool) -> Option<&'static str> {
    REQUIRED_IDS.into_iter().find(|id| !present(*id))
}

/// Check the live document against [`REQUIRED_IDS`].
pub fn verify() -> Result<(), MountError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::NoDocument)?;

    match first_missing(|id| document.get_element_by_id(id).is_some()) {
        Some(id) => Err(MountError::MissingElement(id)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present() {
        assert_eq!(first_missing(|_| true), None);
    }

    #[test]
    fn test_reports_missing_element() {
        assert_eq!(first_missing(|id| id != CHAT_HISTORY), Some(CHAT_HISTORY));
        assert_eq!(first_missing(|_| false), Some(UPLOAD_FORM));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = REQUIRED_IDS.to_vec();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), REQUIRED_IDS.len());
    }
}
