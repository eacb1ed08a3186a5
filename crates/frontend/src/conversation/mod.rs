//! Conversation log and its renderer.
//!
//! Structure:
//! - model.rs: message entries, evidence, append-only log, disclosure state
//! - view.rs: components rendering the log

mod model;
mod view;

pub use model::{format_time, ConversationLog, Disclosure, Evidence, MessageEntry, MessageRole};
pub use view::{ConversationView, EvidencePanel, MessageBubble};
