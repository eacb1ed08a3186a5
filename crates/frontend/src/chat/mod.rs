//! Chat Flow
//!
//! - flow.rs: `ChatFlow` state machine and the turn orchestrator
//! - view.rs: chat form

pub mod flow;
mod view;

pub use view::ChatForm;
