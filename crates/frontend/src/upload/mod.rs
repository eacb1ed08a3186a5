//! Upload Flow
//!
//! - flow.rs: `UploadFlow` state and the upload orchestrator
//! - view.rs: upload form and status line

pub mod flow;
mod view;

pub use view::UploadForm;
