//! Upload Flow - state and orchestrator

use contracts::api::upload::UploadAck;

use crate::shared::state_cell::{ReleaseGuard, StateCell};
use crate::shared::transport::{ServerReply, TransportError, UploadTransport};

pub const INDEXING: &str = "Building vector index...";
pub const UPLOAD_FAILED: &str = "Upload failed.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusTone {
    #[default]
    Neutral,
    Success,
    Error,
}

impl StatusTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTone::Neutral => "",
            StatusTone::Success => "success",
            StatusTone::Error => "error",
        }
    }
}

/// Status line under the upload form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadStatus {
    pub text: String,
    pub tone: StatusTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    Indexed,
    Declined,
    TransportFailure,
}

/// A file picked by the user, with the name it is displayed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile<F> {
    pub file: F,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFlow {
    busy: bool,
    status: UploadStatus,
    in_flight: Option<String>,
    active_document: Option<String>,
}

impl UploadFlow {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    /// Name of the last document the server indexed.
    pub fn active_document(&self) -> Option<&str> {
        self.active_document.as_deref()
    }

    /// Enter the busy state. `false` (and nothing changes) when an upload is
    /// already outstanding.
    pub fn begin(&mut self, name: &str) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.in_flight = Some(name.to_string());
        self.status = UploadStatus {
            text: INDEXING.to_string(),
            tone: StatusTone::Neutral,
        };
        true
    }

    /// Record the outcome and leave the busy state.
    pub fn settle(
        &mut self,
        reply: Result<ServerReply<UploadAck>, TransportError>,
    ) -> UploadOutcome {
        let name = self.in_flight.take();
        self.busy = false;

        let (outcome, text, tone) = match reply {
            Ok(ServerReply::Ack(ack)) => {
                if name.is_some() {
                    self.active_document = name;
                }
                (UploadOutcome::Indexed, ack.message, StatusTone::Success)
            }
            Ok(ServerReply::Declined(error)) => (
                UploadOutcome::Declined,
                format!("Error: {}", error),
                StatusTone::Error,
            ),
            Err(_) => (
                UploadOutcome::TransportFailure,
                UPLOAD_FAILED.to_string(),
                StatusTone::Error,
            ),
        };
        self.status = UploadStatus { text, tone };
        outcome
    }

    /// Leave the busy state without an outcome; no-op when idle.
    pub fn release(&mut self) {
        if self.busy {
            log::warn!("upload released without a reply");
            self.busy = false;
            self.in_flight = None;
        }
    }
}

/// Synchronous half: validate the selection and enter the busy state.
///
/// No file, or an upload already in flight, is a no-op.
pub fn begin_upload<F, S>(state: &S, selection: Option<SelectedFile<F>>) -> Option<SelectedFile<F>>
where
    S: StateCell<UploadFlow>,
{
    let Some(selected) = selection else {
        log::debug!("ignoring upload submission without a file");
        return None;
    };
    if state.apply(|s| s.begin(&selected.name))? {
        Some(selected)
    } else {
        log::debug!("ignoring upload submission while another is pending");
        None
    }
}

/// Asynchronous half: one round-trip, then settle.
pub async fn complete_upload<T, S>(
    transport: &T,
    state: &S,
    selected: SelectedFile<T::File>,
) -> Option<UploadOutcome>
where
    T: UploadTransport,
    S: StateCell<UploadFlow>,
{
    let _release = ReleaseGuard::new(state, UploadFlow::release);

    log::info!("uploading {}", selected.name);
    let reply = transport.upload(&selected.file).await;
    match &reply {
        Ok(ServerReply::Ack(ack)) => log::info!("{} indexed: {}", selected.name, ack.message),
        Ok(ServerReply::Declined(error)) => log::warn!("upload declined: {}", error),
        Err(e) => log::error!("upload transport failure: {}", e),
    }

    state.apply(|s| s.settle(reply))
}

/// A whole upload: `begin_upload` followed by `complete_upload`.
pub async fn run_upload<T, S>(
    transport: &T,
    state: &S,
    selection: Option<SelectedFile<T::File>>,
) -> Option<UploadOutcome>
where
    T: UploadTransport,
    S: StateCell<UploadFlow>,
{
    let selected = begin_upload(state, selection)?;
    complete_upload(transport, state, selected).await
}
