//! Chat Flow - state machine and orchestrator
//!
//! One turn walks `Idle -> Echoed -> Pending -> Resolved -> Idle`. The echo and
//! dispatch happen in one synchronous step, so observers only ever see `Idle`
//! or `Pending` outside of a turn's settlement.

use contracts::api::chat::{ChatAnswer, ChatRequest};

use crate::conversation::ConversationLog;
use crate::shared::state_cell::{ReleaseGuard, StateCell};
use crate::shared::transport::{ChatTransport, ServerReply, TransportError};

/// Shown when no usable reply was obtained.
pub const CONNECTION_FAILED: &str = "Failed to connect to the reasoning engine.";

/// How a pending turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Answered,
    Declined,
    TransportFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Idle,
    /// Query echoed into the log, request not yet dispatched.
    Echoed { query: String },
    /// Request in flight.
    Pending,
    Resolved(Resolution),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("a chat turn is already in progress")]
    NotIdle,
    #[error("no echoed query to dispatch")]
    NotEchoed,
    #[error("no chat request is pending")]
    NotPending,
    #[error("chat turn has not been resolved")]
    NotResolved,
}

/// Per-turn state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatFlow {
    phase: ChatPhase,
}

impl ChatFlow {
    pub fn phase(&self) -> &ChatPhase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, ChatPhase::Idle)
    }

    /// Idle -> Echoed. Returns `Ok(None)` for blank input, leaving everything
    /// untouched. Otherwise echoes the trimmed query.
    pub fn submit(&mut self, log: &mut ConversationLog, input: &str) -> Result<Option<String>, FlowError> {
        if self.is_busy() {
            return Err(FlowError::NotIdle);
        }
        let query = input.trim().to_string();
        if query.is_empty() {
            return Ok(None);
        }
        log.push_user(query.clone());
        self.phase = ChatPhase::Echoed {
            query: query.clone(),
        };
        Ok(Some(query))
    }

    /// Echoed -> Pending
    pub fn dispatch(&mut self) -> Result<ChatRequest, FlowError> {
        match std::mem::take(&mut self.phase) {
            ChatPhase::Echoed { query } => {
                self.phase = ChatPhase::Pending;
                Ok(ChatRequest::new(query))
            }
            other => {
                self.phase = other;
                Err(FlowError::NotEchoed)
            }
        }
    }

    /// Pending -> Resolved, appending the bot or system entry.
    pub fn resolve(
        &mut self,
        log: &mut ConversationLog,
        reply: Result<ServerReply<ChatAnswer>, TransportError>,
    ) -> Result<Resolution, FlowError> {
        if self.phase != ChatPhase::Pending {
            return Err(FlowError::NotPending);
        }
        let resolution = match reply {
            Ok(ServerReply::Ack(answer)) => {
                let ChatAnswer { answer, sources } = answer;
                log.push_bot(answer, sources.unwrap_or_default());
                Resolution::Answered
            }
            Ok(ServerReply::Declined(error)) => {
                log.push_system(format!("Error: {}", error));
                Resolution::Declined
            }
            Err(_) => {
                log.push_system(CONNECTION_FAILED);
                Resolution::TransportFailure
            }
        };
        self.phase = ChatPhase::Resolved(resolution);
        Ok(resolution)
    }

    /// Resolved -> Idle
    pub fn finish(&mut self) -> Result<(), FlowError> {
        match self.phase {
            ChatPhase::Resolved(_) => {
                self.phase = ChatPhase::Idle;
                Ok(())
            }
            _ => Err(FlowError::NotResolved),
        }
    }

    /// Back to Idle from anywhere, without touching the log.
    pub fn abandon(&mut self) {
        self.phase = ChatPhase::Idle;
    }
}

/// Everything the chat side of the page renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    pub flow: ChatFlow,
    pub log: ConversationLog,
}

impl ChatState {
    /// Idle -> Pending in one step. `Ok(None)` when `input` is blank.
    pub fn begin_turn(&mut self, input: &str) -> Result<Option<ChatRequest>, FlowError> {
        match self.flow.submit(&mut self.log, input)? {
            Some(_) => self.flow.dispatch().map(Some),
            None => Ok(None),
        }
    }

    /// Pending -> Idle in one step.
    pub fn settle(
        &mut self,
        reply: Result<ServerReply<ChatAnswer>, TransportError>,
    ) -> Result<Resolution, FlowError> {
        let resolution = self.flow.resolve(&mut self.log, reply)?;
        self.flow.finish()?;
        Ok(resolution)
    }

    /// Clears a turn that never settled; no-op when idle.
    pub fn release(&mut self) {
        if self.flow.is_busy() {
            log::warn!("chat turn released without a reply");
            self.flow.abandon();
        }
    }

    pub fn is_busy(&self) -> bool {
        self.flow.is_busy()
    }
}

/// Synchronous half of a turn: echo the draft, clear it and mark the flow
/// pending. A refused or blank submission leaves the draft as typed.
pub fn begin_turn<S, D>(state: &S, draft: &D) -> Option<ChatRequest>
where
    S: StateCell<ChatState>,
    D: StateCell<String>,
{
    let input = draft.peek(String::clone)?;
    match state.apply(|s| s.begin_turn(&input))? {
        Ok(Some(request)) => {
            draft.apply(String::clear);
            Some(request)
        }
        Ok(None) => {
            log::debug!("ignoring blank chat submission");
            None
        }
        Err(e) => {
            log::debug!("chat submission refused: {}", e);
            None
        }
    }
}

/// Asynchronous half of a turn: one round-trip, then settle.
///
/// The flow leaves the busy state on every path, including this future being
/// dropped mid-request.
pub async fn complete_turn<T, S>(transport: &T, state: &S, request: ChatRequest) -> Option<Resolution>
where
    T: ChatTransport,
    S: StateCell<ChatState>,
{
    let _release = ReleaseGuard::new(state, ChatState::release);

    log::info!("sending chat query ({} chars)", request.query.chars().count());
    let reply = transport.ask(&request).await;
    match &reply {
        Ok(ServerReply::Ack(answer)) => {
            log::info!("chat answered with {} evidence chunks", answer.sources().len())
        }
        Ok(ServerReply::Declined(error)) => log::warn!("chat declined: {}", error),
        Err(e) => log::error!("chat transport failure: {}", e),
    }

    match state.apply(|s| s.settle(reply))? {
        Ok(resolution) => Some(resolution),
        Err(e) => {
            log::error!("chat turn could not settle: {}", e);
            None
        }
    }
}

/// A whole turn: `begin_turn` followed by `complete_turn`.
pub async fn run_chat_turn<T, S, D>(transport: &T, state: &S, draft: &D) -> Option<Resolution>
where
    T: ChatTransport,
    S: StateCell<ChatState>,
    D: StateCell<String>,
{
    let request = begin_turn(state, draft)?;
    complete_turn(transport, state, request).await
}
