//! Page controller
//!
//! Created once by `App` and handed to the forms. Owns the reactive state of
//! both flows, the element references the flows need, and the transport.

use leptos::html::{Div, Input};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::chat::flow::{begin_turn, complete_turn, ChatState};
use crate::shared::transport::HttpTransport;
use crate::upload::flow::{begin_upload, complete_upload, SelectedFile, UploadFlow};

#[derive(Clone, Copy)]
pub struct DocChatController {
    pub chat: RwSignal<ChatState>,
    /// Chat input text. Kept apart from `chat` so typing does not notify
    /// readers of the conversation log.
    pub draft: RwSignal<String>,
    pub upload: RwSignal<UploadFlow>,
    pub chat_input: NodeRef<Input>,
    pub file_input: NodeRef<Input>,
    pub history: NodeRef<Div>,
    transport: StoredValue<HttpTransport>,
}

impl DocChatController {
    pub fn new(transport: HttpTransport) -> Self {
        Self {
            chat: RwSignal::new(ChatState::default()),
            draft: RwSignal::new(String::new()),
            upload: RwSignal::new(UploadFlow::default()),
            chat_input: NodeRef::new(),
            file_input: NodeRef::new(),
            history: NodeRef::new(),
            transport: StoredValue::new(transport),
        }
    }

    pub fn chat_busy(&self) -> bool {
        self.chat.with(|s| s.is_busy())
    }

    pub fn upload_busy(&self) -> bool {
        self.upload.with(|s| s.is_busy())
    }

    pub fn set_draft(&self, text: String) {
        self.draft.set(text);
    }

    /// Chat form submission. Echo and input clearing happen before this returns;
    /// the round-trip runs as a local task.
    pub fn submit_chat(&self) {
        let Some(request) = begin_turn(&self.chat, &self.draft) else {
            return;
        };

        let chat = self.chat;
        let chat_input = self.chat_input;
        let transport = self.transport.get_value();
        spawn_local(async move {
            complete_turn(&transport, &chat, request).await;
            // after the re-render that re-enables the input
            request_animation_frame(move || {
                if let Some(input) = chat_input.get_untracked() {
                    let _ = input.focus();
                }
            });
        });
    }

    /// Upload form submission. Without a selected file nothing happens.
    pub fn submit_upload(&self) {
        let Some(selected) = begin_upload(&self.upload, self.selected_file()) else {
            return;
        };

        let upload = self.upload;
        let transport = self.transport.get_value();
        spawn_local(async move {
            complete_upload(&transport, &upload, selected).await;
        });
    }

    fn selected_file(&self) -> Option<SelectedFile<web_sys::File>> {
        let input = self.file_input.get_untracked()?;
        let file = input.files()?.get(0)?;
        Some(SelectedFile {
            name: file.name(),
            file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::Endpoints;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn controller() -> DocChatController {
        DocChatController::new(HttpTransport::new(Endpoints {
            upload: "http://localhost:5000/upload".to_string(),
            chat: "http://localhost:5000/chat".to_string(),
        }))
    }

    #[test]
    fn test_typing_does_not_recompute_log_readers() {
        let controller = controller();
        for i in 0..250 {
            controller.chat.update(|s| {
                s.log.push_user(format!("question {i}"));
                s.log.push_bot(format!("answer {i}"), Vec::new());
            });
        }

        let runs = Arc::new(AtomicUsize::new(0));
        let entries = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                controller.chat.with(|s| s.log.entries().to_vec())
            }
        });
        assert_eq!(entries.with_untracked(|e| e.len()), 500);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        let mut typed = String::new();
        for c in "termination".chars() {
            typed.push(c);
            controller.set_draft(typed.clone());
            entries.with_untracked(|_| ());
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(controller.draft.get_untracked(), "termination");

        let request = begin_turn(&controller.chat, &controller.draft);
        assert!(request.is_some());
        assert_eq!(entries.with_untracked(|e| e.len()), 501);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert_eq!(controller.draft.get_untracked(), "");
    }
}
