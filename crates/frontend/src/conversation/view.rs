//! Conversation - View Components

use super::model::{Disclosure, Evidence, MessageEntry, MessageRole};
use crate::shared::dom_contract::CHAT_HISTORY;
use crate::shared::icons::icon;
use leptos::html::Div;
use leptos::prelude::*;

pub const EVIDENCE_LABEL: &str = "View Retrieved Evidence";

/// Scrollable log container; keeps the newest entry in view.
#[component]
pub fn ConversationView(
    #[prop(into)] entries: Signal<Vec<MessageEntry>>,
    container: NodeRef<Div>,
) -> impl IntoView {
    Effect::new(move |_| {
        let _count = entries.with(|e| e.len());
        if let Some(el) = container.get() {
            request_animation_frame(move || {
                el.set_scroll_top(el.scroll_height());
            });
        }
    });

    view! {
        <div id=CHAT_HISTORY class="chat-history" node_ref=container>
            <For
                each=move || entries.get()
                key=|entry| entry.id()
                let:entry
            >
                <MessageBubble entry=entry />
            </For>
        </div>
    }
}

#[component]
pub fn MessageBubble(entry: MessageEntry) -> impl IntoView {
    let class = format!("message {}", entry.role().css_class());
    let time = entry.time_label();
    let text = entry.text().to_string();

    match entry.role() {
        MessageRole::Bot => {
            let evidence = entry.evidence().cloned();
            view! {
                <div class=class title=time>
                    <div class="message-text">{text}</div>
                    {evidence.map(|evidence| view! { <EvidencePanel evidence=evidence /> })}
                </div>
            }
            .into_any()
        }
        MessageRole::User | MessageRole::System => view! {
            <div class=class title=time>{text}</div>
        }
        .into_any(),
    }
}

/// Disclosure control: a toggle button and an initially hidden evidence block.
#[component]
pub fn EvidencePanel(evidence: Evidence) -> impl IntoView {
    let disclosure = RwSignal::new(Disclosure::default());
    let revealed = move || disclosure.with(|d| d.is_revealed());
    let label = format!(" {} ({})", EVIDENCE_LABEL, evidence.count());
    let text = evidence.display_text();

    view! {
        <div class="sources-container">
            <button
                type="button"
                class="sources-btn"
                aria-expanded=move || revealed().to_string()
                on:click=move |_| disclosure.update(|d| {
                    d.toggle();
                })
            >
                {move || if revealed() { icon("chevron-down") } else { icon("chevron-right") }}
                {label}
            </button>
            <div
                class="sources-content"
                style:display=move || if revealed() { "block" } else { "none" }
                style:white-space="pre-wrap"
            >
                {text}
            </div>
        </div>
    }
}
