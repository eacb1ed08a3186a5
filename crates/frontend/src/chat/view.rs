//! Chat Flow - View Component

use crate::controller::DocChatController;
use crate::shared::components::ui::Button;
use crate::shared::dom_contract::{CHAT_FORM, CHAT_INPUT, SEND_BUTTON};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ChatForm(controller: DocChatController) -> impl IntoView {
    let busy = Signal::derive(move || controller.chat_busy());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit_chat();
    };

    view! {
        <form id=CHAT_FORM class="chat-form" on:submit=on_submit>
            <input
                type="text"
                id=CHAT_INPUT
                class="form__input"
                node_ref=controller.chat_input
                placeholder="Ask a question about the document..."
                autocomplete="off"
                prop:value=move || controller.draft.get()
                on:input=move |ev| controller.set_draft(event_target_value(&ev))
                disabled=move || busy.get()
            />
            <Button id=SEND_BUTTON button_type="submit" disabled=busy busy=busy>
                {icon("send")}
                {move || if busy.get() { " Sending..." } else { " Send" }}
            </Button>
        </form>
    }
}
