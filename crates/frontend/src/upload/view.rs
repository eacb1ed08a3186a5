//! Upload Flow - View Component

use crate::controller::DocChatController;
use crate::shared::components::ui::Button;
use crate::shared::dom_contract::{FILE_INPUT, UPLOAD_BUTTON, UPLOAD_FORM, UPLOAD_STATUS};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn UploadForm(controller: DocChatController) -> impl IntoView {
    let busy = Signal::derive(move || controller.upload_busy());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit_upload();
    };

    view! {
        <form id=UPLOAD_FORM class="upload-form" on:submit=on_submit>
            <input
                type="file"
                id=FILE_INPUT
                accept=".pdf,application/pdf"
                node_ref=controller.file_input
                disabled=move || busy.get()
            />
            <Button id=UPLOAD_BUTTON button_type="submit" variant="secondary" disabled=busy busy=busy>
                {icon("upload")}
                " Upload & Index"
            </Button>
            <span
                id=UPLOAD_STATUS
                class=move || controller.upload.with(|s| s.status().tone.css_class())
            >
                {move || controller.upload.with(|s| s.status().text.clone())}
            </span>
        </form>
    }
}
