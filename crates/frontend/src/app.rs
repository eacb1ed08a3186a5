use crate::chat::ChatForm;
use crate::config::ClientConfig;
use crate::controller::DocChatController;
use crate::conversation::ConversationView;
use crate::shared::api_utils::Endpoints;
use crate::shared::icons::icon;
use crate::shared::transport::HttpTransport;
use crate::upload::UploadForm;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let endpoints = Endpoints::from_config(&config);
    log::info!("chat endpoint {}, upload endpoint {}", endpoints.chat, endpoints.upload);

    let controller = DocChatController::new(HttpTransport::new(endpoints));

    let entries = Memo::new(move |_| controller.chat.with(|s| s.log.entries().to_vec()));

    view! {
        <ConfigProvider>
            <div class="docchat">
                <Flex
                    justify=FlexJustify::SpaceBetween
                    align=FlexAlign::Center
                    style="margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);"
                >
                    <h1>"DocChat"</h1>
                    <Flex gap=FlexGap::Medium align=FlexAlign::Center>
                        <span class="docchat__meta">
                            {icon("document")}
                            {move || {
                                controller
                                    .upload
                                    .with(|s| s.active_document().map(|d| format!(" Active document: {}", d)))
                                    .unwrap_or_else(|| " No document indexed".to_string())
                            }}
                        </span>
                        <span class="docchat__meta">
                            {move || format!("Messages: {}", controller.chat.with(|s| s.log.len()))}
                        </span>
                    </Flex>
                </Flex>

                <UploadForm controller=controller />
                <ConversationView entries=entries container=controller.history />
                <ChatForm controller=controller />
            </div>
        </ConfigProvider>
    }
}
