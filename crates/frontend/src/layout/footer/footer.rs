use crate::shared::api_utils::api_url;
use chrono::Datelike;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "AI service: online",
            ServerStatus::Offline => "AI service: offline",
            ServerStatus::Checking => "AI service: checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);
    let year = chrono::Local::now().year();

    Effect::new(move |_| {
        spawn_local(async move {
            status.set(if ping_server().await {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span>{format!("© {} NCC. All rights reserved.", year)}</span>
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}

/// The dashboard works without the backend; only the AI summary needs it.
async fn ping_server() -> bool {
    match Request::get(&api_url("/health")).send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            log::debug!("health check failed: {}", e);
            false
        }
    }
}
