//! Landing page.
//!
//! Claims the tool panel with a short help text while mounted and offers
//! quick actions that exercise the notification surface.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::components::tools_panel::ToolContent;
use crate::net::api_error::ApiError;
use crate::state::controls::{use_controls, use_tools};
use crate::state::notifications::{MessageDefinition, MessageType};
use crate::util::date_format::{DateFormatter, use_date_format};

/// Empty until the browser has stamped the page.
fn opened_label(opened_at: Option<DateTime<Utc>>, formatter: DateFormatter) -> String {
    opened_at.map(|at| formatter.format_date_time(at)).unwrap_or_default()
}

/// Home route.
#[component]
pub fn HomePage() -> impl IntoView {
    let controls = use_controls::<ToolContent>();
    let open_tools = use_tools(ToolContent::new("Help", || {
        view! {
            <p>"Use Preferences in the header to change the date format, color scheme and density."</p>
        }
    }));

    let formatter = use_date_format();
    // Stamped in the browser only; server and hydration both render it empty.
    let opened_at = RwSignal::new(None::<DateTime<Utc>>);
    Effect::new(move |_| opened_at.set(Some(Utc::now())));
    let label = move || opened_label(opened_at.get(), formatter.get());

    let on_fail = {
        let report = controls.catch_notify::<ApiError>(Some("Failed to load addons"));
        move |_| report(ApiError::new(503, "Service Unavailable"))
    };
    let on_hello = move |_| {
        controls.notification().add_once(
            MessageDefinition::new(MessageType::Success, "Everything is up to date").dismissible(true),
        );
    };
    let on_toggle_tools = move |_| open_tools(true.into());

    view! {
        <section class="home-page">
            <h1>"GW2 Addon Manager"</h1>
            <p class="home-page__opened">"Opened " {label}</p>
            <div class="home-page__actions">
                <button on:click=on_hello>"Check for updates"</button>
                <button on:click=on_fail>"Simulate failure"</button>
                <button on:click=on_toggle_tools>"Show help"</button>
            </div>
        </section>
    }
}
