//! Flashbar-style list of queued notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the notification render signal provided by `App`, newest first.
//! Dismiss buttons go through the queue so `on_dismiss` callbacks can veto.

#[cfg(test)]
#[path = "notification_bar_test.rs"]
mod notification_bar_test;

use leptos::prelude::*;

use crate::components::tools_panel::ToolContent;
use crate::state::controls::use_controls;
use crate::state::notifications::{MessageType, Notification, NotificationContent};
use crate::util::error_notify::{ErrorDetailSection, ErrorReport};

/// Notification list at the top of the layout.
#[component]
pub fn NotificationBar() -> impl IntoView {
    let messages = expect_context::<RwSignal<Vec<Notification>>>();
    let controls = use_controls::<ToolContent>();

    view! {
        <div class="notification-bar" role="status" aria-live="polite">
            {move || {
                messages
                    .get()
                    .into_iter()
                    .map(|notification| {
                        let queue = controls.queue().clone();
                        view! { <NotificationItem notification=notification on_dismiss=Callback::new(move |id: String| { queue.dismiss(&id); }) /> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn NotificationItem(notification: Notification, on_dismiss: Callback<String>) -> impl IntoView {
    let Notification { id, message } = notification;
    let class = message_class(message.kind);
    let header = message.header.clone();
    let body = match message.content {
        NotificationContent::Text(text) => view! { <span class="notification__text">{text}</span> }.into_any(),
        NotificationContent::Error(report) => view! { <ErrorContent report=report /> }.into_any(),
    };
    let dismiss = message.dismissible.then(|| {
        let on_click = move |_| on_dismiss.run(id.clone());
        view! {
            <button class="notification__dismiss" on:click=on_click title="Dismiss">
                "✕"
            </button>
        }
    });

    view! {
        <div class=class>
            {message.loading.then(|| view! { <span class="notification__spinner" aria-hidden="true"></span> })}
            <div class="notification__content">
                {header.map(|h| view! { <div class="notification__header">{h}</div> })}
                {body}
            </div>
            {dismiss}
        </div>
    }
}

#[component]
fn ErrorContent(report: ErrorReport) -> impl IntoView {
    let ErrorReport { summary, details } = report;
    let details = match details {
        ErrorDetailSection::Api { fields, payload } => view! {
            <dl class="notification__fields">
                {fields
                    .into_iter()
                    .map(|(key, value)| view! { <dt>{key}</dt><dd>{value}</dd> })
                    .collect_view()}
            </dl>
            {payload.map(|p| view! { <pre class="notification__code">{p}</pre> })}
        }
        .into_any(),
        ErrorDetailSection::Code(code) => view! { <pre class="notification__code">{code}</pre> }.into_any(),
    };

    view! {
        <span class="notification__text">{summary}</span>
        <details class="notification__details">
            <summary>"Details"</summary>
            {details}
        </details>
    }
}

/// CSS class list for a message of `kind`.
pub(crate) fn message_class(kind: MessageType) -> String {
    format!("notification notification--{}", kind.as_str())
}
