//! Application chrome: header, notifications, content and tool panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route. Applies the theme attributes whenever the effective
//! preferences change and hosts the preferences modal.

use leptos::prelude::*;

use crate::components::notification_bar::NotificationBar;
use crate::components::preferences_panel::PreferencesPanel;
use crate::components::tools_panel::ToolsPanel;
use crate::util::preferences::use_preferences;
use crate::util::theme;

/// Layout shell around page content.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    let (prefs, _) = use_preferences();
    Effect::new(move |_| theme::apply(&prefs.get()));

    let show_preferences = RwSignal::new(false);
    let on_open_preferences = move |_| show_preferences.set(true);
    let on_close_preferences = Callback::new(move |()| show_preferences.set(false));

    view! {
        <div class="root-layout">
            <header class="root-layout__header">
                <a class="root-layout__brand" href="/">"GW2 Addon Manager"</a>
                <button class="root-layout__preferences" on:click=on_open_preferences title="Preferences">
                    "Preferences"
                </button>
            </header>
            <NotificationBar />
            <div class="root-layout__body">
                <main class="root-layout__main">{children()}</main>
                <ToolsPanel />
            </div>
            <Show when=move || show_preferences.get()>
                <PreferencesPanel on_close=on_close_preferences />
            </Show>
        </div>
    }
}
