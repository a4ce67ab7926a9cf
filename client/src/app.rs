//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::root_layout::RootLayout;
use crate::components::tools_panel::ToolContent;
use crate::pages::auth_error::AuthErrorPage;
use crate::pages::home::HomePage;
use crate::state::controls::AppControls;
use crate::state::notifications::Notification;
use crate::state::store::StoreContext;
use crate::state::tool_panel::ToolPanelSnapshot;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the store slot, the application controls and their render
/// signals, then swaps in the durable store once running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = StoreContext::default();
    let controls = AppControls::<ToolContent>::new();

    let messages = RwSignal::new(controls.queue().messages());
    let messages_sub = controls.queue().subscribe(move |list| {
        let _ = messages.try_set(list.to_vec());
    });
    let panel = RwSignal::new(controls.panel().snapshot());
    let panel_sub = controls.panel().subscribe(move |snapshot: &ToolPanelSnapshot<ToolContent>| {
        let _ = panel.try_set(snapshot.clone());
    });

    provide_context(store.clone());
    provide_context(controls);
    provide_context::<RwSignal<Vec<Notification>>>(messages);
    provide_context(panel);

    // Effects only run in the browser, after hydration.
    {
        let store = store.clone();
        Effect::new(move |_| activate_durable_store(&store));
    }

    on_cleanup(move || {
        drop(messages_sub);
        drop(panel_sub);
        store.store().close();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/gw2am.css"/>
        <Title text="GW2 Addon Manager"/>

        <Router>
            <RootLayout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("error") view=AuthErrorPage/>
                </Routes>
            </RootLayout>
        </Router>
    }
}

/// Replace the session default with the `localStorage`-backed store and
/// grant the default consent levels.
fn activate_durable_store(store: &StoreContext) {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;

        use crate::state::consent::DEFAULT_CONSENT;
        use crate::state::medium::WebStorage;
        use crate::state::store::BrowserStore;

        let durable = BrowserStore::durable(Arc::new(WebStorage::Local));
        durable.set_consent_levels(DEFAULT_CONSENT);
        let previous = store.replace(durable);
        previous.close();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = store;
    }
}
