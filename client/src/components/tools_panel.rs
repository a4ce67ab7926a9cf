//! Side panel showing the current tool panel registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages claim the panel through `AppControls::tools()` (or `use_tools`);
//! this component only renders the snapshot signal provided by `App`.

#[cfg(test)]
#[path = "tools_panel_test.rs"]
mod tools_panel_test;

use leptos::prelude::*;

use crate::state::controls::use_controls;
use crate::state::set_state::SetState;
use crate::state::tool_panel::ToolPanelSnapshot;

/// Content a page places in the tool panel.
#[derive(Clone)]
pub struct ToolContent {
    pub title: String,
    pub body: ViewFn,
}

impl ToolContent {
    pub fn new(title: impl Into<String>, body: impl Into<ViewFn>) -> Self {
        Self { title: title.into(), body: body.into() }
    }
}

impl std::fmt::Debug for ToolContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContent").field("title", &self.title).finish_non_exhaustive()
    }
}

/// Tool panel at the side of the layout. Renders nothing without content.
#[component]
pub fn ToolsPanel() -> impl IntoView {
    let snapshot = expect_context::<RwSignal<ToolPanelSnapshot<ToolContent>>>();
    let controls = use_controls::<ToolContent>();

    let has_content = move || snapshot.with(|s| s.content.is_some());
    let class = move || panel_class(snapshot.with(|s| s.open));
    let on_toggle = move |_| controls.tools().open(toggle());

    view! {
        <Show when=has_content>
            <aside class=class>
                <div class="tools-panel__header">
                    <span class="tools-panel__title">
                        {move || snapshot.with(|s| s.content.as_ref().map(|c| c.title.clone()))}
                    </span>
                    <button class="tools-panel__toggle" on:click=on_toggle.clone() title="Toggle tools">
                        {move || toggle_label(snapshot.with(|s| s.open))}
                    </button>
                </div>
                <Show when=move || snapshot.with(|s| s.open)>
                    <div class="tools-panel__body">
                        {move || snapshot.with(|s| s.content.as_ref().map(|c| c.body.run()))}
                    </div>
                </Show>
            </aside>
        </Show>
    }
}

fn toggle() -> SetState<bool> {
    SetState::update(|open: &bool| !*open)
}

pub(crate) fn panel_class(open: bool) -> &'static str {
    if open { "tools-panel tools-panel--open" } else { "tools-panel" }
}

pub(crate) fn toggle_label(open: bool) -> &'static str {
    if open { "Hide" } else { "Show" }
}
