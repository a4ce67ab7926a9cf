//! Landing route for a rejected launch link.

use leptos::prelude::*;

/// `/error`: the auth token did not match this running instance.
#[component]
pub fn AuthErrorPage() -> impl IntoView {
    view! {
        <section class="auth-error-page">
            <h1>"Link expired"</h1>
            <p>"This address belongs to an earlier launch. Start GW2 Addon Manager again to open a fresh session."</p>
        </section>
    }
}
