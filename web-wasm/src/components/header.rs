//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"M.A.R.S"</h1>
            <p>"Screen biomedical papers with AI"</p>
        </header>
    }
}
