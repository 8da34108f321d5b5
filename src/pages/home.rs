use leptos::prelude::*;
use leptos_meta::*;

use crate::components::feed::Feed;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Promptfeed - discover and share prompts" />
        <section class="hero">
            <h1>"Discover & share prompts"</h1>
            <p>"Browse prompts written by the community. Search by text or username, or click a tag to narrow the list."</p>
        </section>
        <Feed />
    }
}
