use leptos::prelude::*;

/// Banner naming the tag currently filtering the feed, with a way out.
#[component]
pub fn ActiveTag(tag: String, on_clear: Callback<()>) -> impl IntoView {
    view! {
        <div class="active-tag">
            <span class="active-tag-label">{tag}</span>
            <button class="active-tag-clear" on:click=move |_| on_clear.run(())>
                "Clear filter"
            </button>
        </div>
    }
}
