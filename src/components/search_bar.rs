use leptos::prelude::*;

#[component]
pub fn SearchBar(
    query: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    // Filtering happens as the user types; submitting the form does nothing.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="text"
                placeholder="Search for a tag or a username"
                prop:value=move || query.get()
                on:input=move |ev| {
                    on_input.run(event_target_value(&ev));
                }
            />
        </form>
    }
}
