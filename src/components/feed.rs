use leptos::prelude::*;

use crate::api;
use crate::components::active_tag::ActiveTag;
use crate::components::prompt_card_list::PromptCardList;
use crate::components::search_bar::SearchBar;
use crate::feed::{Debounce, FeedState, SEARCH_DEBOUNCE};
use crate::session::use_card_context;

/// Searchable, tag-filterable list of every prompt.
#[component]
pub fn Feed() -> impl IntoView {
    let feed = RwSignal::new(FeedState::new());
    let debounce = StoredValue::new(Debounce::<TimeoutHandle>::new());
    let context = use_card_context();

    // Fetched once, in the browser only.
    let prompts = LocalResource::new(api::load_prompts);
    Effect::new(move |_| {
        if let Some(Ok(loaded)) = prompts.get() {
            feed.update(|f| f.replace_all(loaded));
        }
    });

    on_cleanup(move || {
        debounce.try_update_value(|d| d.cancel());
    });

    let on_search = Callback::new(move |raw: String| {
        debounce.update_value(|d| d.cancel());
        let Some(ticket) = feed.try_update(|f| f.search_input(raw)) else {
            return;
        };
        let scheduled = set_timeout_with_handle(
            move || {
                let ran = feed.try_update(|f| f.run_search(ticket)).unwrap_or(false);
                if ran {
                    debounce.try_update_value(|d| d.settle());
                }
            },
            SEARCH_DEBOUNCE,
        );
        match scheduled {
            Ok(handle) => debounce.update_value(|d| d.arm(handle)),
            Err(e) => tracing::warn!("could not schedule search: {e:?}"),
        }
    });

    let on_tag_click = Callback::new(move |tag: String| {
        debounce.update_value(|d| d.cancel());
        feed.update(|f| f.tag_click(tag));
    });

    let on_clear = Callback::new(move |()| feed.update(|f| f.clear_filter()));

    let visible = Memo::new(move |_| feed.with(|f| f.visible().to_vec()));
    let query = Signal::derive(move || feed.with(|f| f.search_text().to_string()));
    let active_tag = move || feed.with(|f| f.active_tag().map(str::to_string));

    view! {
        <section class="feed">
            <SearchBar query=query on_input=on_search />

            {move || active_tag().map(|tag| view! { <ActiveTag tag=tag on_clear=on_clear /> })}

            <Transition fallback=|| view! { <p class="feed-status">"Loading prompts..."</p> }>
                {move || prompts.get().map(|result| match result {
                    Ok(_) => view! {
                        <PromptCardList prompts=visible context=context on_tag_click=on_tag_click />
                    }.into_any(),
                    Err(e) => view! {
                        <p class="feed-error">"Could not load prompts: " {e.to_string()}</p>
                    }.into_any(),
                })}
            </Transition>
        </section>
    }
}
