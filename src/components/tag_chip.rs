use leptos::prelude::*;

#[component]
pub fn TagChip(
    tag: String,
    #[prop(optional_no_strip)] on_click: Option<Callback<String>>,
) -> impl IntoView {
    let clickable = on_click.is_some();
    let tag_clone = tag.clone();
    let on_click_handler = move |_| {
        if let Some(cb) = &on_click {
            cb.run(tag_clone.clone());
        }
    };

    view! {
        <span class="tag-chip" class:clickable=clickable on:click=on_click_handler>
            {tag}
        </span>
    }
}
