use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::card::{CardContext, CopyIndicator, COPY_FEEDBACK};
use crate::clipboard;
use crate::components::tag_chip::TagChip;
use crate::model::prompt::Prompt;

/// One prompt: creator, text, copy button, tag chips and owner actions.
///
/// `on_edit` and `on_delete` are expected to be bound to this prompt already.
#[component]
pub fn PromptCard(
    prompt: Prompt,
    context: Signal<CardContext>,
    #[prop(optional_no_strip)] on_edit: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_tag_click: Option<Callback<String>>,
) -> impl IntoView {
    let navigate = use_navigate();
    let copy = RwSignal::new(CopyIndicator::new());

    let creator = prompt.creator.clone();
    let on_profile_click = move |_| {
        let route = context.with(|ctx| ctx.profile_route(&creator));
        navigate(&route, Default::default());
    };

    let text = prompt.prompt_text.clone();
    let on_copy = move |_| {
        let Some(generation) = copy.try_update(|c| c.mark_copied(text.clone())) else {
            return;
        };
        set_timeout(
            move || {
                let _ = copy.try_update(|c| c.expire(generation));
            },
            COPY_FEEDBACK,
        );
        let text = text.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = clipboard::write_text(&text).await {
                tracing::warn!("copy to clipboard failed: {e}");
                let _ = copy.try_update(|c| c.mark_failed(generation, "Copy failed"));
            }
        });
    };

    let copied_text = prompt.prompt_text.clone();
    let is_copied = Signal::derive(move || copy.with(|c| c.is_copied(&copied_text)));
    let copy_failure = move || copy.with(|c| c.failure().map(str::to_string));

    let owner = prompt.creator.clone();
    let shows_owner_actions = move || context.with(|ctx| ctx.shows_owner_actions(&owner));

    let tags: Vec<String> = prompt.tags().map(str::to_string).collect();

    view! {
        <div class="prompt-card">
            <div class="prompt-card-header">
                <div class="creator" on:click=on_profile_click>
                    <img
                        src=prompt.creator.image_url.clone()
                        alt="user_image"
                        width="40"
                        height="40"
                        class="avatar"
                    />
                    <div class="creator-identity">
                        <h3>{prompt.creator.username.clone()}</h3>
                        <p>{prompt.creator.email.clone()}</p>
                    </div>
                </div>
                <div class="copy-btn" on:click=on_copy>
                    <img
                        src=move || {
                            if is_copied.get() {
                                "/assets/icons/tick.svg"
                            } else {
                                "/assets/icons/copy.svg"
                            }
                        }
                        alt=move || if is_copied.get() { "tick_icon" } else { "copy_icon" }
                        width="12"
                        height="12"
                    />
                </div>
            </div>

            {move || copy_failure().map(|msg| view! { <p class="copy-error">{msg}</p> })}

            <p class="prompt-text">{prompt.prompt_text.clone()}</p>

            <div class="prompt-tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <TagChip tag=tag on_click=on_tag_click /> })
                    .collect_view()}
            </div>

            {move || shows_owner_actions().then(|| view! {
                <div class="owner-actions">
                    <p
                        class="owner-action edit"
                        on:click=move |_| {
                            if let Some(cb) = on_edit {
                                cb.run(());
                            }
                        }
                    >
                        "Edit"
                    </p>
                    <p
                        class="owner-action delete"
                        on:click=move |_| {
                            if let Some(cb) = on_delete {
                                cb.run(());
                            }
                        }
                    >
                        "Delete"
                    </p>
                </div>
            })}
        </div>
    }
}
