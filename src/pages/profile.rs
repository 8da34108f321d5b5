use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};

use crate::api::{self, PromptApi};
use crate::components::prompt_card_list::PromptCardList;
use crate::error::AppError;
use crate::model::prompt::Prompt;
use crate::session::{use_card_context, use_viewer};

fn created_by(prompts: &[Prompt], user_id: &str) -> Vec<Prompt> {
    prompts
        .iter()
        .filter(|p| p.is_created_by(user_id))
        .cloned()
        .collect()
}

fn loading() -> impl IntoView {
    view! { <p class="feed-status">"Loading prompts..."</p> }
}

/// Shows `list` once the collection has loaded, or the load error.
fn render_loaded(result: Result<Vec<Prompt>, AppError>, list: impl IntoView + 'static) -> AnyView {
    match result {
        Ok(_) => list.into_any(),
        Err(e) => view! { <p class="feed-error">"Could not load prompts: " {e.to_string()}</p> }.into_any(),
    }
}

/// The viewer's own prompts, with edit and delete wired.
#[component]
pub fn OwnProfilePage() -> impl IntoView {
    let viewer = use_viewer();
    let context = use_card_context();
    let navigate = StoredValue::new_local(use_navigate());
    let prompts = LocalResource::new(api::load_prompts);
    let removed = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(Option::<String>::None);

    let mine = Signal::derive(move || {
        let Some(id) = viewer.with(|v| v.as_ref().map(|u| u.id.clone())) else {
            return vec![];
        };
        let Some(Ok(all)) = prompts.get() else {
            return vec![];
        };
        let mut mine = created_by(&all, &id);
        removed.with(|gone| mine.retain(|p| !gone.contains(&p.id)));
        mine
    });

    let on_edit = Callback::new(move |prompt: Prompt| {
        let target = format!("/update-prompt?id={}", urlencoding::encode(&prompt.id));
        navigate.with_value(|nav| nav(&target, Default::default()));
    });

    let on_delete = Callback::new(move |prompt: Prompt| {
        leptos::task::spawn_local(async move {
            let result = match PromptApi::for_current_origin() {
                Ok(api) => api.delete_prompt(&prompt.id).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    tracing::info!("deleted prompt {}", prompt.id);
                    let _ = removed.try_update(|gone| gone.push(prompt.id));
                }
                Err(e) => {
                    tracing::warn!("failed to delete prompt {}: {e}", prompt.id);
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <Title text="My profile - Promptfeed" />
        <section class="profile">
            <h1>"My Profile"</h1>
            {move || error.get().map(|e| view! { <p class="feed-error">{e}</p> })}
            {move || {
                if viewer.with(Option::is_some) {
                    view! {
                        <p class="profile-desc">"Your personalized profile page. Edit or remove the prompts you have shared."</p>
                        <Transition fallback=loading>
                            {move || prompts.get().map(|result| render_loaded(result, view! {
                                <PromptCardList
                                    prompts=mine
                                    context=context
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }))}
                        </Transition>
                    }
                    .into_any()
                } else {
                    view! { <p class="profile-desc">"Sign in to see your prompts."</p> }.into_any()
                }
            }}
        </section>
    }
}

/// Another creator's prompts, reached from a card's creator link.
#[component]
pub fn UserProfilePage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let context = use_card_context();
    let prompts = LocalResource::new(api::load_prompts);

    let user_id = move || params.read().get("id").unwrap_or_default();
    let name = move || query.read().get("name").unwrap_or_else(|| "User".to_string());
    let theirs = Signal::derive(move || match prompts.get() {
        Some(Ok(all)) => created_by(&all, &user_id()),
        _ => vec![],
    });

    view! {
        <Title text=move || format!("{}'s profile - Promptfeed", name()) />
        <section class="profile">
            <h1>{move || format!("{}'s Profile", name())}</h1>
            <p class="profile-desc">
                {move || format!("Welcome to {}'s profile page. Explore the prompts they have shared.", name())}
            </p>
            <Transition fallback=loading>
                {move || prompts.get().map(|result| render_loaded(result, view! {
                    <PromptCardList prompts=theirs context=context />
                }))}
            </Transition>
        </section>
    }
}
