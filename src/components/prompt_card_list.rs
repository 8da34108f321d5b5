use leptos::prelude::*;

use crate::card::CardContext;
use crate::components::prompt_card::PromptCard;
use crate::model::prompt::Prompt;

/// Cards are keyed by prompt id so a card that survives a re-filter keeps its
/// local state.
fn card_key(prompt: &Prompt) -> String {
    prompt.id.clone()
}

/// Renders prompts in the order given, binding the owner callbacks to each one.
#[component]
pub fn PromptCardList(
    #[prop(into)] prompts: Signal<Vec<Prompt>>,
    context: Signal<CardContext>,
    #[prop(optional)] on_tag_click: Option<Callback<String>>,
    #[prop(optional)] on_edit: Option<Callback<Prompt>>,
    #[prop(optional)] on_delete: Option<Callback<Prompt>>,
) -> impl IntoView {
    let bind = move |cb: Option<Callback<Prompt>>, prompt: &Prompt| {
        cb.map(|cb| {
            let prompt = prompt.clone();
            Callback::new(move |()| cb.run(prompt.clone()))
        })
    };

    view! {
        <div class="prompt-layout">
            <For
                each=move || prompts.get()
                key=card_key
                children=move |prompt: Prompt| {
                    let on_edit = bind(on_edit, &prompt);
                    let on_delete = bind(on_delete, &prompt);
                    view! {
                        <PromptCard
                            prompt=prompt
                            context=context
                            on_edit=on_edit
                            on_delete=on_delete
                            on_tag_click=on_tag_click
                        />
                    }
                }
            />
        </div>
    }
}
