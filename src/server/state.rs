use leptos::config::LeptosOptions;

use crate::error::AppError;
use crate::model::prompt::SessionUser;
use crate::server::config::Cli;
use crate::server::store::PromptStore;

#[derive(Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub prompts: PromptStore,
    /// Fixed development session; `None` means every request is signed out.
    pub session: Option<SessionUser>,
}

impl AppState {
    pub async fn new(leptos_options: LeptosOptions, cli: &Cli) -> Result<Self, AppError> {
        let prompts = match &cli.prompts {
            Some(path) => PromptStore::load(path).await?,
            None => {
                tracing::warn!("no prompts file configured, serving an empty feed");
                PromptStore::default()
            }
        };

        let session = cli.dev_session();
        if let Some(user) = &session {
            tracing::info!("signing every request in as development user {}", user.id);
        }

        Ok(Self {
            leptos_options,
            prompts,
            session,
        })
    }
}

impl axum::extract::FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
