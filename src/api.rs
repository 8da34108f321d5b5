use crate::error::AppError;
use crate::model::prompt::{Prompt, Session, SessionUser};

const PROMPTS_PATH: &str = "/api/prompt";
const SESSION_PATH: &str = "/api/auth/session";

/// Client for the prompt and session endpoints.
#[derive(Debug, Clone)]
pub struct PromptApi {
    client: reqwest::Client,
    base_url: String,
}

impl PromptApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Targets the origin the page was served from.
    #[cfg(feature = "hydrate")]
    pub fn for_current_origin() -> Result<Self, AppError> {
        let origin = leptos::prelude::window()
            .location()
            .origin()
            .map_err(|e| AppError::new(format!("no page origin: {e:?}")))?;
        Ok(Self::new(origin))
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn for_current_origin() -> Result<Self, AppError> {
        Err(AppError::new("page origin is only known in the browser"))
    }

    pub async fn fetch_prompts(&self) -> Result<Vec<Prompt>, AppError> {
        let resp = self
            .client
            .get(format!("{}{PROMPTS_PATH}", self.base_url))
            .send()
            .await?;
        let resp = check_status(resp, "prompt list").await?;
        Ok(resp.json().await?)
    }

    pub async fn fetch_session(&self) -> Result<Option<SessionUser>, AppError> {
        let resp = self
            .client
            .get(format!("{}{SESSION_PATH}", self.base_url))
            .send()
            .await?;
        let resp = check_status(resp, "session").await?;
        let session: Option<Session> = resp.json().await?;
        Ok(session.map(|s| s.user))
    }

    pub async fn delete_prompt(&self, id: &str) -> Result<(), AppError> {
        let resp = self
            .client
            .delete(format!(
                "{}{PROMPTS_PATH}/{}",
                self.base_url,
                urlencoding::encode(id)
            ))
            .send()
            .await?;
        check_status(resp, "prompt delete").await?;
        Ok(())
    }
}

async fn check_status(resp: reqwest::Response, what: &str) -> Result<reqwest::Response, AppError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(AppError::new(format!("{what} request failed {status}: {body}")))
}

/// Loads the full prompt collection from the current origin. Failures are
/// logged here and handed back for rendering.
pub async fn load_prompts() -> Result<Vec<Prompt>, AppError> {
    let result = match PromptApi::for_current_origin() {
        Ok(api) => api.fetch_prompts().await,
        Err(e) => Err(e),
    };
    match &result {
        Ok(prompts) => tracing::debug!("loaded {} prompts", prompts.len()),
        Err(e) => tracing::warn!("failed to load prompts: {e}"),
    }
    result
}

/// Looks up the signed-in viewer. A failed lookup counts as signed out.
pub async fn load_session() -> Option<SessionUser> {
    let result = match PromptApi::for_current_origin() {
        Ok(api) => api.fetch_session().await,
        Err(e) => Err(e),
    };
    result.unwrap_or_else(|e| {
        tracing::warn!("session lookup failed: {e}");
        None
    })
}
