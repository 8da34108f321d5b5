use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::AppError;
use crate::model::prompt::Prompt;

/// In-memory prompt collection backing `/api/prompt`.
#[derive(Debug, Clone, Default)]
pub struct PromptStore {
    prompts: Arc<RwLock<Vec<Prompt>>>,
}

impl PromptStore {
    pub fn new(prompts: Vec<Prompt>) -> Self {
        Self {
            prompts: Arc::new(RwLock::new(prompts)),
        }
    }

    /// Reads a JSON array of prompts in their wire shape.
    pub async fn load(path: &Path) -> Result<Self, AppError> {
        let raw = tokio::fs::read_to_string(path).await?;
        let prompts: Vec<Prompt> = serde_json::from_str(&raw)
            .map_err(|e| AppError::new(format!("{}: {e}", path.display())))?;
        tracing::info!("loaded {} prompts from {}", prompts.len(), path.display());
        Ok(Self::new(prompts))
    }

    pub async fn list(&self) -> Vec<Prompt> {
        self.prompts.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Prompt> {
        self.prompts.read().await.iter().find(|p| p.id == id).cloned()
    }

    /// Removes the prompt, returning whether it existed.
    pub async fn remove(&self, id: &str) -> bool {
        let mut prompts = self.prompts.write().await;
        let before = prompts.len();
        prompts.retain(|p| p.id != id);
        prompts.len() != before
    }
}
