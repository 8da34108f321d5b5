use crate::error::AppError;

/// Writes `text` to the system clipboard.
#[cfg(feature = "hydrate")]
pub async fn write_text(text: &str) -> Result<(), AppError> {
    use wasm_bindgen_futures::JsFuture;

    let clipboard = leptos::prelude::window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| AppError::new(format!("clipboard write failed: {e:?}")))
}

#[cfg(not(feature = "hydrate"))]
pub async fn write_text(_text: &str) -> Result<(), AppError> {
    Err(AppError::new("clipboard is only available in the browser"))
}
