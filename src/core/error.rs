//! Error type shared by the configuration loader and the browser bindings.

/// Errors raised while wiring page behaviors.
///
/// Only [`PageError::MissingGlobal`] stops installation as a whole; the other
/// variants are logged and cost a single behavior.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The inline configuration block is not valid JSON for [`crate::core::PageConfig`]
    #[error("Invalid page configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// `window` or `document` is unavailable (e.g. running in a worker)
    #[error("Browser global `{0}` is not available")]
    MissingGlobal(&'static str),

    /// A DOM call threw
    #[error("DOM call failed: {0}")]
    Js(String),
}
