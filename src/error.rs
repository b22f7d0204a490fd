use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("browser API call failed: {0}")]
    Js(String),
}
