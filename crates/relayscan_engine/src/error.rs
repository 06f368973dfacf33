#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to render status block: {0}")]
    Render(#[from] std::io::Error),
    #[error("publisher task failed: {0}")]
    Publisher(String),
}
