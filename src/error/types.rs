use thiserror::Error;

/// Unified result type for the layout crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the layout engine.
///
/// Geometry itself never fails; these cover construction discipline and the
/// collaborators the engine hands work to.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("end_container called with no open container")]
    UnbalancedEnd,
    #[error("{0} container(s) still open at finish")]
    UnclosedContainers(usize),
    #[error("renderer error: {0}")]
    Render(String),
    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
