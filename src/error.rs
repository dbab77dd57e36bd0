use thiserror::Error;

/// Returned by percentile queries when no sample is inside the window
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no samples inside the window")]
pub struct EmptyWindow;
