/// Result alias used throughout the crate.
/// Typed failures are `SbomError` values carried inside `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
