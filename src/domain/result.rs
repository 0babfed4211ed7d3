//! Result type alias for plainsight

use super::errors::PlainsightError;

/// Result type alias for plainsight operations
///
/// Convenience alias using [`PlainsightError`] as the error type. Use this
/// throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use plainsight::domain::result::Result;
/// use plainsight::domain::errors::PlainsightError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PlainsightError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PlainsightError>;
