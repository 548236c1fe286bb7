use thiserror::Error;

/// Errors raised when constructing domain entities from untrusted input
///
/// The display text is returned verbatim to API clients, so it names the
/// offending field the way a client would recognise it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}

impl ValidationError {
    /// Rejects an empty value for the named field
    ///
    /// # Example
    /// ```
    /// use soccer_api::domain::errors::ValidationError;
    ///
    /// assert!(ValidationError::require("name", "Ronaldo").is_ok());
    /// assert_eq!(
    ///     ValidationError::require("name", "").unwrap_err().to_string(),
    ///     "name cannot be empty"
    /// );
    /// ```
    pub fn require(field: &'static str, value: &str) -> Result<(), Self> {
        if value.is_empty() {
            return Err(Self::EmptyField(field));
        }
        Ok(())
    }
}
