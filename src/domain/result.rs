//! Result type alias for MindRep

use super::errors::MindRepError;

/// Result type alias for MindRep operations
///
/// # Examples
///
/// ```
/// use mindrep::domain::result::Result;
/// use mindrep::domain::errors::MindRepError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MindRepError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MindRepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(MindRepError::Configuration("test error".to_string()));
        assert!(result.is_err());
    }
}
