//! Result type alias for Wordmask

use super::errors::MaskError;

/// Result type alias for Wordmask operations
///
/// # Examples
///
/// ```
/// use wordmask::domain::result::Result;
/// use wordmask::domain::errors::MaskError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MaskError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(MaskError::Validation("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
