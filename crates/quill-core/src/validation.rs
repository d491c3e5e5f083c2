//! Input validation for post fields.

use crate::error::AppError;

/// Validate required fields for creating a post.
pub fn validate_new_post(title: &str, content: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title is required".to_string()));
    }
    if content.trim().is_empty() {
        return Err(AppError::InvalidInput("Content is required".to_string()));
    }
    Ok(())
}

/// Enforce the per-batch attachment cap.
pub fn validate_photo_batch(count: usize, max: usize) -> Result<(), AppError> {
    if count > max {
        return Err(AppError::InvalidInput(format!(
            "Too many photos: {} exceeds the limit of {}",
            count, max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_new_post_rejects_empty_title() {
        let err = validate_new_post("", "content").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        let err = validate_new_post("   ", "content").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_validate_new_post_rejects_empty_content() {
        assert!(validate_new_post("title", "").is_err());
        assert!(validate_new_post("title", "content").is_ok());
    }

    #[test]
    fn test_validate_photo_batch_cap() {
        assert!(validate_photo_batch(0, 5).is_ok());
        assert!(validate_photo_batch(5, 5).is_ok());
        assert!(validate_photo_batch(6, 5).is_err());
    }
}
