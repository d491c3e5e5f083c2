//! Multipart form parsing for post create/update requests.
//!
//! Expected parts: `title` (text), `content` (text), and up to the configured
//! maximum of `photos` (binary) parts. Unknown parts are ignored.

use crate::services::RawUpload;
use axum::extract::Multipart;
use quill_core::AppError;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Parsed post form. Text fields are `None` when absent or blank.
#[derive(Debug, Default)]
pub struct PostForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub photos: Vec<RawUpload>,
}

/// Drain a multipart body into a [`PostForm`], enforcing the photo batch cap.
pub async fn parse_post_form(
    mut multipart: Multipart,
    max_photos: usize,
) -> Result<PostForm, AppError> {
    let mut form = PostForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("title") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("Invalid title field: {}", e)))?;
                form.title = non_blank(text);
            }
            Some("content") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("Invalid content field: {}", e)))?;
                form.content = non_blank(text);
            }
            Some("photos") => {
                if form.photos.len() >= max_photos {
                    return Err(AppError::InvalidInput(format!(
                        "Too many photos: the limit is {} per request",
                        max_photos
                    )));
                }
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("Invalid photo field: {}", e)))?
                    .to_vec();
                form.photos.push(RawUpload { content_type, data });
            }
            _ => {}
        }
    }

    Ok(form)
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("Hello".to_string()), Some("Hello".to_string()));
        assert_eq!(non_blank("  Hello  ".to_string()), Some("Hello".to_string()));
        assert_eq!(non_blank(String::new()), None);
        assert_eq!(non_blank("   ".to_string()), None);
    }
}
