use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Reference to an object held in external storage.
///
/// Owned exclusively by its post; has no identity of its own outside the
/// external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Identifier of the object in external storage
    pub public_id: String,
    /// Resolved retrieval URL
    pub url: String,
}

/// A blog post with zero or more image attachments.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Ordered attachment set; order matches upload order
    pub photos: Vec<Attachment>,
    /// Immutable after creation
    pub created_at: DateTime<Utc>,
    /// Always >= created_at; equal to it until the first update
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a new post. Timestamps are store-managed.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub photos: Vec<Attachment>,
}

/// Partial update of a post. `None` fields are left unchanged;
/// `photos: Some(_)` replaces the attachment set wholesale.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub photos: Option<Vec<Attachment>>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.photos.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_serializes_camel_case() {
        let attachment = Attachment {
            public_id: "blogs/abc".to_string(),
            url: "https://cdn.example.com/blogs/abc".to_string(),
        };
        let json = serde_json::to_value(&attachment).unwrap();
        assert_eq!(json["publicId"], "blogs/abc");
        assert!(json.get("public_id").is_none());
    }

    #[test]
    fn test_post_timestamps_serialize_camel_case() {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: "T".to_string(),
            content: "C".to_string(),
            photos: vec![],
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn test_post_patch_is_empty() {
        assert!(PostPatch::default().is_empty());
        let patch = PostPatch {
            title: Some("New".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
