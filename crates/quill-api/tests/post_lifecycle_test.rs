//! Post service behavior against in-memory store and storage doubles.

mod helpers;

use helpers::{MockObjectStorage, MockPostStore};
use quill_api::services::{PostService, RawUpload, UpdatePost};
use quill_core::models::Attachment;
use quill_core::AppError;
use quill_db::PostStore;
use quill_storage::ObjectStorage;
use std::sync::Arc;
use uuid::Uuid;

const MAX_PHOTOS: usize = 5;

fn service_with_mocks() -> (PostService, Arc<MockPostStore>, Arc<MockObjectStorage>) {
    let store = Arc::new(MockPostStore::new());
    let storage = Arc::new(MockObjectStorage::new());
    let service = PostService::new(
        store.clone() as Arc<dyn PostStore>,
        storage.clone() as Arc<dyn ObjectStorage>,
        MAX_PHOTOS,
    );
    (service, store, storage)
}

fn file(n: usize) -> RawUpload {
    RawUpload {
        content_type: "image/jpeg".to_string(),
        data: vec![n as u8; 16],
    }
}

fn attachment(public_id: &str) -> Attachment {
    Attachment {
        public_id: public_id.to_string(),
        url: format!("https://storage.test/{}", public_id),
    }
}

#[tokio::test]
async fn create_uploads_photos_in_order() {
    let (service, _store, storage) = service_with_mocks();

    let post = service
        .create(
            "First".to_string(),
            "Body".to_string(),
            vec![file(0), file(1), file(2)],
        )
        .await
        .unwrap();

    let ids: Vec<_> = post.photos.iter().map(|p| p.public_id.clone()).collect();
    assert_eq!(ids, vec!["blogs/mock-0", "blogs/mock-1", "blogs/mock-2"]);
    assert_eq!(storage.uploaded_ids(), ids);
    assert_eq!(post.photos[0].url, "https://storage.test/blogs/mock-0");
}

#[tokio::test]
async fn create_without_photos_has_equal_timestamps() {
    let (service, store, _storage) = service_with_mocks();

    let post = service
        .create("Plain".to_string(), "Text only".to_string(), vec![])
        .await
        .unwrap();

    assert!(post.photos.is_empty());
    assert_eq!(post.created_at, post.updated_at);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn create_rejects_blank_title_before_any_upload() {
    let (service, store, storage) = service_with_mocks();

    let err = service
        .create("   ".to_string(), "Body".to_string(), vec![file(0)])
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(storage.uploaded_ids().is_empty());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn create_rejects_oversized_photo_batch() {
    let (service, _store, storage) = service_with_mocks();

    let files: Vec<_> = (0..MAX_PHOTOS + 1).map(file).collect();
    let err = service
        .create("Too many".to_string(), "Body".to_string(), files)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(storage.uploaded_ids().is_empty());
}

#[tokio::test]
async fn upload_failure_aborts_create() {
    let (service, store, storage) = service_with_mocks();
    storage.fail_uploads();

    let err = service
        .create("Doomed".to_string(), "Body".to_string(), vec![file(0)])
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Storage(_)));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn text_only_update_keeps_photos_and_bumps_updated_at() {
    let (service, store, storage) = service_with_mocks();
    let now = chrono::Utc::now();
    let id = store.seed_with_photos("Old title", now, now, vec![attachment("blogs/keep")]);

    let post = service
        .update(
            id,
            UpdatePost {
                title: Some("New title".to_string()),
                content: None,
                files: vec![],
            },
        )
        .await
        .unwrap();

    assert_eq!(post.title, "New title");
    assert_eq!(post.content, "content");
    assert_eq!(post.photos, vec![attachment("blogs/keep")]);
    assert!(post.updated_at > post.created_at);
    assert!(storage.deleted_ids().is_empty());
    assert!(storage.uploaded_ids().is_empty());
}

#[tokio::test]
async fn update_with_files_replaces_attachment_set() {
    let (service, store, storage) = service_with_mocks();
    let now = chrono::Utc::now();
    let id = store.seed_with_photos(
        "Illustrated",
        now,
        now,
        vec![attachment("blogs/old-1"), attachment("blogs/old-2")],
    );

    let post = service
        .update(
            id,
            UpdatePost {
                title: None,
                content: None,
                files: vec![file(0)],
            },
        )
        .await
        .unwrap();

    assert_eq!(storage.deleted_ids(), vec!["blogs/old-1", "blogs/old-2"]);
    assert_eq!(post.photos.len(), 1);
    assert_eq!(post.photos[0].public_id, "blogs/mock-0");
}

#[tokio::test]
async fn update_missing_id_is_not_found() {
    let (service, _store, storage) = service_with_mocks();

    let err = service
        .update(
            Uuid::new_v4(),
            UpdatePost {
                title: Some("x".to_string()),
                content: None,
                files: vec![file(0)],
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert!(storage.uploaded_ids().is_empty());
    assert!(storage.deleted_ids().is_empty());
}

#[tokio::test]
async fn delete_removes_post_and_attachments() {
    let (service, store, storage) = service_with_mocks();
    let now = chrono::Utc::now();
    let id = store.seed_with_photos("Gone", now, now, vec![attachment("blogs/bye")]);

    service.delete(id).await.unwrap();

    assert_eq!(storage.deleted_ids(), vec!["blogs/bye"]);
    assert_eq!(store.count().await.unwrap(), 0);
    assert!(matches!(
        service.get_by_id(id).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}

#[tokio::test]
async fn delete_skips_attachments_without_public_id() {
    let (service, store, storage) = service_with_mocks();
    let now = chrono::Utc::now();
    let id = store.seed_with_photos(
        "Partial",
        now,
        now,
        vec![attachment(""), attachment("blogs/real")],
    );

    service.delete(id).await.unwrap();

    assert_eq!(storage.deleted_ids(), vec!["blogs/real"]);
}

#[tokio::test]
async fn delete_missing_id_makes_no_storage_calls() {
    let (service, _store, storage) = service_with_mocks();

    let err = service.delete(Uuid::new_v4()).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert!(storage.deleted_ids().is_empty());
}

#[tokio::test]
async fn get_all_returns_newest_first() {
    let (service, store, _storage) = service_with_mocks();
    let now = chrono::Utc::now();
    store.seed("older", now - chrono::Duration::days(2), now);
    store.seed("newest", now, now);
    store.seed("middle", now - chrono::Duration::days(1), now);

    let posts = service.get_all().await.unwrap();

    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["newest", "middle", "older"]);
}
