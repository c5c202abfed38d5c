//! Filesystem storage for user avatars.

use std::path::{Path, PathBuf};

use rand::{distr::Alphanumeric, Rng};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::user::AvatarUpload,
};

/// Public URL prefix under which stored avatars are served.
pub const AVATAR_URL_PREFIX: &str = "/uploads/avatars";

/// Largest user request body accepted, avatar included.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Writes avatar images below `<upload_dir>/avatars/`.
#[derive(Debug, Clone)]
pub struct AvatarStore {
    dir: PathBuf,
}

impl AvatarStore {
    /// Creates a store rooted at `<upload_dir>/avatars`.
    pub fn new(upload_dir: impl AsRef<Path>) -> Self {
        Self {
            dir: upload_dir.as_ref().join("avatars"),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the avatar directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Stores an uploaded image and returns its public URL.
    ///
    /// The file is named after the current time in milliseconds plus a random suffix,
    /// keeping the extension of the uploaded file name.
    ///
    /// # Returns
    /// - `Ok(String)` - URL such as `/uploads/avatars/1717171717000-x8Kq2m.png`
    /// - `Err(AppError::Validation)` - The upload is not an `image/*` file
    /// - `Err(AppError::InternalErr)` - Writing the file failed
    pub async fn save(&self, upload: AvatarUpload) -> Result<String, AppError> {
        if !upload.content_type.starts_with("image/") {
            return Err(AppError::Validation(format!(
                "Avatar must be an image, got '{}'",
                upload.content_type
            )));
        }

        let file_name = format!(
            "{}-{}{}",
            chrono::Utc::now().timestamp_millis(),
            random_suffix(),
            extension(upload.file_name.as_deref())
        );
        let path = self.dir.join(&file_name);

        self.ensure_dir().await?;
        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|source| InternalError::AvatarWrite { path, source })?;

        tracing::debug!("Stored avatar {}", file_name);

        Ok(format!("{}/{}", AVATAR_URL_PREFIX, file_name))
    }
}

fn random_suffix() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect()
}

/// Extension of the uploaded file name including the dot, limited to plain
/// alphanumeric extensions so the name cannot escape the avatar directory.
fn extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use axum::body::Bytes;

    use super::*;

    fn temp_upload_dir() -> PathBuf {
        std::env::temp_dir().join(format!("workboard-avatars-{}", random_suffix()))
    }

    #[tokio::test]
    async fn stores_image_under_avatar_directory() {
        let root = temp_upload_dir();
        let store = AvatarStore::new(&root);

        let url = store
            .save(AvatarUpload {
                file_name: Some("Portrait.PNG".to_string()),
                content_type: "image/png".to_string(),
                bytes: Bytes::from_static(b"\x89PNG"),
            })
            .await
            .unwrap();

        assert!(url.starts_with("/uploads/avatars/"));
        assert!(url.ends_with(".png"));

        let stored = url.trim_start_matches("/uploads/avatars/");
        let written = tokio::fs::read(store.dir().join(stored)).await.unwrap();
        assert_eq!(written, b"\x89PNG");

        tokio::fs::remove_dir_all(root).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_non_image_uploads() {
        let store = AvatarStore::new(temp_upload_dir());

        let result = store
            .save(AvatarUpload {
                file_name: Some("notes.txt".to_string()),
                content_type: "text/plain".to_string(),
                bytes: Bytes::from_static(b"hello"),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn drops_suspicious_extensions() {
        assert_eq!(extension(Some("a.png")), ".png");
        assert_eq!(extension(Some("noext")), "");
        assert_eq!(extension(Some("x.p/ng")), "");
        assert_eq!(extension(None), "");
    }
}
