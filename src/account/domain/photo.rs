//! Profile photo references.
//!
//! Only the reference is managed here. Cropping, resizing and writing the
//! image file belong to the presentation layer.

use super::{AccountDomainError, AccountId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Public path prefix under which uploaded photos are served.
pub const UPLOAD_PREFIX: &str = "/static/uploads/";

/// Accepted upload extensions, compared case-insensitively.
pub const ALLOWED_PHOTO_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Reference to a stored profile photo, e.g.
/// `/static/uploads/<account>_20261019_142501.jpg`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfilePhoto(String);

impl ProfilePhoto {
    /// Allocates the reference for a new upload.
    ///
    /// Processed photos are always re-encoded as JPEG, so the stored name
    /// ends in `.jpg` whatever the uploaded type.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::UnsupportedPhotoType`] when
    /// `original_file_name` lacks an accepted extension.
    pub fn allocate(
        account: AccountId,
        original_file_name: &str,
        uploaded_at: DateTime<Utc>,
    ) -> Result<Self, AccountDomainError> {
        let accepted = original_file_name
            .rsplit_once('.')
            .is_some_and(|(_, extension)| {
                ALLOWED_PHOTO_EXTENSIONS
                    .iter()
                    .any(|allowed| extension.eq_ignore_ascii_case(allowed))
            });
        if !accepted {
            return Err(AccountDomainError::UnsupportedPhotoType(
                original_file_name.to_owned(),
            ));
        }
        Ok(Self(format!(
            "{UPLOAD_PREFIX}{account}_{}.jpg",
            uploaded_at.format("%Y%m%d_%H%M%S")
        )))
    }

    /// Wraps a reference read back from storage.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns `true` for photos stored by this application (as opposed to
    /// external URLs), i.e. files the caller may delete.
    #[must_use]
    pub fn is_managed_upload(&self) -> bool {
        self.0.starts_with(UPLOAD_PREFIX)
    }

    /// Returns the file name without the public prefix.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfilePhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
