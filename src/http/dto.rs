//! Request and response bodies.

use crate::account::domain::{Account, ProfilePhoto};
use crate::task::services::TaskFieldsRequest;
use serde::{Deserialize, Serialize};

fn all() -> String {
    "all".to_owned()
}

/// Body for registration and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsBody {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// A session token together with its account.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub account: Account,
}

#[derive(Debug, Deserialize)]
pub struct RenameBody {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordBody {
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordBody {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct PhotoBody {
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub profile_photo: ProfilePhoto,
    pub previous: Option<ProfilePhoto>,
}

#[derive(Debug, Serialize)]
pub struct ClearedPhotoResponse {
    pub previous: Option<ProfilePhoto>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}

/// Query string of a filtered listing. Missing keys mean `all`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "all")]
    pub filter: String,
    #[serde(default = "all")]
    pub category_filter: String,
    #[serde(default = "all")]
    pub priority_filter: String,
}

/// Editable task fields, for creation and full edits.
#[derive(Debug, Deserialize)]
pub struct TaskBody {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

impl From<TaskBody> for TaskFieldsRequest {
    fn from(body: TaskBody) -> Self {
        let TaskBody {
            title,
            description,
            due_date,
            priority,
            category,
        } = body;
        let mut request = Self::new(title);
        if let Some(text) = description {
            request = request.with_description(text);
        }
        if let Some(date) = due_date {
            request = request.with_due_date(date);
        }
        if let Some(keyword) = priority {
            request = request.with_priority(keyword);
        }
        if let Some(keyword) = category {
            request = request.with_category(keyword);
        }
        request
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct PurgedResponse {
    pub purged: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
