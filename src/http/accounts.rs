//! Account and session handlers.

use super::{
    auth::CurrentAccount,
    dto::{
        ChangePasswordBody, ClearedPhotoResponse, CredentialsBody, PasswordBody, PhotoBody,
        PhotoResponse, RenameBody, SessionResponse, SuccessResponse,
    },
    error::ApiError,
    state::AppState,
};
use crate::account::{
    domain::Account,
    services::{ChangePasswordRequest, LoginRequest, RegisterAccountRequest},
};
use axum::{Extension, Json, extract::State, http::StatusCode};

type ApiResult<T> = Result<T, ApiError>;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    let account = state
        .accounts
        .register(RegisterAccountRequest::new(body.username, body.password))
        .await?;
    let token = state.accounts.open_session(&account, body.remember_me)?;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token: token.into_inner(),
            account,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> ApiResult<Json<SessionResponse>> {
    let request =
        LoginRequest::new(body.username, body.password).with_remember(body.remember_me);
    let session = state.accounts.login(request).await?;
    Ok(Json(SessionResponse {
        token: session.token.into_inner(),
        account: session.account,
    }))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(CurrentAccount(id)): Extension<CurrentAccount>,
) -> ApiResult<Json<SuccessResponse>> {
    state.accounts.logout(id).await?;
    Ok(Json(SuccessResponse::OK))
}

pub async fn profile(
    State(state): State<AppState>,
    Extension(CurrentAccount(id)): Extension<CurrentAccount>,
) -> ApiResult<Json<Account>> {
    Ok(Json(state.accounts.profile(id).await?))
}

pub async fn rename(
    State(state): State<AppState>,
    Extension(CurrentAccount(id)): Extension<CurrentAccount>,
    Json(body): Json<RenameBody>,
) -> ApiResult<Json<Account>> {
    Ok(Json(state.accounts.rename(id, body.username).await?))
}

pub async fn change_password(
    State(state): State<AppState>,
    Extension(CurrentAccount(id)): Extension<CurrentAccount>,
    Json(body): Json<ChangePasswordBody>,
) -> ApiResult<Json<SuccessResponse>> {
    let request =
        ChangePasswordRequest::new(body.old_password, body.new_password, body.confirm_password);
    state.accounts.change_password(id, request).await?;
    Ok(Json(SuccessResponse::OK))
}

pub async fn set_photo(
    State(state): State<AppState>,
    Extension(CurrentAccount(id)): Extension<CurrentAccount>,
    Json(body): Json<PhotoBody>,
) -> ApiResult<Json<PhotoResponse>> {
    let change = state.accounts.set_profile_photo(id, &body.file_name).await?;
    Ok(Json(PhotoResponse {
        profile_photo: change.current,
        previous: change.previous,
    }))
}

pub async fn clear_photo(
    State(state): State<AppState>,
    Extension(CurrentAccount(id)): Extension<CurrentAccount>,
) -> ApiResult<Json<ClearedPhotoResponse>> {
    let previous = state.accounts.clear_profile_photo(id).await?;
    Ok(Json(ClearedPhotoResponse { previous }))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(CurrentAccount(id)): Extension<CurrentAccount>,
    Json(body): Json<PasswordBody>,
) -> ApiResult<Json<SuccessResponse>> {
    state.accounts.delete_account(id, body.password).await?;
    Ok(Json(SuccessResponse::OK))
}
