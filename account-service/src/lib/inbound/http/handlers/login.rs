use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::lenient_string;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::AuthenticatedAccount;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn login<S: AccountServicePort>(
    State(state): State<AppState<S>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .account_service
        .login(body.into())
        .await
        .map_err(ApiError::from)
        .map(|authenticated| ApiSuccess::new(StatusCode::OK, authenticated.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    password: String,
}

impl From<LoginRequest> for LoginCommand {
    fn from(request: LoginRequest) -> Self {
        LoginCommand::new(request.phone, request.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub id: String,
    pub username: String,
    pub phone: String,
    pub token: String,
}

impl From<AuthenticatedAccount> for LoginResponseData {
    fn from(authenticated: AuthenticatedAccount) -> Self {
        let AuthenticatedAccount { account, token } = authenticated;
        Self {
            id: account.id.to_string(),
            username: account.username.as_str().to_string(),
            phone: account.phone.as_str().to_string(),
            token,
        }
    }
}
