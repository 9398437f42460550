//! Authentication and account calls
//!
//! These hand back the server's raw answer: status and body are the caller's
//! to interpret, error statuses included.

use serde::Serialize;
use serde_json::json;

use super::SpotifyClient;
use crate::api::{endpoints, RawResponse, Request};
use crate::error::ApiError;

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SpotifyClient {
    /// Log in. A successful body carries the token, see
    /// [`Session::from_login`](crate::auth::Session::from_login).
    pub async fn login(&self, credentials: &LoginRequest) -> Result<RawResponse, ApiError> {
        tracing::info!(email = %credentials.email, "Logging in");
        let request = Request::new(&endpoints::LOGIN).json(credentials)?;
        self.dispatcher.execute_raw(request).await
    }

    pub async fn signup<B: Serialize + ?Sized>(&self, account: &B) -> Result<RawResponse, ApiError> {
        let request = Request::new(&endpoints::SIGNUP).json(account)?;
        self.dispatcher.execute_raw(request).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<RawResponse, ApiError> {
        let request = Request::new(&endpoints::FORGOT_PASSWORD).body(json!({ "email": email }));
        self.dispatcher.execute_raw(request).await
    }

    /// `passwords` is the new password and its confirmation.
    pub async fn reset_password<B: Serialize + ?Sized>(
        &self,
        reset_token: &str,
        passwords: &B,
    ) -> Result<RawResponse, ApiError> {
        let request = Request::new(&endpoints::RESET_PASSWORD)
            .param("token", reset_token)
            .json(passwords)?;
        self.dispatcher.execute_raw(request).await
    }

    /// `passwords` is the current password, the new one and its confirmation.
    pub async fn update_password<B: Serialize + ?Sized>(&self, passwords: &B) -> Result<RawResponse, ApiError> {
        let request = Request::new(&endpoints::UPDATE_PASSWORD).json(passwords)?;
        self.dispatcher.execute_raw(request).await
    }

    pub async fn confirm_email(&self, confirm_token: &str) -> Result<RawResponse, ApiError> {
        self.dispatcher
            .execute_raw(Request::new(&endpoints::CONFIRM_EMAIL).param("token", confirm_token))
            .await
    }

    pub async fn logout(&self) -> Result<RawResponse, ApiError> {
        tracing::info!("Logging out");
        self.dispatcher.execute_raw(Request::new(&endpoints::LOGOUT)).await
    }

    pub async fn fetch_token(&self) -> Result<RawResponse, ApiError> {
        self.dispatcher.execute_raw(Request::new(&endpoints::FETCH_TOKEN)).await
    }

    pub async fn current_profile(&self) -> Result<RawResponse, ApiError> {
        self.dispatcher.execute_raw(Request::new(&endpoints::CURRENT_PROFILE)).await
    }

    pub async fn edit_profile<B: Serialize + ?Sized>(&self, profile: &B) -> Result<RawResponse, ApiError> {
        let request = Request::new(&endpoints::EDIT_PROFILE).json(profile)?;
        self.dispatcher.execute_raw(request).await
    }
}
