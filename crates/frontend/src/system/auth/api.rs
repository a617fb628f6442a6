use contracts::system::auth::{
    AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, UserInfo, VerifyCodeRequest,
};

use crate::shared::api_utils::{get_json, post_json, ApiError};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<AuthResponse, ApiError> {
    let request = LoginRequest { email, password };
    post_json("/api/auth/login", &request, None).await
}

/// Register a new account. The backend answers with the channel the
/// verification code was delivered over.
pub async fn register(request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
    post_json("/api/auth/register", &request, None).await
}

/// Confirm a registration code. A correct code logs the user in.
pub async fn verify_code(request: VerifyCodeRequest) -> Result<AuthResponse, ApiError> {
    post_json("/api/auth/verify", &request, None).await
}

/// Get current user info, validating the stored token on the way.
pub async fn get_current_user(token: &str) -> Result<UserInfo, ApiError> {
    get_json("/api/auth/me", Some(token)).await
}
