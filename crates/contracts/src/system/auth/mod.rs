use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Where the one-time verification code was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyChannel {
    Email,
    Phone,
}

impl VerifyChannel {
    pub fn display_name(&self) -> &'static str {
        match self {
            VerifyChannel::Email => "email",
            VerifyChannel::Phone => "phone",
        }
    }
}

/// Answer to a registration: where the confirmation code went.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub channel: VerifyChannel,
    /// The address or number the code was sent to.
    pub target: String,
}

/// Confirms a registration with the code delivered over `channel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeRequest {
    pub channel: VerifyChannel,
    /// The address or number the code was sent to.
    pub target: String,
    pub code: String,
}

/// Issued by login, registration and verification alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub is_admin: bool,
}

/// Claims carried in the bearer token payload.
///
/// The client decodes these only to know when the session will lapse;
/// signature verification stays on the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub sub: String, // user id
    pub email: String,
    pub is_admin: bool,
    pub exp: i64, // expiration timestamp, seconds
    pub iat: i64, // issued at, seconds
}

impl TokenClaims {
    /// True once the token's expiry has passed `now` (unix seconds).
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_inclusive_at_the_boundary() {
        let claims = TokenClaims {
            sub: "u-1".to_string(),
            email: "ad@example.com".to_string(),
            is_admin: false,
            exp: 1_700_000_000,
            iat: 1_699_990_000,
        };
        assert!(!claims.is_expired_at(1_699_999_999));
        assert!(claims.is_expired_at(1_700_000_000));
        assert!(claims.is_expired_at(1_700_000_001));
    }
}
