//! Client-side inspection of the bearer token.
//!
//! The token is opaque to the client except for the payload segment, which
//! is decoded to read the `exp` claim. No signature verification happens
//! here; the backend is the authority and answers 401 for anything invalid.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use contracts::system::auth::TokenClaims;

/// Decode the claims from a JWT without verifying the signature.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// True when the token is missing, unreadable or past its `exp` claim.
/// An unreadable token counts as expired so a corrupted stored value can
/// never keep a dead session alive.
pub fn is_expired(token: &str, now_unix: i64) -> bool {
    match decode_claims(token) {
        Some(claims) => claims.is_expired_at(now_unix),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("header.{}.signature", body)
    }

    #[test]
    fn decodes_claims_from_the_payload_segment() {
        let token = token_with_payload(
            r#"{"sub":"u-1","email":"ads@example.com","isAdmin":false,"exp":1700000600,"iat":1700000000}"#,
        );
        let claims = decode_claims(&token).expect("claims should decode");
        assert_eq!(claims.email, "ads@example.com");
        assert_eq!(claims.exp, 1_700_000_600);
        assert!(!claims.is_admin);
    }

    #[test]
    fn expiry_is_checked_against_the_exp_claim() {
        let token = token_with_payload(
            r#"{"sub":"u-1","email":"ads@example.com","isAdmin":false,"exp":1700000600,"iat":1700000000}"#,
        );
        assert!(!is_expired(&token, 1_700_000_599));
        assert!(is_expired(&token, 1_700_000_600));
        assert!(is_expired(&token, 1_700_000_601));
    }

    #[test]
    fn garbage_tokens_read_as_expired() {
        assert!(is_expired("", 0));
        assert!(is_expired("only-one-segment", 0));
        assert!(is_expired("a.not-base64!.c", 0));
        let not_json = token_with_payload("plain text");
        assert!(is_expired(&not_json, 0));
    }

    #[test]
    fn padded_base64_payloads_still_decode() {
        let body = base64::engine::general_purpose::URL_SAFE.encode(
            r#"{"sub":"u-2","email":"a@b.in","isAdmin":true,"exp":9999999999,"iat":1}"#,
        );
        let token = format!("h.{}.s", body);
        let claims = decode_claims(&token).expect("padded payload should decode");
        assert!(claims.is_admin);
    }
}
