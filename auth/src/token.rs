use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}

/// Claims carried by a session token.
///
/// The subject is the user's display name; the role travels with the token
/// so protected routes can authorize without a store lookup. Tokens are
/// never persisted server side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (user display name)
    pub sub: String,

    /// Role name (`user` or `admin`)
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Build claims with a fixed validity window starting now.
    pub fn new(name: impl Into<String>, role: impl Into<String>, validity_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(validity_hours);

        Self {
            sub: name.into(),
            role: role.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Issues and validates signed session tokens.
///
/// Uses HS256 (HMAC with SHA-256). Decoding enforces the `exp` claim, so an
/// expired token never validates.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create a new issuer with a signing secret.
    ///
    /// The secret should be at least 32 bytes for HS256 and come from
    /// configuration, never from source.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token string.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &SessionClaims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token, checking signature and expiry.
    ///
    /// # Errors
    /// * `Expired` - Token has expired
    /// * `InvalidToken` - Signature is invalid or token is malformed
    pub fn decode(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_validity_window() {
        let claims = SessionClaims::new("alice", "user", 24);

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_admin_claims() {
        let claims = SessionClaims::new("root", "admin", 1);
        assert!(claims.is_admin());
    }

    #[test]
    fn test_encode_and_decode() {
        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!");

        let claims = SessionClaims::new("alice", "admin", 24);
        let token = issuer.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = issuer.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_malformed_token() {
        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = issuer.decode("invalid.token.here");
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let issuer1 = TokenIssuer::new(b"secret1_at_least_32_bytes_long_key!");
        let issuer2 = TokenIssuer::new(b"secret2_at_least_32_bytes_long_key!");

        let claims = SessionClaims::new("alice", "user", 24);
        let token = issuer1.encode(&claims).expect("Failed to encode token");

        assert!(issuer2.decode(&token).is_err());
    }

    #[test]
    fn test_decode_expired_token() {
        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!");

        let mut claims = SessionClaims::new("alice", "user", 24);
        claims.iat -= 48 * 60 * 60;
        claims.exp -= 48 * 60 * 60;

        let token = issuer.encode(&claims).expect("Failed to encode token");

        let result = issuer.decode(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }
}
