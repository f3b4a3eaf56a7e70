//! Authentication infrastructure library
//!
//! Provides the credential-verification and token-issuance building blocks
//! used by the HTTP service:
//! - Password hashing (Argon2id) with constant-time verification
//! - Signed, time-bound session tokens (HS256)
//! - An authenticator coordinating both
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{SessionClaims, TokenIssuer};
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = SessionClaims::new("alice", "user", 24);
//! let token = issuer.encode(&claims).unwrap();
//! let decoded = issuer.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "alice");
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use auth::{Authenticator, SessionClaims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the password and issue a token
//! let claims = SessionClaims::new("alice", "user", 24);
//! let token = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Protected route: validate the presented token
//! let decoded = auth.validate_token(&token).unwrap();
//! assert_eq!(decoded.role, "user");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::SessionClaims;
pub use token::TokenError;
pub use token::TokenIssuer;
