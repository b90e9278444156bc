//! Authentication primitives for the SSO service
//!
//! Provides the two cryptographic building blocks the service composes:
//! - Password hashing (Argon2id, salted, PHC string output)
//! - Signed tokens (HS256 JWT) carrying SSO claims, keyed per application
//!
//! The crate does no I/O. The service defines its own capability traits and
//! adapts these implementations behind them.
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
//! assert!(!hasher.verify("other_password", &hash).unwrap());
//! ```
//!
//! ## Application-scoped Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::new(b"test-secret").unwrap();
//! let claims = Claims::issue(42, "alice@example.com", 1, Utc::now(), Duration::hours(1));
//! let token = handler.encode(&claims).unwrap();
//!
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.email, "alice@example.com");
//!
//! let other = JwtHandler::new(b"another-secret").unwrap();
//! assert!(other.decode(&token).is_err());
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
