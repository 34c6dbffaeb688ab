//! Domain entities for JWT-based authentication.

pub mod token;
pub mod user;

pub use token::{generate_token_id, Claims, TokenKind, TokenPair, RESERVED_CLAIMS, TOKEN_TYPE_BEARER};
pub use user::AuthUser;
