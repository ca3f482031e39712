//! JWT authentication: token issuance, verification, and the request gate.
//!
//! Authentication is stateless: tokens are HS256-signed with a shared
//! secret and carry the caller's identity claims. Authorization (role
//! checks) is a separate concern layered on top by the users domain.

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{JwtAuth, JwtClaims, TOKEN_TTL_SECS};
pub use middleware::{optional_jwt_auth_middleware, Authenticated};
