//!
//! Bearer token authorization shared by HTTP services.
//!
//! Verified Keycloak tokens are turned into a set of [Authority] values
//! (standard scope authorities merged with `realm_access.roles`) and checked
//! against a declarative [RoutePolicy] by the [JwtAuthLayer] middleware.
//!

mod authority;
mod claims;
mod user;

pub mod converter;
pub mod error;
pub mod functions;
pub mod middleware;
pub mod policy;
pub mod util;

pub use authority::*;
pub use claims::*;
pub use converter::{JwtAuthConverter, ScopeAuthorityExtractor, StandardAuthorityExtractor};
pub use functions::*;
pub use middleware::JwtAuthLayer;
pub use policy::{Decision, PathPattern, Requirement, RoutePolicy, RouteRule};
pub use user::*;
