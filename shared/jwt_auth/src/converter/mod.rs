//!
//! Conversion of verified token claims into authorities
//!

mod jwt_auth_converter;
mod realm_roles;
mod standard_authority_extractor;

pub use jwt_auth_converter::*;
pub use realm_roles::*;
pub use standard_authority_extractor::*;
