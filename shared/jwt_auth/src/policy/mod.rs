//!
//! Declarative route authorization.
//!
//! Rules are evaluated in insertion order, the first rule matching
//! request method and path decides which [Requirement] applies.
//!

mod path_pattern;
mod requirement;
mod route_policy;

pub use path_pattern::*;
pub use requirement::*;
pub use route_policy::*;
