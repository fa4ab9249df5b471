mod role;
mod security_policy;

pub use role::*;
pub use security_policy::*;
