mod require_all_authorities;

pub use require_all_authorities::*;
