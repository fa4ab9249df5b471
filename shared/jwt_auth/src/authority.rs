use serde::Serialize;
use std::fmt;

const ROLE_PREFIX: &str = "ROLE_";
const SCOPE_PREFIX: &str = "SCOPE_";

///
/// Normalized permission identifier used by access-control checks.
///
/// Realm roles are prefixed with `ROLE_`, scopes with `SCOPE_`.
/// The remainder is kept exactly as it appeared in the token.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Authority(String);

impl Authority {
    pub fn new(authority: impl Into<String>) -> Self {
        Self(authority.into())
    }

    pub fn role(role: &str) -> Self {
        Self(format!("{ROLE_PREFIX}{role}"))
    }

    pub fn scope(scope: &str) -> Self {
        Self(format!("{SCOPE_PREFIX}{scope}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Authority {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
