use crate::{Authority, Claims};
use serde_json::Value;
use std::collections::HashSet;

const SCOPE_CLAIM_NAMES: [&str; 2] = ["scope", "scp"];

///
/// Authorities derived from the conventional claims of a token,
/// independent of identity-provider specific role claims.
///
/// Implementations must not fail: a missing claim yields an empty set.
///
pub trait StandardAuthorityExtractor: Send + Sync {
    fn extract(&self, claims: &Claims) -> HashSet<Authority>;
}

///
/// Maps the `scope` (or `scp`) claim to `SCOPE_` authorities.
///
/// The claim may be a space separated string or an array of strings.
/// Only the first non-null claim present is used.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeAuthorityExtractor;

impl StandardAuthorityExtractor for ScopeAuthorityExtractor {
    fn extract(&self, claims: &Claims) -> HashSet<Authority> {
        let Some(scopes) = SCOPE_CLAIM_NAMES
            .iter()
            .find_map(|name| claims.claim(name).filter(|scopes| !scopes.is_null()))
        else {
            return HashSet::new();
        };

        match scopes {
            Value::String(scopes) => scopes.split_whitespace().map(Authority::scope).collect(),
            Value::Array(scopes) => scopes
                .iter()
                .filter_map(Value::as_str)
                .filter(|scope| !scope.is_empty())
                .map(Authority::scope)
                .collect(),
            _ => HashSet::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> Claims {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn scope_string() {
        let authorities = ScopeAuthorityExtractor.extract(&claims(json!({
            "scope": "openid profile  email"
        })));

        assert_eq!(
            authorities,
            HashSet::from([
                Authority::scope("openid"),
                Authority::scope("profile"),
                Authority::scope("email"),
            ])
        );
    }

    #[test]
    fn scp_array() {
        let authorities = ScopeAuthorityExtractor.extract(&claims(json!({
            "scp": ["read", 5, "write"]
        })));

        assert_eq!(
            authorities,
            HashSet::from([Authority::scope("read"), Authority::scope("write")])
        );
    }

    #[test]
    fn scope_takes_precedence_over_scp() {
        let authorities = ScopeAuthorityExtractor.extract(&claims(json!({
            "scope": "read",
            "scp": "write"
        })));

        assert_eq!(authorities, HashSet::from([Authority::scope("read")]));
    }

    #[test]
    fn null_scope_falls_back_to_scp() {
        let authorities = ScopeAuthorityExtractor.extract(&claims(json!({
            "scope": null,
            "scp": ["read"]
        })));

        assert_eq!(authorities, HashSet::from([Authority::scope("read")]));
    }

    #[test]
    fn missing_scope() {
        let authorities = ScopeAuthorityExtractor.extract(&claims(json!({ "sub": "user" })));

        assert!(authorities.is_empty());
    }

    #[test]
    fn scope_unexpected_type() {
        let authorities = ScopeAuthorityExtractor.extract(&claims(json!({ "scope": 12 })));

        assert!(authorities.is_empty());
    }
}
