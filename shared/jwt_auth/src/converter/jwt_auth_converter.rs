use super::{realm_roles, ScopeAuthorityExtractor, StandardAuthorityExtractor};
use crate::{error::ClaimError, Authority, Claims};
use std::{collections::HashSet, sync::Arc};

///
/// Converts claims of a verified Keycloak token into authorities.
///
/// Result is the union of authorities returned by the standard extractor
/// and `ROLE_` authorities built from `realm_access.roles`.
///
#[derive(Clone)]
pub struct JwtAuthConverter {
    standard: Arc<dyn StandardAuthorityExtractor>,
}

impl JwtAuthConverter {
    pub fn new(standard: Arc<dyn StandardAuthorityExtractor>) -> Self {
        Self { standard }
    }

    ///
    /// ### Errors
    /// - [ClaimError::MalformedClaim] when `realm_access` has unexpected shape
    ///
    pub fn convert(&self, claims: &Claims) -> Result<HashSet<Authority>, ClaimError> {
        let roles = realm_roles(claims)?;

        let mut authorities = self.standard.extract(claims);
        authorities.extend(roles.into_iter().map(Authority::role));

        Ok(authorities)
    }
}

impl Default for JwtAuthConverter {
    fn default() -> Self {
        Self::new(Arc::new(ScopeAuthorityExtractor))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::{json, Value};

    struct StaticAuthorities(HashSet<Authority>);

    impl StandardAuthorityExtractor for StaticAuthorities {
        fn extract(&self, _claims: &Claims) -> HashSet<Authority> {
            self.0.clone()
        }
    }

    fn scope_read() -> HashSet<Authority> {
        HashSet::from([Authority::scope("read")])
    }

    fn converter(standard: HashSet<Authority>) -> JwtAuthConverter {
        JwtAuthConverter::new(Arc::new(StaticAuthorities(standard)))
    }

    fn claims(value: Value) -> Claims {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn realm_access_missing_returns_standard_authorities() {
        let result = converter(scope_read()).convert(&claims(json!({ "sub": "user" })));

        assert_eq!(result, Ok(scope_read()));
    }

    #[test]
    fn roles_missing_returns_standard_authorities() {
        let result = converter(scope_read()).convert(&claims(json!({
            "realm_access": {}
        })));

        assert_eq!(result, Ok(scope_read()));
    }

    #[test]
    fn roles_empty_returns_standard_authorities() {
        let result = converter(scope_read()).convert(&claims(json!({
            "realm_access": { "roles": [] }
        })));

        assert_eq!(result, Ok(scope_read()));
    }

    #[test]
    fn roles_merged_with_standard_authorities() {
        let result = converter(scope_read()).convert(&claims(json!({
            "realm_access": { "roles": ["producto-rol2", "admin"] }
        })));

        assert_eq!(
            result,
            Ok(HashSet::from([
                Authority::scope("read"),
                Authority::role("producto-rol2"),
                Authority::role("admin"),
            ]))
        );
    }

    #[test]
    fn convert_is_deterministic() {
        let converter = JwtAuthConverter::default();
        let claims = claims(json!({
            "scope": "openid profile",
            "realm_access": { "roles": ["admin", "producto-rol2"] }
        }));

        let first = converter.convert(&claims);
        let second = converter.convert(&claims);

        assert_eq!(first, second);
    }

    #[test]
    fn duplicated_roles_collapse() {
        let result = converter(HashSet::new())
            .convert(&claims(json!({
                "realm_access": { "roles": ["admin", "admin"] }
            })))
            .unwrap();

        assert_eq!(result.len(), 1);
        assert!(result.contains(&Authority::role("admin")));
    }

    #[test]
    fn role_order_does_not_matter() {
        let converter = converter(scope_read());

        let first = converter.convert(&claims(json!({
            "realm_access": { "roles": ["a", "b", "c"] }
        })));
        let second = converter.convert(&claims(json!({
            "realm_access": { "roles": ["c", "a", "b"] }
        })));

        assert_eq!(first, second);
    }

    #[test]
    fn role_and_standard_authority_with_same_value_collapse() {
        let standard = HashSet::from([Authority::role("admin")]);

        let result = converter(standard.clone()).convert(&claims(json!({
            "realm_access": { "roles": ["admin"] }
        })));

        assert_eq!(result, Ok(standard));
    }

    #[test]
    fn malformed_roles_fail() {
        let result = converter(scope_read()).convert(&claims(json!({
            "realm_access": { "roles": "admin" }
        })));

        assert!(matches!(result, Err(ClaimError::MalformedClaim { .. })));
    }

    #[test]
    fn default_converter_uses_scope_claim() {
        let result = JwtAuthConverter::default().convert(&claims(json!({
            "scope": "read",
            "realm_access": { "roles": ["producto-rol2"] }
        })));

        assert_eq!(
            result,
            Ok(HashSet::from([
                Authority::scope("read"),
                Authority::role("producto-rol2"),
            ]))
        );
    }
}
