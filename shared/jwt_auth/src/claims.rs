use serde::Deserialize;
use serde_json::{Map, Value};

///
/// Claim set of a token whose signature and expiry were already verified.
///
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    ///
    /// Subject (`sub`) of the token, when it is a string.
    ///
    pub fn subject(&self) -> Option<&str> {
        self.claim("sub").and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(claims: Map<String, Value>) -> Self {
        Self(claims)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_from_token_payload() {
        let claims = serde_json::from_value::<Claims>(json!({
            "sub": "379a73e6-91dd-48a3-a652-002d34c43670",
            "exp": 253402210800_i64,
            "realm_access": { "roles": ["admin"] }
        }))
        .unwrap();

        assert_eq!(claims.subject(), Some("379a73e6-91dd-48a3-a652-002d34c43670"));
        assert_eq!(
            claims.claim("realm_access"),
            Some(&json!({ "roles": ["admin"] }))
        );
    }

    #[test]
    fn missing_claim() {
        let claims = Claims::default();

        assert!(claims.claim("realm_access").is_none());
        assert!(claims.subject().is_none());
    }

    #[test]
    fn subject_not_a_string() {
        let claims = serde_json::from_value::<Claims>(json!({ "sub": 12 })).unwrap();

        assert!(claims.subject().is_none());
    }

    #[test]
    fn deserialize_non_object_fails() {
        let claims = serde_json::from_value::<Claims>(json!(["sub"]));

        assert!(claims.is_err());
    }
}
