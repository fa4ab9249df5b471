use crate::{error::ClaimError, Claims};
use serde_json::Value;

pub const REALM_ACCESS_CLAIM: &str = "realm_access";
pub const ROLES_KEY: &str = "roles";

///
/// Reads role names from the `realm_access.roles` claim.
///
/// Absent or `null` claim, absent or `null` roles key
/// and an empty roles list all yield no roles.
///
/// ### Errors
/// - [ClaimError::MalformedClaim] when
///     - `realm_access` is not an object
///     - `roles` is not an array
///     - any of the roles is not a string
///
pub fn realm_roles(claims: &Claims) -> Result<Vec<&str>, ClaimError> {
    let realm_access = match claims.claim(REALM_ACCESS_CLAIM) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Object(realm_access)) => realm_access,
        Some(_) => {
            return Err(ClaimError::MalformedClaim {
                claim: "realm_access",
                expected: "object",
            })
        }
    };

    let roles = match realm_access.get(ROLES_KEY) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(roles)) => roles,
        Some(_) => {
            return Err(ClaimError::MalformedClaim {
                claim: "realm_access.roles",
                expected: "array",
            })
        }
    };

    roles
        .iter()
        .map(|role| {
            role.as_str().ok_or(ClaimError::MalformedClaim {
                claim: "realm_access.roles",
                expected: "array of strings",
            })
        })
        .collect()
}
