#[derive(Debug, thiserror::Error)]
#[error("missing authority: {missing_authority}")]
pub struct MissingAuthorityError {
    pub missing_authority: String,
}

///
/// Claim present in the token but with a shape that cannot be interpreted.
///
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClaimError {
    #[error("malformed claim {claim}: expected {expected}")]
    MalformedClaim {
        claim: &'static str,
        expected: &'static str,
    },
}

///
/// Reasons a request is rejected with 401 by the auth middleware
///
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("illegal character in Authorization header")]
    IllegalHeaderCharacter,

    #[error("unsupported authorization type")]
    UnsupportedScheme,

    #[error("invalid jwt: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("{0}")]
    Claim(#[from] ClaimError),
}
