use crate::{error::MissingAuthorityError, Authority, User};

///
/// Validates that user has all required authorities.
///
/// ### Errors
/// - [MissingAuthorityError] with the first authority that is missing
///
pub fn require_all_authorities(
    user: &User,
    authorities: &[Authority],
) -> Result<(), MissingAuthorityError> {
    for authority in authorities {
        if !user.has_authority(authority) {
            return Err(MissingAuthorityError {
                missing_authority: authority.to_string(),
            });
        }
    }

    Ok(())
}
