use crate::{functions::require_all_authorities, Authority, User};

///
/// What a request must satisfy to reach a route
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Token is not inspected at all
    Public,
    Authenticated,
    AnyAuthority(Vec<Authority>),
    AllAuthorities(Vec<Authority>),
    DenyAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Permit,
    /// no valid credentials (401)
    Unauthorized,
    /// valid credentials without required authority (403)
    Forbidden,
}

impl Requirement {
    pub fn evaluate(&self, user: Option<&User>) -> Decision {
        if let Requirement::Public = self {
            return Decision::Permit;
        }
        let Some(user) = user else {
            return Decision::Unauthorized;
        };

        let permitted = match self {
            Requirement::Public | Requirement::Authenticated => true,
            Requirement::AnyAuthority(authorities) => authorities
                .iter()
                .any(|authority| user.has_authority(authority)),
            Requirement::AllAuthorities(authorities) => {
                match require_all_authorities(user, authorities) {
                    Ok(()) => true,
                    Err(err) => {
                        tracing::debug!(%err, "authority check failed");
                        false
                    }
                }
            }
            Requirement::DenyAll => false,
        };

        match permitted {
            true => Decision::Permit,
            false => Decision::Forbidden,
        }
    }
}
