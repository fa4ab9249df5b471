use crate::Authority;
use std::{collections::HashSet, ops::Deref, sync::Arc};

///
/// Struct with user information.
///
/// To make sure cloning does not take too long
/// all fields are stored in InnerUser behind an Arc.
///
/// InnerUser fields are accessible thanks to Deref trait.
///
#[derive(Debug, Clone)]
pub struct User {
    inner: Arc<InnerUser>,
}

///
/// User information retrieved from his JWT.
///
#[derive(Debug)]
pub struct InnerUser {
    pub subject: Option<String>,
    pub authorities: HashSet<Authority>,
}

impl User {
    pub fn new(subject: Option<String>, authorities: HashSet<Authority>) -> Self {
        Self {
            inner: Arc::new(InnerUser {
                subject,
                authorities,
            }),
        }
    }
}

impl InnerUser {
    pub fn has_authority(&self, authority: &Authority) -> bool {
        self.authorities.contains(authority)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.has_authority(&Authority::role(role))
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
