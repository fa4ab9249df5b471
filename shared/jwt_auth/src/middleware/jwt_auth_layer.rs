use super::jwt_auth_service::{JwtAuthService, JwtAuthState};
use crate::{JwtAuthConverter, RoutePolicy};
use jsonwebtoken::{DecodingKey, Validation};
use std::sync::Arc;
use tower::Layer;

///
/// Middleware that validates JWT in Authorization header
/// and checks the route requirement from [RoutePolicy].
///
/// If request is permitted [crate::User] is added to request extensions.
/// Requests without valid token are rejected with 401,
/// requests lacking required authority with 403.
///
#[derive(Clone)]
pub struct JwtAuthLayer {
    state: Arc<JwtAuthState>,
}

impl JwtAuthLayer {
    pub fn new(
        key: DecodingKey,
        validation: Validation,
        converter: JwtAuthConverter,
        policy: RoutePolicy,
    ) -> Self {
        let state = JwtAuthState {
            key,
            validation,
            converter,
            policy,
        };

        Self {
            state: Arc::new(state),
        }
    }
}

impl<S> Layer<S> for JwtAuthLayer {
    type Service = JwtAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JwtAuthService::new(inner, self.state.clone())
    }
}
