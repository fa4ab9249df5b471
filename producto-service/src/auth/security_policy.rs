use super::Role;
use axum::http::Method;
use jwt_auth::{Authority, Requirement, RoutePolicy};

///
/// Route requirements of the service.
///
/// Preflight and health checks are public,
/// listing posts requires [Role::ProductoRol2],
/// everything else needs any valid token.
///
pub fn security_policy() -> RoutePolicy {
    RoutePolicy::new(Requirement::Authenticated)
        .route(Method::OPTIONS, "/**", Requirement::Public)
        .any_method("/actuator/**", Requirement::Public)
        .route(
            Method::GET,
            "/posts",
            Requirement::AnyAuthority(vec![Authority::role(Role::ProductoRol2.as_ref())]),
        )
}
