use super::ApplicationEnv;
use crate::auth::security_policy;
use jwt_auth::{util::create_validation, JwtAuthConverter, JwtAuthLayer};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub auth: JwtAuthLayer,
    pub body_limit: RequestBodyLimitLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    let validation = create_validation(env.jwt_algorithms.clone(), env.jwt_issuer.as_deref());
    let auth = JwtAuthLayer::new(
        env.jwt_key.clone(),
        validation,
        JwtAuthConverter::default(),
        security_policy(),
    );

    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);

    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware {
        auth,
        body_limit,
        trace,
    }
}
