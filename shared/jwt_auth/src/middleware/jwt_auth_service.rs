use super::jwt_auth_future::JwtAuthFuture;
use crate::{
    error::AuthError, Claims, Decision, JwtAuthConverter, Requirement, RoutePolicy, User,
};
use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderValue, StatusCode},
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation};
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;

const BEARER: &str = "Bearer ";

pub(crate) struct JwtAuthState {
    pub key: DecodingKey,
    pub validation: Validation,
    pub converter: JwtAuthConverter,
    pub policy: RoutePolicy,
}

impl JwtAuthState {
    fn authenticate(&self, authorization_header: Option<&HeaderValue>) -> Result<User, AuthError> {
        let Some(authorization_header) = authorization_header else {
            return Err(AuthError::MissingHeader);
        };
        let Ok(authorization_value) = authorization_header.to_str() else {
            return Err(AuthError::IllegalHeaderCharacter);
        };
        let Some(token) = authorization_value.strip_prefix(BEARER) else {
            return Err(AuthError::UnsupportedScheme);
        };
        let token_data = jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)?;

        let claims = token_data.claims;
        let authorities = self.converter.convert(&claims)?;

        Ok(User::new(claims.subject().map(str::to_string), authorities))
    }
}

#[derive(Clone)]
pub struct JwtAuthService<S> {
    inner: S,
    state: Arc<JwtAuthState>,
}

impl<S> JwtAuthService<S> {
    pub(crate) fn new(inner: S, state: Arc<JwtAuthState>) -> Self {
        Self { inner, state }
    }
}

impl<S> Service<Request> for JwtAuthService<S>
where
    S: Service<Request, Response = Response>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = JwtAuthFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let requirement = self
            .state
            .policy
            .requirement(req.method(), req.uri().path());

        if let Requirement::Public = requirement {
            return JwtAuthFuture::Public {
                inner: self.inner.call(req),
            };
        }

        let user = match self.state.authenticate(req.headers().get(AUTHORIZATION)) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(%err, "auth error");
                return JwtAuthFuture::Rejected {
                    status: StatusCode::UNAUTHORIZED,
                };
            }
        };

        match requirement.evaluate(Some(&user)) {
            Decision::Permit => {
                // span that holds user information
                let span = tracing::info_span!(
                    "user",
                    id = user.subject.as_deref().unwrap_or_default()
                );

                req.extensions_mut().insert(user);

                JwtAuthFuture::Authorized {
                    inner: self.inner.call(req),
                    span,
                }
            }
            // authenticated user is never Unauthorized
            Decision::Unauthorized | Decision::Forbidden => {
                tracing::warn!(
                    subject = user.subject.as_deref().unwrap_or_default(),
                    method = %req.method(),
                    path = req.uri().path(),
                    "access denied"
                );
                JwtAuthFuture::Rejected {
                    status: StatusCode::FORBIDDEN,
                }
            }
        }
    }
}
