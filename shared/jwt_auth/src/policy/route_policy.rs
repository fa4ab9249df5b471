use super::{Decision, PathPattern, Requirement};
use crate::User;
use axum::http::Method;

#[derive(Debug, Clone)]
pub struct RouteRule {
    /// `None` matches every method, `GET` also matches `HEAD`
    pub method: Option<Method>,
    pub pattern: PathPattern,
    pub requirement: Requirement,
}

impl RouteRule {
    fn matches(&self, method: &Method, path: &str) -> bool {
        let method_matches = self
            .method
            .as_ref()
            .map_or(true, |rule_method| {
                rule_method == method || (*rule_method == Method::GET && *method == Method::HEAD)
            });

        method_matches && self.pattern.matches(path)
    }
}

///
/// Ordered route-to-requirement table with a fallback
/// for requests not matched by any rule.
///
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    rules: Vec<RouteRule>,
    any_request: Requirement,
}

impl RoutePolicy {
    pub fn new(any_request: Requirement) -> Self {
        Self {
            rules: Vec::new(),
            any_request,
        }
    }

    pub fn route(mut self, method: Method, pattern: &str, requirement: Requirement) -> Self {
        self.rules.push(RouteRule {
            method: Some(method),
            pattern: PathPattern::new(pattern),
            requirement,
        });
        self
    }

    pub fn any_method(mut self, pattern: &str, requirement: Requirement) -> Self {
        self.rules.push(RouteRule {
            method: None,
            pattern: PathPattern::new(pattern),
            requirement,
        });
        self
    }

    pub fn requirement(&self, method: &Method, path: &str) -> &Requirement {
        self.rules
            .iter()
            .find(|rule| rule.matches(method, path))
            .map_or(&self.any_request, |rule| &rule.requirement)
    }

    pub fn decide(&self, method: &Method, path: &str, user: Option<&User>) -> Decision {
        self.requirement(method, path).evaluate(user)
    }
}
