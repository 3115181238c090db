//! Session gate.
//!
//! Authentication itself lives elsewhere; this module only asks a
//! [`SessionResolver`] whether the request carries a user.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub user_id: String,
}

pub trait SessionResolver: Send + Sync {
    fn resolve(&self, req: &HttpRequest) -> Option<UserSession>;
}

/// Trusts a user id forwarded by the authenticating proxy in a header.
pub struct HeaderSessionResolver {
    header: String,
}

impl HeaderSessionResolver {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }
}

impl SessionResolver for HeaderSessionResolver {
    fn resolve(&self, req: &HttpRequest) -> Option<UserSession> {
        req.headers()
            .get(self.header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|user_id| !user_id.is_empty())
            .map(|user_id| UserSession {
                user_id: user_id.to_string(),
            })
    }
}

impl FromRequest for UserSession {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req
            .app_data::<web::Data<AppState>>()
            .and_then(|state| state.sessions.resolve(req));

        if session.is_none() {
            log::warn!("Rejected {} {}: no session", req.method(), req.path());
        }

        ready(session.ok_or_else(ApiError::unauthenticated))
    }
}
