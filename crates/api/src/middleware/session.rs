//! Session extraction for protected routes.
//!
//! Authentication is delegated to the fronting identity proxy, which
//! verifies the user and injects `x-user-id` and `x-user-plan` headers on
//! every forwarded request. This extractor turns those headers into an
//! explicit `SessionContext`; no session state lives outside the request.

use axum::{extract::FromRequestParts, http::request::Parts};
use std::str::FromStr;

use ledgerly_core::session::{Plan, SessionContext};
use ledgerly_shared::{AppError, types::UserId};

use crate::error::ApiError;

/// Header set by the identity proxy with the authenticated user id.
pub const USER_HEADER: &str = "x-user-id";
/// Header set by the identity proxy with the session's billing plan.
pub const PLAN_HEADER: &str = "x-user-plan";

/// Extractor for the authenticated session.
///
/// Use this in handlers to get the session context:
///
/// ```ignore
/// async fn handler(session: SessionUser) -> impl IntoResponse {
///     let user_id = session.user_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SessionUser(pub SessionContext);

impl SessionUser {
    /// Returns the authenticated user's id.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.0.user_id
    }

    /// Returns the session context.
    #[must_use]
    pub const fn context(&self) -> &SessionContext {
        &self.0
    }
}

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| UserId::from_str(value).ok())
            .ok_or_else(|| unauthorized("A verified x-user-id header is required"))?;

        // Absent plan header means the default plan, but a present yet
        // unrecognized one is rejected rather than silently downgraded.
        let plan = match parts.headers.get(PLAN_HEADER) {
            None => Plan::Free,
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|value| Plan::from_str(value).ok())
                .ok_or_else(|| unauthorized("Unrecognized x-user-plan header"))?,
        };

        Ok(Self(SessionContext::new(user_id, plan)))
    }
}

fn unauthorized(message: &str) -> ApiError {
    ApiError(AppError::Unauthorized(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;

    async fn extract(request: Request<()>) -> Result<SessionUser, StatusCode> {
        let (mut parts, ()) = request.into_parts();
        SessionUser::from_request_parts(&mut parts, &())
            .await
            .map_err(|err| err.into_response().status())
    }

    #[tokio::test]
    async fn test_extracts_user_and_plan() {
        let request = Request::builder()
            .header(USER_HEADER, "00000000-0000-0000-0000-000000000002")
            .header(PLAN_HEADER, "pro")
            .body(())
            .unwrap();

        let session = extract(request).await.unwrap();
        assert!(session.context().is_pro());
        assert_eq!(
            session.user_id().to_string(),
            "00000000-0000-0000-0000-000000000002"
        );
    }

    #[tokio::test]
    async fn test_missing_plan_defaults_to_free() {
        let request = Request::builder()
            .header(USER_HEADER, "00000000-0000-0000-0000-000000000002")
            .body(())
            .unwrap();

        let session = extract(request).await.unwrap();
        assert!(!session.context().is_pro());
    }

    #[tokio::test]
    async fn test_missing_user_header_is_unauthorized() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(extract(request).await.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_user_or_plan_is_unauthorized() {
        let bad_user = Request::builder()
            .header(USER_HEADER, "not-a-uuid")
            .body(())
            .unwrap();
        assert_eq!(
            extract(bad_user).await.unwrap_err(),
            StatusCode::UNAUTHORIZED
        );

        let bad_plan = Request::builder()
            .header(USER_HEADER, "00000000-0000-0000-0000-000000000002")
            .header(PLAN_HEADER, "enterprise")
            .body(())
            .unwrap();
        assert_eq!(
            extract(bad_plan).await.unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
    }
}
