//! Explicit per-request session context.
//!
//! Authentication itself is delegated to the fronting identity provider;
//! what the application needs from a session is the user and their billing
//! plan. Both travel on this context object, passed by reference to
//! whatever needs them. There is no module-level session state.

use serde::{Deserialize, Serialize};

use ledgerly_shared::types::UserId;

/// Billing plan attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Default plan.
    Free,
    /// Paid plan with premium features (letterhead documents).
    Pro,
}

impl std::str::FromStr for Plan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            _ => Err(format!("Unknown plan: {s}")),
        }
    }
}

/// The authenticated session a request runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    /// Authenticated user.
    pub user_id: UserId,
    /// Billing plan for this session.
    pub plan: Plan,
}

impl SessionContext {
    /// Creates a session context.
    #[must_use]
    pub const fn new(user_id: UserId, plan: Plan) -> Self {
        Self { user_id, plan }
    }

    /// Returns true if the session is on the Pro plan.
    #[must_use]
    pub const fn is_pro(&self) -> bool {
        matches!(self.plan, Plan::Pro)
    }
}
