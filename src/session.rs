//! Authenticated session
//!
//! Holds the name of the logged-in user in memory only. Store operations
//! never read it implicitly; callers pass [`Session::require_user`] to them.

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::UserName;

/// Current login state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserName>,
}

impl Session {
    /// Start logged out
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful login
    pub fn login(&mut self, user: UserName) {
        self.user = Some(user);
    }

    /// Forget the logged-in user
    pub fn logout(&mut self) {
        self.user = None;
    }

    /// The logged-in user, or `InvalidCredentials` when logged out
    pub fn require_user(&self) -> PocketbookResult<&UserName> {
        self.user.as_ref().ok_or(PocketbookError::InvalidCredentials)
    }
}
