//! Explicit session context.
//!
//! The core never reads ambient login state; the caller constructs a
//! [`Session`] at login, passes it into the entry points that record a
//! reporter, and drops it at logout. The core sees only the opaque name.

/// The logged-in user's identity, as an opaque reporter-name string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: String,
}

impl Session {
    /// Creates a session for the given user name.
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }

    /// The reporter name recorded on usage logs and depletion snapshots.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_carries_opaque_name() {
        let session = Session::new("Class 12-A");
        assert_eq!(session.user(), "Class 12-A");
    }
}
