//! Authentication context handed explicitly to every view.
//!
//! Token storage and the login flow belong to the host page; the client only
//! needs the bearer token for requests and a way to clear it.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// A blank token counts as signed out.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|token| !token.trim().is_empty()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value for the `Authorization` header, if signed in.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }
}
