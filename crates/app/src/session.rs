//! Login hand-off between the login form and the host's auth client

use yew::Callback;

/// Trimmed, non-empty login form values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub phone: String,
    pub password: String,
}

impl Credentials {
    /// `None` if either field is blank
    pub fn new(phone: &str, password: &str) -> Option<Self> {
        let phone = phone.trim();
        if phone.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self {
            phone: phone.to_string(),
            password: password.to_string(),
        })
    }
}

/// Submitted credentials plus the continuation the auth client calls with
/// the issued token. `complete` stores the token and enters the main tab.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginRequest {
    pub credentials: Credentials,
    pub complete: Callback<String>,
}

/// Handler the host installs on [`crate::App`] to exchange credentials
pub type LoginHandler = Callback<LoginRequest>;
