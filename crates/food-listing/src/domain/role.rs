//! Session and role resolution.

use serde::{Deserialize, Serialize};

/// The role the listing is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    /// Donor account (hotel or restaurant)
    Hotel,
    /// Recipient account
    Charity,
}

impl Role {
    /// Resolve from backend role strings such as `ROLE_CHARITY` or `hotel`.
    /// Charity wins when both kinds are present.
    pub fn from_role_strings<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized: Vec<String> = roles
            .into_iter()
            .map(|role| {
                let upper = role.as_ref().trim().to_ascii_uppercase();
                upper.strip_prefix("ROLE_").map(str::to_string).unwrap_or(upper)
            })
            .collect();

        if normalized.iter().any(|role| role.contains("CHARITY")) {
            Role::Charity
        } else if normalized
            .iter()
            .any(|role| role.contains("HOTEL") || role.contains("RESTAURANT"))
        {
            Role::Hotel
        } else {
            Role::Guest
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Hotel => "hotel",
            Role::Charity => "charity",
        }
    }
}

/// The current user, resolved once when the page loads
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    user_id: Option<String>,
    token: Option<String>,
    role: Role,
}

impl Session {
    pub fn guest() -> Self {
        Self::default()
    }

    pub fn new<S: AsRef<str>>(user_id: Option<String>, token: Option<String>, roles: &[S]) -> Self {
        let user_id = user_id.filter(|id| !id.trim().is_empty());
        let token = token.filter(|t| !t.trim().is_empty());
        let role = if user_id.is_some() && token.is_some() {
            Role::from_role_strings(roles)
        } else {
            Role::Guest
        };
        Self { user_id, token, role }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some() && self.token.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
