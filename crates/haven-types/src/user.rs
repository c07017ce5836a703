use serde::{Deserialize, Serialize};

pub type UserId = String;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Signed-in identity. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Build a user with a fresh id and an avatar seeded by the email.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        let email = email.into();
        let avatar = Some(format!("{}?seed={}", AVATAR_BASE_URL, email));
        Self {
            id: crate::new_id(),
            email,
            name: name.into(),
            avatar,
        }
    }

    /// Display name derived from the local part of an email address
    pub fn name_from_email(email: &str) -> &str {
        email.split('@').next().unwrap_or(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_email() {
        assert_eq!(User::name_from_email("sam@example.com"), "sam");
        assert_eq!(User::name_from_email("no-at-sign"), "no-at-sign");
        assert_eq!(User::name_from_email("@example.com"), "");
    }

    #[test]
    fn test_new_user_has_unique_id_and_avatar() {
        let a = User::new("a@example.com", "a");
        let b = User::new("a@example.com", "a");
        assert_ne!(a.id, b.id);
        assert_eq!(
            a.avatar.as_deref(),
            Some("https://api.dicebear.com/7.x/avataaars/svg?seed=a@example.com")
        );
    }
}
