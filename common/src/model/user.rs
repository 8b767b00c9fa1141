use serde::{Deserialize, Serialize};

use super::DisplayCategory;
use crate::store::Resource;

pub type UserId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Staff,
    Customer,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Staff => "Staff",
            UserRole::Customer => "Customer",
        }
    }

    pub fn category(self) -> DisplayCategory {
        match self {
            UserRole::Admin => DisplayCategory::Accent,
            UserRole::Staff => DisplayCategory::Info,
            UserRole::Customer => DisplayCategory::Neutral,
        }
    }
}

impl User {
    pub fn role(&self) -> UserRole {
        if self.is_superuser {
            UserRole::Admin
        } else if self.is_staff {
            UserRole::Staff
        } else {
            UserRole::Customer
        }
    }

    /// `First Last`, or the username when no name is on file.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    /// Upper-cased first letter of the username, for the avatar.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn active_category(&self) -> DisplayCategory {
        if self.is_active {
            DisplayCategory::Success
        } else {
            DisplayCategory::Danger
        }
    }

    pub fn active_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }
}

impl Resource for User {
    type Id = UserId;

    const PATH: &'static str = "users/";
    const LABEL: &'static str = "user";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Body of `PATCH users/{id}/` sent by the admin edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

impl UserPatch {
    /// Fields of `edited` that differ from `original`.
    pub fn diff(original: &User, edited: &User) -> Self {
        fn changed<T: PartialEq + Clone>(before: &T, after: &T) -> Option<T> {
            (before != after).then(|| after.clone())
        }

        Self {
            first_name: changed(&original.first_name, &edited.first_name),
            last_name: changed(&original.last_name, &edited.last_name),
            email: changed(&original.email, &edited.email),
            phone: changed(&original.phone, &edited.phone).map(Option::unwrap_or_default),
            is_active: changed(&original.is_active, &edited.is_active),
            is_staff: changed(&original.is_staff, &edited.is_staff),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ada() -> User {
        serde_json::from_value(json!({
            "id": 1,
            "username": "ada",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "phone": null,
            "is_active": true,
            "is_staff": false,
            "is_superuser": false
        }))
        .unwrap()
    }

    #[test]
    fn decodes_with_missing_role_attributes() {
        let user: User = serde_json::from_value(json!({ "id": 2, "username": "bob" })).unwrap();
        assert!(user.is_active);
        assert_eq!(user.role(), UserRole::Customer);
        assert_eq!(user.display_name(), "bob");
        assert_eq!(user.initial(), "B");
    }

    #[test]
    fn role_follows_flags() {
        let mut user = ada();
        assert_eq!(user.role(), UserRole::Customer);
        user.is_staff = true;
        assert_eq!(user.role(), UserRole::Staff);
        user.is_superuser = true;
        assert_eq!(user.role(), UserRole::Admin);
        assert_eq!(user.role().category(), DisplayCategory::Accent);
    }

    #[test]
    fn active_badge() {
        let mut user = ada();
        assert_eq!(user.active_label(), "Active");
        assert_eq!(user.active_category(), DisplayCategory::Success);
        user.is_active = false;
        assert_eq!(user.active_label(), "Inactive");
        assert_eq!(user.active_category(), DisplayCategory::Danger);
    }

    #[test]
    fn patch_carries_only_changes() {
        let original = ada();
        let mut edited = original.clone();
        assert!(UserPatch::diff(&original, &edited).is_empty());

        edited.email = "ada@analytical.engine".to_string();
        edited.phone = Some("555-0100".to_string());
        edited.is_active = false;
        let body = serde_json::to_value(UserPatch::diff(&original, &edited)).unwrap();
        assert_eq!(
            body,
            json!({
                "email": "ada@analytical.engine",
                "phone": "555-0100",
                "is_active": false
            })
        );
    }
}
