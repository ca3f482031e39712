use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User role
///
/// A user holds exactly one role at a time; role assignment replaces the
/// previous value wholesale. Freshly registered users carry no role.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    /// Full read/write over users, catalog, payment status, and analytics
    Admin,
    /// May list/manage catalog items attributed to them
    Seller,
    /// Regular buyer
    User,
}

/// User entity - represents a user stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Email address (unique, the identity key)
    pub email: String,
    /// Display name
    pub name: String,
    /// Assigned role, absent until an admin grants one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for registering a user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// Result of a registration attempt.
///
/// A repeated registration for an existing email returns the sentinel form:
/// `message` set, `inserted_id` null. A successful insert carries the new id.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegisterResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub inserted_id: Option<Uuid>,
}

impl RegisterResult {
    pub fn inserted(id: Uuid) -> Self {
        Self {
            message: None,
            inserted_id: Some(id),
        }
    }

    pub fn already_exists() -> Self {
        Self {
            message: Some("User already exists!".to_string()),
            inserted_id: None,
        }
    }
}

/// Admin role flag for a self-lookup
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminFlag {
    pub admin: bool,
}

/// Seller role flag for a self-lookup
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SellerFlag {
    pub seller: bool,
}

impl User {
    /// Create a new user from a RegisterUser DTO (no role assigned yet)
    pub fn new(input: RegisterUser) -> Self {
        Self {
            id: Uuid::now_v7(),
            email: input.email,
            name: input.name,
            role: None,
            created_at: Utc::now(),
        }
    }

    /// Whether this user holds the given role
    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use validator::Validate;

    #[test]
    fn test_new_user_has_no_role() {
        let user = User::new(RegisterUser {
            email: "buyer@example.com".to_string(),
            name: "Buyer".to_string(),
        });
        assert!(user.role.is_none());
        assert!(!user.has_role(Role::Admin));
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::from_str("seller").unwrap(), Role::Seller);
        assert!(Role::from_str("superuser").is_err());
    }

    #[test]
    fn test_register_user_rejects_invalid_email() {
        let input = RegisterUser {
            email: "not-an-email".to_string(),
            name: "X".to_string(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_register_result_sentinel_shape() {
        let sentinel = RegisterResult::already_exists();
        assert!(sentinel.inserted_id.is_none());
        assert_eq!(sentinel.message.as_deref(), Some("User already exists!"));

        let json = serde_json::to_value(&sentinel).unwrap();
        assert_eq!(json["inserted_id"], serde_json::Value::Null);
    }
}
