use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{Filters, ValidationError, validation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Business,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Business, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Business => "business",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Business => "Business",
            Role::Admin => "Admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user's profiles arrive either populated or as bare ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileRef {
    Id(String),
    Summary {
        #[serde(alias = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl ProfileRef {
    pub fn id(&self) -> &str {
        match self {
            ProfileRef::Id(id) | ProfileRef::Summary { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default)]
    pub profiles: Vec<ProfileRef>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

fn active_by_default() -> bool {
    true
}

impl User {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    pub fn initial(&self) -> String {
        self.full_name()
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub role: Option<Role>,
}

impl Filters for UserFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.role
            .map(|role| ("role", role.as_str().to_string()))
            .into_iter()
            .collect()
    }
}

/// The create/edit user form. `password` is only sent on create.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserForm {
    pub fn for_create() -> Self {
        Self {
            password: Some(String::new()),
            ..Self::default()
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role,
            is_verified: user.is_verified,
            password: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("First name", &self.first_name)?;
        validation::required("Last name", &self.last_name)?;
        validation::email(&self.email)?;
        if let Some(password) = &self.password {
            validation::password(password)?;
        }
        Ok(())
    }

    /// The form as it goes over the wire: trimmed, blank phone dropped.
    pub fn normalized(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|phone| !phone.is_empty())
                .map(String::from),
            role: self.role,
            is_verified: self.is_verified,
            password: self.password.clone(),
        }
    }
}

/// An admin-initiated password reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordReset {
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordReset {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("New password", &self.new_password)?;
        validation::password(&self.new_password)?;
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest<'a> {
    pub new_password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_mongo_style_user() {
        let user: User = serde_json::from_value(json!({
            "_id": "7",
            "firstName": "Anna",
            "lastName": "Berg",
            "email": "anna@example.com",
            "role": "business",
            "isVerified": true,
            "profiles": ["p1", { "_id": "p2", "name": "Work" }],
            "createdAt": "2024-03-01T10:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(user.id, "7");
        assert_eq!(user.role, Role::Business);
        assert!(user.is_active);
        assert_eq!(user.full_name(), "Anna Berg");
        let ids: Vec<_> = user.profiles.iter().map(ProfileRef::id).collect();
        assert_eq!(ids, ["p1", "p2"]);
    }

    #[test]
    fn short_reset_password_is_rejected_before_mismatch() {
        let reset = PasswordReset {
            new_password: "abc".into(),
            confirm_password: "abc".into(),
        };
        assert_eq!(
            reset.validate().unwrap_err().to_string(),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn mismatched_reset_password_is_rejected() {
        let reset = PasswordReset {
            new_password: "secret1".into(),
            confirm_password: "secret2".into(),
        };
        assert_eq!(reset.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn edit_form_does_not_send_password() {
        let form = UserForm {
            first_name: "Anna".into(),
            last_name: "Berg".into(),
            email: "anna@example.com".into(),
            ..UserForm::default()
        };
        assert!(form.validate().is_ok());
        let body = serde_json::to_value(form.normalized()).unwrap();
        assert!(body.get("password").is_none());
        assert!(body.get("phone").is_none());
        assert_eq!(body["role"], "user");
    }

    #[test]
    fn create_form_requires_password() {
        let form = UserForm {
            first_name: "Anna".into(),
            last_name: "Berg".into(),
            email: "anna@example.com".into(),
            ..UserForm::for_create()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Required("Password".into()))
        );
    }

    #[test]
    fn role_filter_emits_lowercase_value() {
        let filters = UserFilters {
            role: Some(Role::Admin),
        };
        assert_eq!(filters.query_pairs(), vec![("role", "admin".to_string())]);
        assert!(UserFilters::default().query_pairs().is_empty());
    }
}
