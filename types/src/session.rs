use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::{ValidationError, validation};

/// Where the admin currently stands with the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Anonymous,
    Authenticated,
}

/// Body of `POST /auth/admin/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: SecretString::from(password.into()),
        }
    }

    /// Sign-in only checks that both fields are filled.
    pub fn validate(&self) -> Result<(), ValidationError> {
        use secrecy::ExposeSecret;

        validation::required("Email", &self.email)?;
        validation::required("Password", self.password.expose_secret())?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminIdentity {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// What a successful login yields.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    #[serde(with = "secret_string")]
    pub token: SecretString,
    #[serde(default, alias = "admin")]
    pub user: Option<AdminIdentity>,
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use secrecy::ExposeSecret;
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serde_json::json;

    #[test]
    fn credentials_serialize_the_password() {
        let body = serde_json::to_value(Credentials::new(" admin@example.com ", "hunter22")).unwrap();
        assert_eq!(body, json!({ "email": "admin@example.com", "password": "hunter22" }));
    }

    #[test]
    fn credentials_require_both_fields() {
        assert_eq!(
            Credentials::new("admin@example.com", "").validate(),
            Err(ValidationError::Required("Password".into()))
        );
    }

    #[test]
    fn login_data_accepts_admin_alias() {
        let data: LoginData = serde_json::from_value(json!({
            "token": "abc.def",
            "admin": { "_id": "1", "email": "admin@example.com" }
        }))
        .unwrap();
        assert_eq!(data.token.expose_secret(), "abc.def");
        assert_eq!(data.user.map(|u| u.email).as_deref(), Some("admin@example.com"));
    }

    #[test]
    fn token_is_redacted_in_debug_output() {
        let data: LoginData = serde_json::from_value(json!({ "token": "abc.def" })).unwrap();
        assert!(!format!("{data:?}").contains("abc.def"));
    }
}
