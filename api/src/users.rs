use reqwest::Method;
use types::{PasswordReset, PasswordResetRequest, Result, UserForm};

use crate::{ApiClient, ListResource, Users};

fn user_path(user_id: &str) -> String {
    format!("{}/{user_id}", Users::PATH)
}

impl ApiClient {
    pub async fn create_user(&self, form: &UserForm) -> Result<()> {
        form.validate()?;
        self.send_unit(Method::POST, Users::PATH, Some(&form.normalized()))
            .await
    }

    pub async fn update_user(&self, user_id: &str, form: &UserForm) -> Result<()> {
        let form = UserForm {
            password: None,
            ..form.normalized()
        };
        form.validate()?;
        self.send_unit(Method::PUT, &user_path(user_id), Some(&form))
            .await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.send_unit::<()>(Method::DELETE, &user_path(user_id), None)
            .await
    }

    /// Flips the account between active and suspended.
    pub async fn toggle_user_status(&self, user_id: &str) -> Result<()> {
        self.send_unit::<()>(
            Method::PATCH,
            &format!("{}/toggle-status", user_path(user_id)),
            None,
        )
        .await
    }

    /// Sets a new password for a user. Invalid input never leaves the client.
    pub async fn reset_user_password(&self, user_id: &str, reset: &PasswordReset) -> Result<()> {
        reset.validate()?;
        self.send_unit(
            Method::PATCH,
            &format!("{}/reset-password", user_path(user_id)),
            Some(&PasswordResetRequest {
                new_password: &reset.new_password,
            }),
        )
        .await
    }
}
