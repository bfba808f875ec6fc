use reqwest::Method;
use types::{Credentials, LoginData, Result};

use crate::ApiClient;

impl ApiClient {
    /// Exchanges admin credentials for a session token and stores it.
    ///
    /// On failure the session is left untouched.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginData> {
        credentials.validate()?;
        let data: LoginData = self
            .send_json_anonymous(Method::POST, "/auth/admin/login", credentials)
            .await?;
        self.session().sign_in(data.token.clone());
        tracing::info!(email = %credentials.email, "admin signed in");
        Ok(data)
    }

    pub fn logout(&self) {
        self.session().sign_out();
    }
}
