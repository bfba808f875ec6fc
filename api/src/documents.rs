use reqwest::Method;
use types::{DocumentKind, Error, PolicyDocument, PolicyForm, Result};

use crate::ApiClient;

impl ApiClient {
    /// Fetches the active document of `kind`, `None` if none was published yet.
    pub async fn get_document(&self, kind: DocumentKind) -> Result<Option<PolicyDocument>> {
        match self.get::<Option<PolicyDocument>>(kind.path()).await {
            Err(Error::Server {
                status: Some(404), ..
            }) => Ok(None),
            other => other,
        }
    }

    /// Replaces the document of `kind` with `form`, returning the stored record.
    pub async fn save_document(&self, kind: DocumentKind, form: &PolicyForm) -> Result<PolicyDocument> {
        form.validate()?;
        self.send_json(Method::PUT, kind.path(), form).await
    }
}
