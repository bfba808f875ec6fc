use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use types::{Error, Payload, Result};

use crate::Session;

const EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// Body handling shared by every endpoint.
trait ResponseExt {
    async fn payload<T: DeserializeOwned>(self) -> Result<Payload<T>>;
    async fn acknowledge(self) -> Result<()>;
}

impl ResponseExt for Response {
    async fn payload<T: DeserializeOwned>(self) -> Result<Payload<T>> {
        let status = self.status();
        let body = self.bytes().await.map_err(transport)?;
        let value: Value = serde_json::from_slice(&body)?;
        reject_unsuccessful(status, &value)?;

        match serde_json::from_value(value) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                tracing::debug!(%error, "failed to decode response body");
                Err(error.into())
            }
        }
    }

    async fn acknowledge(self) -> Result<()> {
        let status = self.status();
        let body = self.bytes().await.map_err(transport)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }
        // Some endpoints answer with plain text; only a JSON `success: false`
        // counts as a refusal here.
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => reject_unsuccessful(status, &value),
            Err(_) => Ok(()),
        }
    }
}

fn reject_unsuccessful(status: StatusCode, value: &Value) -> Result<()> {
    if value.get("success").and_then(Value::as_bool) == Some(false) {
        let message = error_message(value).unwrap_or_default();
        return Err(Error::server(Some(status.as_u16()), message));
    }
    Ok(())
}

fn error_message(value: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(String::from)
}

fn transport(error: reqwest::Error) -> Error {
    Error::Transport(error.to_string())
}

/// Talks to the admin REST API on behalf of the signed-in admin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    session: Session,
}

impl ApiClient {
    /// Endpoint paths are resolved below `base_url`, so a base such as
    /// `https://example.com/backend` keeps its `/backend` prefix.
    pub fn new(mut base_url: Url, session: Session) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            client: Client::new(),
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn anonymous_request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::Transport(format!("invalid request url {path}: {e}")))?;
        tracing::debug!(%method, %url, "api request");

        Ok(self.client.request(method, url))
    }

    /// Builds a request carrying the session token, if there is one. The flag
    /// records whether it did.
    fn request(&self, method: Method, path: &str) -> Result<(RequestBuilder, bool)> {
        let builder = self.anonymous_request(method, path)?;
        Ok(match self.session.token() {
            Some(token) => (builder.bearer_auth(token.expose_secret()), true),
            None => (builder, false),
        })
    }

    /// Sends a request and turns every non-success status into an error.
    ///
    /// A 401 on a request that carried a token ends the session: the token is
    /// dropped from memory and storage before the error is returned.
    async fn execute(&self, builder: RequestBuilder, authenticated: bool) -> Result<Response> {
        let response = builder.send().await.map_err(transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .bytes()
            .await
            .ok()
            .and_then(|body| serde_json::from_slice::<Value>(&body).ok())
            .and_then(|value| error_message(&value));

        if status == StatusCode::UNAUTHORIZED && authenticated {
            tracing::warn!("api rejected session token; signing out");
            self.session.sign_out();
            return Err(Error::Unauthorized(
                message.unwrap_or_else(|| EXPIRED_MESSAGE.to_string()),
            ));
        }

        Err(Error::server(
            Some(status.as_u16()),
            message.unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            }),
        ))
    }

    pub(crate) async fn get_payload<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Payload<T>> {
        let (builder, authenticated) = self.request(Method::GET, path)?;
        self.execute(builder.query(query), authenticated)
            .await?
            .payload()
            .await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Ok(self.get_payload(path, &[]).await?.into_data())
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (builder, authenticated) = self.request(method, path)?;
        Ok(self
            .execute(builder.json(body), authenticated)
            .await?
            .payload()
            .await?
            .into_data())
    }

    /// Like [`Self::send_json`] but never attaches the session token.
    pub(crate) async fn send_json_anonymous<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.anonymous_request(method, path)?;
        Ok(self
            .execute(builder.json(body), false)
            .await?
            .payload()
            .await?
            .into_data())
    }

    pub(crate) async fn send_unit<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let (mut builder, authenticated) = self.request(method, path)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.execute(builder, authenticated).await?.acknowledge().await
    }
}
