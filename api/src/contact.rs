use reqwest::Method;
use types::{ContactMessage, ContactReply, ReplyForm, Result};

use crate::ApiClient;

impl ApiClient {
    /// Emails a reply to the sender. Nothing is stored against the message.
    pub async fn reply_to_message(&self, message: &ContactMessage, form: &ReplyForm) -> Result<()> {
        form.validate()?;
        self.send_unit(
            Method::POST,
            "/api/reply/contact-messages",
            Some(&ContactReply::new(message, form)),
        )
        .await
    }
}
