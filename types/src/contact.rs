use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{ValidationError, validation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyForm {
    pub subject: String,
    pub body: String,
}

impl ReplyForm {
    pub fn for_message(message: &ContactMessage) -> Self {
        let subject = message
            .subject
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| format!("Re: {s}"))
            .unwrap_or_else(|| "Re: Your message".to_string());
        Self {
            subject,
            body: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("Subject", &self.subject)?;
        validation::required("Reply", &self.body)?;
        Ok(())
    }
}

/// Body of `POST /api/reply/contact-messages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReply {
    pub message_id: String,
    pub email: String,
    pub subject: String,
    pub reply: String,
}

impl ContactReply {
    pub fn new(message: &ContactMessage, form: &ReplyForm) -> Self {
        Self {
            message_id: message.id.clone(),
            email: message.email.clone(),
            subject: form.subject.trim().to_string(),
            reply: form.body.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(subject: Option<&str>) -> ContactMessage {
        ContactMessage {
            id: "m1".into(),
            name: "Anna".into(),
            email: "anna@example.com".into(),
            subject: subject.map(String::from),
            message: "My card does not scan".into(),
            created_at: None,
        }
    }

    #[test]
    fn reply_subject_follows_original() {
        assert_eq!(
            ReplyForm::for_message(&message(Some("Broken card"))).subject,
            "Re: Broken card"
        );
        assert_eq!(
            ReplyForm::for_message(&message(None)).subject,
            "Re: Your message"
        );
    }

    #[test]
    fn reply_needs_a_body() {
        let form = ReplyForm::for_message(&message(None));
        assert_eq!(form.validate(), Err(ValidationError::Required("Reply".into())));
    }

    #[test]
    fn reply_is_addressed_to_sender() {
        let msg = message(Some("Hi"));
        let form = ReplyForm {
            subject: " Re: Hi ".into(),
            body: " Try the new app version. ".into(),
        };
        let reply = ContactReply::new(&msg, &form);
        assert_eq!(reply.message_id, "m1");
        assert_eq!(reply.email, "anna@example.com");
        assert_eq!(reply.subject, "Re: Hi");
        assert_eq!(reply.reply, "Try the new app version.");
    }
}
