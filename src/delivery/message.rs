//! Outgoing message built around a digest.

use crate::digest::{ContentType, Digest};

use super::error::DeliveryError;

/// Default subject line.
pub const DEFAULT_SUBJECT: &str = "Here is your REMINDer";

/// Sender, recipient and subject for a digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub subject: String,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            sender: None,
            recipient: None,
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

/// A digest addressed for delivery.
#[derive(Debug, Clone)]
pub struct Message {
    pub envelope: Envelope,
    pub body: String,
    pub content_type: ContentType,
    /// RFC 2822 timestamp taken when the message was built
    pub date: String,
}

impl Message {
    /// Address a digest. The date header is taken from the local clock.
    pub fn new(envelope: Envelope, digest: &Digest) -> Self {
        Self {
            envelope,
            body: digest.body.clone(),
            content_type: digest.content_type,
            date: chrono::Local::now().to_rfc2822(),
        }
    }

    /// Recipient address, or an error naming what is missing.
    pub fn recipient(&self) -> Result<&str, DeliveryError> {
        self.envelope
            .recipient
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .ok_or(DeliveryError::MissingAddress("recipient"))
    }

    /// Render headers and body as an RFC 822 style message.
    ///
    /// Missing addresses are left out of the headers. Line breaks inside
    /// header values collapse to a single space so a value can never start
    /// a new header.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(sender) = &self.envelope.sender {
            out.push_str(&format!("From: {}\n", header_value(sender)));
        }
        if let Some(recipient) = &self.envelope.recipient {
            out.push_str(&format!("To: {}\n", header_value(recipient)));
        }
        out.push_str(&format!(
            "Subject: {}\n",
            header_value(&self.envelope.subject)
        ));
        out.push_str(&format!("Date: {}\n", self.date));
        out.push_str("MIME-Version: 1.0\n");
        out.push_str(&format!("Content-Type: {}\n", self.content_type.mime()));
        out.push('\n');
        out.push_str(&self.body);
        if !self.body.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

/// Header value on a single line.
fn header_value(value: &str) -> String {
    value
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
