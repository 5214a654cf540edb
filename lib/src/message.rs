use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;

/// A display name plus an email address.
///
/// Neither field is validated here; Sendinblue rejects bad addresses when
/// the message is sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub name: String,
    pub email: String,
}

impl Address {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Describes an email message which should be sent.
///
/// Optional fields are left out of the JSON body when they are empty (or
/// `None`) rather than being sent as `[]`, `""` or `null`. Only `sender` is
/// always present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    /// Entity the email originates from
    pub sender: Address,

    /// Primary recipients
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<Address>,

    /// Blind carbon copy, not disclosed to other recipients
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<Address>,

    /// Carbon copy
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<Address>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub html_content: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub text_content: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub subject: String,

    /// Replies to this email go here instead of to `sender`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Address>,

    // NOTE: The API calls this "attachment" even though it takes a list
    #[serde(rename = "attachment", skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    /// Custom email headers
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,

    /// Take the content from this Sendinblue template instead of
    /// `html_content` / `text_content`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,

    /// Values used to populate the template
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, String>,

    /// Organizational labels, not interpreted by this crate
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Message {
    pub fn new(sender: Address) -> Self {
        Self {
            sender,
            ..Default::default()
        }
    }

    pub fn with_to(mut self, to: Address) -> Self {
        self.to.push(to);
        self
    }

    pub fn with_cc(mut self, cc: Address) -> Self {
        self.cc.push(cc);
        self
    }

    pub fn with_bcc(mut self, bcc: Address) -> Self {
        self.bcc.push(bcc);
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_text_content(mut self, text: impl Into<String>) -> Self {
        self.text_content = text.into();
        self
    }

    pub fn with_html_content(mut self, html: impl Into<String>) -> Self {
        self.html_content = html.into();
        self
    }

    pub fn with_reply_to(mut self, reply_to: Address) -> Self {
        self.reply_to = Some(reply_to);
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Source the content from a provider-side template.
    pub fn with_template(mut self, template_id: i64) -> Self {
        self.template_id = Some(template_id);
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Serialize into the JSON body expected by `/v3/smtp/email`.
    pub fn to_json(&self) -> Result<Vec<u8>, crate::Error> {
        serde_json::to_vec(self).map_err(|e| e.into())
    }
}
