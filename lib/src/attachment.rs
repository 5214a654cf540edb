use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::write::EncoderStringWriter;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Represents a single email attachment.
///
/// Attachment can either carry the full content inline, as Base64 text,
/// or a URL that Sendinblue fetches the content from. Never set both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    /// Filename shown to the recipient
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Standard Base64 (padded) encoding of the attachment bytes
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
}

impl Attachment {
    /// Build an inline attachment from a byte-wise reader.
    ///
    /// The reader is drained to EOF and its bytes stored as a Base64 string.
    /// Nothing is returned if the reader fails part way through. Closing the
    /// source stays with the caller.
    pub fn inline<R: Read>(name: impl Into<String>, mut reader: R) -> Result<Self, Error> {
        let name = name.into();
        let mut enc = EncoderStringWriter::new(&STANDARD);

        let size = io::copy(&mut reader, &mut enc).map_err(|e| {
            log::error!("Failed to read attachment {}: {}", name, e);
            Error::Read(e)
        })?;

        log::debug!("Encoded attachment {} ({} bytes)", name, size);

        Ok(Self {
            name,
            url: String::new(),
            content: enc.into_inner(),
        })
    }

    /// Inline the file at `path`, named after its last path component.
    pub fn inline_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => {
                return Err(Error::Read(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("no filename in {}", path.display()),
                )))
            }
        };

        // File is closed when it goes out of scope, on error too
        let file = File::open(path)?;
        Self::inline(name, file)
    }

    /// Attachment whose content Sendinblue downloads from `url`.
    pub fn from_url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            content: String::new(),
        }
    }
}
