//! Sendinblue v3 API constants and response handling.
use reqwest::StatusCode;

use crate::transport::Response;
use crate::Error;

pub const SENDINBLUE_SMTP_EMAIL: &str = "https://api.sendinblue.com/v3/smtp/email";
pub const API_KEY_HEADER: &str = "api-key";

// Request timeout, in seconds
pub(crate) const SENDINBLUE_REQUEST_TIMEOUT: u64 = 30;

/// Map a send response to a result.
///
/// Only 201 Created counts as success; other 2xx codes are rejections
/// too. The body is dropped unread either way.
pub fn map_status(resp: Response) -> Result<(), Error> {
    let Response { status, reason, body } = resp;

    log::debug!("Sendinblue responded {} ({} byte body)", status, body.len());

    if status == StatusCode::CREATED {
        Ok(())
    } else {
        Err(Error::Rejected { status, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bytes::Bytes;

    fn response(status: StatusCode) -> Response {
        Response {
            status,
            reason: status.canonical_reason().unwrap_or("").to_string(),
            body: Bytes::from_static(b"{\"messageId\":\"<abc@smtp-relay.mailin.fr>\"}"),
        }
    }

    #[test]
    fn test_created_is_success() {
        assert!(map_status(response(StatusCode::CREATED)).is_ok());
    }

    #[test]
    fn test_other_success_codes_rejected() {
        for status in &[StatusCode::OK, StatusCode::ACCEPTED, StatusCode::NO_CONTENT] {
            match map_status(response(*status)) {
                Err(Error::Rejected { status: s, .. }) => assert_eq!(s, *status),
                other => panic!("expected rejection for {}, got {:?}", status, other),
            }
        }
    }

    #[test]
    fn test_rejection_carries_reason() {
        let err = map_status(response(StatusCode::UNAUTHORIZED)).unwrap_err();

        assert_eq!(err.to_string(), "send failed: 401 Unauthorized");
    }
}
