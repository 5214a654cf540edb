//! Client for the Sendinblue transactional email API (`POST /v3/smtp/email`).
//!
//! ```no_run
//! use sendinblue::{Address, Attachment, Message};
//!
//! # async fn run() -> Result<(), sendinblue::Error> {
//! let message = Message::new(Address::new("Vaulty", "noreply@vaulty.net"))
//!     .with_to(Address::new("Bob", "bob@example.com"))
//!     .with_subject("Your report")
//!     .with_text_content("See attached.")
//!     .with_attachment(Attachment::inline_file("report.pdf")?);
//!
//! message.send("xkeysib-...").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod attachment;
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod transport;

pub use attachment::Attachment;
pub use client::Client;
pub use crate::config::{load_config, ClientConfig};
pub use error::Error;
pub use message::{Address, Message};
pub use transport::{HttpTransport, Transport};
