//! Standard output gateway.

use std::io::{self, Write};

use crate::delivery::error::DeliveryError;
use crate::delivery::gateway::Gateway;
use crate::delivery::message::Message;
use crate::delivery::result::{DeliveryMethod, Receipt};

/// Prints the digest body, without headers.
pub struct StdoutGateway;

impl StdoutGateway {
    /// Create a new stdout gateway.
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl Gateway for StdoutGateway {
    fn method(&self) -> DeliveryMethod {
        DeliveryMethod::Stdout
    }

    fn deliver(&self, message: &Message) -> Result<Receipt, DeliveryError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(message.body.as_bytes())?;
        if !message.body.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
        Ok(Receipt::Printed)
    }
}
