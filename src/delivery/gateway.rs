//! Gateway trait.

use super::error::DeliveryError;
use super::message::Message;
use super::result::{DeliveryMethod, Receipt};

/// Something that can take a finished message out of the process.
///
/// Gateways report failures but never retry.
pub trait Gateway {
    /// The method identifier for this gateway.
    fn method(&self) -> DeliveryMethod;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Deliver one message.
    fn deliver(&self, message: &Message) -> Result<Receipt, DeliveryError>;
}
