//! Delivery of finished digests.
//!
//! The [`Gateway`] trait is the seam between the digest pipeline and
//! whatever moves text out of the process. Implementations live in
//! [`gateways`]; none of them speaks a mail protocol itself.

mod error;
mod gateway;
pub mod gateways;
mod message;
mod result;

pub use error::DeliveryError;
pub use gateway::Gateway;
pub use message::{Envelope, Message, DEFAULT_SUBJECT};
pub use result::{DeliveryMethod, Receipt};
