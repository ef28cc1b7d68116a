//! Gateway implementations.

mod command;
mod file;
mod stdout;

pub use command::CommandGateway;
pub use file::FileGateway;
pub use stdout::StdoutGateway;

use std::path::Path;

use super::error::DeliveryError;
use super::gateway::Gateway;
use super::result::DeliveryMethod;

/// Build the gateway for a delivery method.
///
/// `output` is required for [`DeliveryMethod::File`], `command` for
/// [`DeliveryMethod::Command`].
pub fn for_method(
    method: DeliveryMethod,
    output: Option<&Path>,
    command: &[String],
) -> Result<Box<dyn Gateway>, DeliveryError> {
    match method {
        DeliveryMethod::Stdout => Ok(Box::new(StdoutGateway::new())),
        DeliveryMethod::File => {
            let path = output.ok_or(DeliveryError::MissingOutput)?;
            Ok(Box::new(FileGateway::new(path)))
        }
        DeliveryMethod::Command => Ok(Box::new(CommandGateway::from_argv(command)?)),
    }
}
