//! External mail command gateway.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use crate::delivery::error::DeliveryError;
use crate::delivery::gateway::Gateway;
use crate::delivery::message::Message;
use crate::delivery::result::{DeliveryMethod, Receipt};

/// Pipes the full message into a mail program's stdin.
///
/// The program is expected to read addresses from the headers, the way
/// `sendmail -t` does. A non-zero exit status is reported with its code
/// and stderr, even when the program exits before reading all of stdin.
pub struct CommandGateway {
    program: String,
    args: Vec<String>,
}

impl CommandGateway {
    /// Create from a program and its arguments.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Create from an argv-style list, e.g. `["sendmail", "-t"]`.
    pub fn from_argv(argv: &[String]) -> Result<Self, DeliveryError> {
        let (program, args) = argv.split_first().ok_or(DeliveryError::NoCommand)?;
        if program.trim().is_empty() {
            return Err(DeliveryError::NoCommand);
        }
        Ok(Self::new(program.clone(), args.to_vec()))
    }

    /// Program name.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Gateway for CommandGateway {
    fn method(&self) -> DeliveryMethod {
        DeliveryMethod::Command
    }

    fn deliver(&self, message: &Message) -> Result<Receipt, DeliveryError> {
        let recipient = message.recipient()?.to_string();

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| DeliveryError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Write from a separate thread so stderr is drained while stdin fills
        let writer = child.stdin.take().map(|mut stdin| {
            let payload = message.render();
            thread::spawn(move || stdin.write_all(payload.as_bytes()))
        });

        let output = child.wait_with_output()?;
        let written = match writer {
            Some(handle) => handle
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked"))),
            None => Ok(()),
        };

        if !output.status.success() {
            return Err(DeliveryError::Rejected {
                program: self.program.clone(),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        // Exited cleanly without taking the whole message
        written?;

        tracing::info!(program = %self.program, %recipient, "mail command accepted digest");
        Ok(Receipt::Sent {
            program: self.program.clone(),
            recipient,
        })
    }
}
