//! remind - random highlights from e-reader clippings
//!
//! Parses a plain-text clippings export into records, samples a few of them
//! without replacement and turns them into a digest ready for delivery.
//!
//! ```no_run
//! use remind::clippings::minimal;
//! use remind::digest;
//! use remind::Sampler;
//!
//! let export = "==========\nQuote 1\n==========\nQuote 2\n";
//! let notes = minimal::extract(export);
//! let picked = Sampler::from_clock().sample(notes, 1)?;
//! println!("{}", digest::join_notes(&picked));
//! # Ok::<(), remind::SampleError>(())
//! ```

pub mod cli;
pub mod clippings;
pub mod config;
pub mod delivery;
pub mod digest;
pub mod logging;
pub mod pipeline;
pub mod sampler;

pub use clippings::{Clipping, FieldExtractionError, OnMalformed, Variant};
pub use config::Config;
pub use digest::{Digest, JinjaRenderer, Renderer};
pub use pipeline::{Layout, PipelineError};
pub use sampler::{SampleError, Sampler};
