//! Send subcommand handler

use anyhow::{Context, Result};

use remind::cli::SendArgs;
use remind::delivery::gateways;
use remind::pipeline::{self, Layout};
use remind::{Config, JinjaRenderer, Sampler, Variant};

use super::{apply_source_args, clippings_path};

/// Read the export, build a digest and deliver it.
///
/// Nothing is delivered unless every step before delivery succeeds.
#[cfg(not(tarpaulin_include))]
pub fn handle(mut config: Config, args: &SendArgs) -> Result<()> {
    apply_send_args(&mut config, args);

    let path = clippings_path(&config)?;
    tracing::info!(
        path = %path.display(),
        variant = config.clippings.variant.name(),
        "reading clippings"
    );
    let export = pipeline::read_export(&path)?;

    let renderer = match (&config.clippings.variant, &config.digest.template) {
        (Variant::Structured, Some(template)) => JinjaRenderer::from_file(template)
            .with_context(|| format!("Cannot use template {}", template.display()))?,
        (Variant::Minimal, Some(template)) => {
            tracing::warn!(
                template = %template.display(),
                "template ignored: only the structured variant renders templates"
            );
            JinjaRenderer::builtin()
        }
        (_, None) => JinjaRenderer::builtin(),
    };

    let layout = match config.clippings.variant {
        Variant::Minimal => Layout::Minimal,
        Variant::Structured => Layout::Structured {
            renderer: &renderer,
            on_malformed: config.clippings.on_malformed,
        },
    };

    let mut sampler = match args.seed {
        Some(seed) => Sampler::seeded(seed),
        None => Sampler::from_clock(),
    };

    let digest = pipeline::compose(&export, &layout, config.digest.count, &mut sampler)?;

    let delivery = &config.delivery;
    let gateway = gateways::for_method(
        delivery.method,
        delivery.output.as_deref(),
        &delivery.command,
    )?;
    let receipt = pipeline::deliver(&digest, delivery.envelope(), gateway.as_ref())?;

    if let Some(message) = receipt.message() {
        println!("{}", message);
    }
    Ok(())
}

/// Apply send flags to the loaded config.
fn apply_send_args(config: &mut Config, args: &SendArgs) {
    apply_source_args(config, &args.source);

    if let Some(count) = args.count {
        config.digest.count = count;
    }
    if let Some(template) = &args.template {
        config.digest.template = Some(template.clone());
    }

    let delivery = &mut config.delivery;
    if let Some(method) = args.via {
        delivery.method = method;
    }
    if let Some(output) = &args.output {
        delivery.output = Some(output.clone());
    }
    if let Some(from) = &args.from {
        delivery.sender = Some(from.clone());
    }
    if let Some(to) = &args.to {
        delivery.recipient = Some(to.clone());
    }
    if let Some(subject) = &args.subject {
        delivery.subject = subject.clone();
    }
}
