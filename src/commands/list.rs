//! List subcommand handler

use anyhow::Result;

use remind::cli::ListArgs;
use remind::clippings::{minimal, structured, Clipping, DELIMITER};
use remind::{pipeline, Config, Variant};

use super::{apply_source_args, clippings_path};

/// Print every record in the export.
#[cfg(not(tarpaulin_include))]
pub fn handle(mut config: Config, args: &ListArgs) -> Result<()> {
    apply_source_args(&mut config, &args.source);

    let path = clippings_path(&config)?;
    tracing::info!(
        path = %path.display(),
        variant = config.clippings.variant.name(),
        "reading clippings"
    );
    let export = pipeline::read_export(&path)?;

    let output = match config.clippings.variant {
        Variant::Minimal => {
            let notes = minimal::extract(&export);
            if args.json {
                serde_json::to_string_pretty(&notes)?
            } else {
                format_notes(&notes)
            }
        }
        Variant::Structured => {
            let clippings = structured::extract_with(&export, config.clippings.on_malformed)?;
            if args.json {
                serde_json::to_string_pretty(&clippings)?
            } else {
                format_clippings(&clippings)
            }
        }
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Notes in export layout, each followed by a delimiter line.
fn format_notes(notes: &[String]) -> String {
    notes
        .iter()
        .map(|note| format!("{}\n{}", note, DELIMITER))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One numbered block per clipping.
fn format_clippings(clippings: &[Clipping]) -> String {
    clippings
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "{}. {} ({}), page {}, added {}\n   {}",
                i + 1,
                c.title().trim(),
                c.author(),
                c.page(),
                c.when(),
                c.highlight()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
