use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};

use learning_clusters::{
    ClusterKey, ContentKind, cluster_definitions,
    config::{Cli, Command, OutputFormat},
    format_counts,
    inventory::{InputSource, load_inventory, load_items},
    observability, summarise,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifiedItem<'a> {
    index: usize,
    kind: ContentKind,
    cluster: ClusterKey,
    label: &'a str,
    badge: &'a str,
}

fn main() -> anyhow::Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        let message = panic_info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| {
                panic_info
                    .payload()
                    .downcast_ref::<String>()
                    .map(String::as_str)
            })
            .unwrap_or("unknown panic payload");

        if let Some(location) = panic_info.location() {
            error!(
                file = location.file(),
                line = location.line(),
                column = location.column(),
                message,
                "panic occurred"
            );
        } else {
            error!(message, "panic occurred without location information");
        }
    }));

    let cli = Cli::parse();
    observability::init_tracing(cli.log_level, cli.log_format)
        .context("failed to initialize tracing")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Clusters => {
            serde_json::to_writer_pretty(&mut out, cluster_definitions())
                .context("failed to write cluster definitions")?;
        }
        Command::Classify { kind, input } => {
            let source = InputSource::from_arg(input.as_deref());
            let items = load_items(&source).context("failed to load items")?;
            info!(kind = kind.as_str(), items = items.len(), "classifying items");

            let classified: Vec<ClassifiedItem<'_>> = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let cluster = kind.classify(item);
                    ClassifiedItem {
                        index,
                        kind,
                        cluster: cluster.key,
                        label: cluster.label,
                        badge: cluster.badge,
                    }
                })
                .collect();
            serde_json::to_writer_pretty(&mut out, &classified)
                .context("failed to write classification")?;
        }
        Command::Summarise { input, format } => {
            let source = InputSource::from_arg(input.as_deref());
            let inventory = load_inventory(&source).context("failed to load inventory")?;
            let summary = summarise(&inventory);
            info!(total = summary.total, "inventory summarised");

            match format {
                OutputFormat::Json => serde_json::to_writer_pretty(&mut out, &summary)
                    .context("failed to write summary")?,
                OutputFormat::Text => {
                    for entry in &summary.clusters {
                        writeln!(out, "{}: {}", entry.label, format_counts(&entry.counts))
                            .context("failed to write summary")?;
                    }
                    write!(out, "Total: {}", format_counts(&summary.totals))
                        .context("failed to write summary")?;
                }
            }
        }
    }

    writeln!(out).context("failed to write output")?;
    Ok(())
}
