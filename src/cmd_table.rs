//! Table subcommand handlers for Tablescope.

use serde::Serialize;
use tracing::{debug, info};

use tablescope_config::{Config, OutputFormat};
use tablescope_core::{ExtractOptions, TableView};
use tablescope_dom::HtmlDocument;

use crate::cli::{Commands, FormatArg, TableArgs, truncation_from_config};
use crate::render;

/// Handle table subcommands.
pub(crate) fn handle_command(
    command: Commands,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Info { table, format } => table_info(&table, output(format, config), config),
        Commands::Extract {
            table,
            depth,
            truncation,
            format,
        } => {
            let options = ExtractOptions::with_depth(depth.unwrap_or(config.extract.max_depth))
                .truncation(
                    truncation
                        .map(Into::into)
                        .unwrap_or_else(|| truncation_from_config(config.extract.truncation)),
                )
                .ancestor_limit(config.extract.ancestor_limit);
            table_extract(&table, &options, output(format, config), config)
        }
        Commands::Row {
            table,
            index,
            format,
        } => table_row(&table, index, output(format, config), config),
        Commands::Column {
            table,
            index,
            format,
        } => table_column(&table, index, output(format, config), config),
        Commands::Bodies { table, format } => table_bodies(&table, output(format, config), config),
    }
}

fn output(format: Option<FormatArg>, config: &Config) -> OutputFormat {
    format.map(Into::into).unwrap_or(config.output.format)
}

fn open(args: &TableArgs) -> Result<HtmlDocument, Box<dyn std::error::Error>> {
    let doc = HtmlDocument::load(&args.file)?;
    info!("Loaded {}", args.file.display());
    Ok(doc)
}

fn print_json<T: Serialize + ?Sized>(
    value: &T,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render::to_json(value, config.output.pretty)?);
    Ok(())
}

/// Print row and column counts.
fn table_info(
    args: &TableArgs,
    format: OutputFormat,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = open(args)?;
    let table = TableView::new(&doc, args.locator());
    let summary = table.summary()?;

    match format {
        OutputFormat::Json => print_json(&summary, config),
        OutputFormat::Text => {
            println!("{}", summary);
            Ok(())
        }
    }
}

/// Print the depth-limited snapshot of the table.
fn table_extract(
    args: &TableArgs,
    options: &ExtractOptions,
    format: OutputFormat,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = open(args)?;
    let table = TableView::new(&doc, args.locator());
    debug!("Extracting {} with {:?}", table.locator(), options);
    let rows = table.extract(options)?;

    match format {
        OutputFormat::Json => print_json(&rows, config),
        OutputFormat::Text => {
            if !rows.is_empty() {
                println!("{}", render::rows_to_text(&rows));
            }
            Ok(())
        }
    }
}

fn table_row(
    args: &TableArgs,
    index: usize,
    format: OutputFormat,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = open(args)?;
    let values = TableView::new(&doc, args.locator()).row_values(index)?;

    match format {
        OutputFormat::Json => print_json(&values, config),
        OutputFormat::Text => {
            println!("{}", values.join(" | "));
            Ok(())
        }
    }
}

fn table_column(
    args: &TableArgs,
    index: usize,
    format: OutputFormat,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = open(args)?;
    let values = TableView::new(&doc, args.locator()).column_values(index)?;

    match format {
        OutputFormat::Json => print_json(&values, config),
        OutputFormat::Text => {
            for value in values {
                println!("{}", value);
            }
            Ok(())
        }
    }
}

#[derive(Debug, Serialize)]
struct BodyInfo {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    rows: usize,
}

/// List bodies with their row counts.
fn table_bodies(
    args: &TableArgs,
    format: OutputFormat,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = open(args)?;
    let table = TableView::new(&doc, args.locator());
    let bodies: Vec<BodyInfo> = table
        .bodies()?
        .iter()?
        .enumerate()
        .map(|(index, body)| BodyInfo {
            index,
            id: body.node().and_then(|node| doc.attr(*node, "id")),
            rows: body.len(),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&bodies, config),
        OutputFormat::Text => {
            if bodies.is_empty() {
                println!("No bodies found.");
                return Ok(());
            }
            println!("{:<6} {:<20} {}", "BODY", "ID", "ROWS");
            println!("{}", "-".repeat(34));
            for body in &bodies {
                println!(
                    "{:<6} {:<20} {}",
                    body.index,
                    body.id.as_deref().unwrap_or("-"),
                    body.rows
                );
            }
            Ok(())
        }
    }
}
