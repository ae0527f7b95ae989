//! Tasreeh CLI - roster import and clearance document rendering
//!
//! Command-line front end over the import pipeline and document assembler:
//! import roster files, write import templates, render an application
//! record to the printable HTML document, and emit the QR summary payload.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tasreeh_core::{
    assemble, ApplicationRecord, HtmlSerializer, JsonOptions, JsonSerializer, QrSummary,
    TableImports, TableType,
};
use tasreeh_import::{template_csv, TableImporter};

#[derive(Parser)]
#[command(
    name = "tasreeh",
    version,
    about = "Security-clearance application roster import and document rendering",
    long_about = "Imports roster spreadsheets (CSV/XLSX/XLS), validates and normalizes them \
                  against the declared table kind, and renders an application record into the \
                  printable multi-page bilingual document set."
)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a roster file and print the normalized rows
    Import {
        /// Roster file (.csv, .xlsx or .xls)
        input: PathBuf,

        /// Table kind the file is declared against
        #[arg(short, long, value_parser = parse_table_type)]
        table: TableType,

        /// Emit normalized rows as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Write a table kind's CSV import template
    Template {
        /// Table kind to generate the template for
        #[arg(value_parser = parse_table_type)]
        table: TableType,

        /// Directory to write the template into (default: current)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Render an application record JSON to the printable HTML document
    Render {
        /// Application record JSON file
        record: PathBuf,

        /// Optional roster imports JSON file (overrides the record's
        /// static rosters)
        #[arg(long)]
        imports: Option<PathBuf>,

        /// Output HTML file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit the assembled page list as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Print the QR summary payload for an application record
    Qr {
        /// Application record JSON file
        record: PathBuf,
    },
}

fn parse_table_type(s: &str) -> std::result::Result<TableType, String> {
    s.parse()
}

fn read_record(path: &PathBuf) -> Result<ApplicationRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid application record in {}", path.display()))
}

fn cmd_import(input: &PathBuf, table: TableType, json: bool) -> Result<()> {
    let result = TableImporter::new()
        .import_file(input, table)
        .with_context(|| format!("Import of {} failed", input.display()))?;

    for warning in &result.validation.warnings {
        eprintln!("warning: {warning}");
    }
    if !result.validation.is_valid {
        for error in &result.validation.errors {
            eprintln!("error: {error}");
        }
        anyhow::bail!("Validation failed for {}", input.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result.rows)?);
    } else {
        println!(
            "Imported {} {} rows from {} ({} warnings)",
            result.row_count,
            table,
            input.display(),
            result.validation.warnings.len()
        );
    }
    Ok(())
}

fn cmd_template(table: TableType, out_dir: Option<PathBuf>) -> Result<()> {
    let dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(table.template_filename());
    fs::write(&path, template_csv(table))
        .with_context(|| format!("Failed to write template {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn cmd_render(
    record_path: &PathBuf,
    imports_path: Option<&PathBuf>,
    output: Option<&PathBuf>,
    json: bool,
) -> Result<()> {
    let mut record = read_record(record_path)?;

    if let Some(path) = imports_path {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read imports file {}", path.display()))?;
        let imports: TableImports = serde_json::from_str(&content)
            .with_context(|| format!("Invalid imports in {}", path.display()))?;
        record.apply_imports(&imports);
    }

    let pages = assemble(&record);
    let rendered = if json {
        JsonSerializer::with_options(JsonOptions { pretty: true }).serialize_document(&pages)?
    } else {
        HtmlSerializer::new().serialize_document(&pages)
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} pages to {}", pages.len(), path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn cmd_qr(record_path: &PathBuf) -> Result<()> {
    let record = read_record(record_path)?;
    println!("{}", QrSummary::from_record(&record).to_json()?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Import { input, table, json } => cmd_import(&input, table, json),
        Commands::Template { table, out_dir } => cmd_template(table, out_dir),
        Commands::Render {
            record,
            imports,
            output,
            json,
        } => cmd_render(&record, imports.as_ref(), output.as_ref(), json),
        Commands::Qr { record } => cmd_qr(&record),
    }
}
