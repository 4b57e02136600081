//! Command line tool to extract SWMM blocks as JSON
//!
//! Pulls one named block out of a SWMM report, input, interface, or LSPC
//! summary file and prints it to stdout as JSON.
//!
//! # Usage
//!
//! ```text
//! Usage: block2json <file> [options]
//! ```
//!
//! Help is printed with the `-h` flag, and `--help` will show examples,
//! default values, and any important behaviour.
//!
//! ## Options
//!
//! By default the file format is guessed from the extension (`.rpt`, `.inp`,
//! `.out`, anything else is treated as an interface file).
//!
//! ### > How to choose the block
//!
//! Use the `--block` option with a block name from the catalog. `--list`
//! prints every name the chosen format supports.
//!
//! ```bash
//! # Extract the node depth summary from a report file
//! block2json model.rpt --block node_depth_results
//!
//! # See what an input file can offer
//! block2json model.inp --list
//! ```
//!
//! ### > How to force the format
//!
//! Use `--format` when the extension is misleading.
//!
//! ```bash
//! block2json results.txt --format interface
//! ```

// internal modules
use swmmtab::utils::f;
use swmmtab::{InpReader, InterfaceReader, LspcSummaryReader, ReportReader, Table};

// external crates
use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::*;

#[doc(hidden)]
fn main() -> Result<()> {
    // set up the command line interface and match arguments
    let cli: Cli = Cli::parse();

    // set up logging (+2 to make 'Info' the default)
    let verbosity = cli.verbose as usize + 2;
    logging_init(verbosity, cli.quiet);

    let format = cli.format.unwrap_or_else(|| guess_format(&cli.file));
    debug!("Treating \"{}\" as a {format:?} file", cli.file);

    if cli.list {
        list_blocks(format);
        return Ok(());
    }

    let block = cli
        .block
        .as_deref()
        .ok_or_else(|| anyhow!("a --block name is required unless --list is given"))?;

    info!("Extracting {block:?} from \"{}\"", cli.file);
    let table = extract(&cli.file, format, block)?;

    let json = match cli.pretty {
        true => serde_json::to_string_pretty(&table)?,
        false => serde_json::to_string(&table)?,
    };
    println!("{json}");
    Ok(())
}

/// Extract a named block from a SWMM text file as JSON
///
/// The file format is guessed from the extension unless --format is
/// given. Use --list to print the block names the format supports.
///
/// Examples
/// --------
///
///  Typical use
///     $ block2json model.rpt --block node_depth_results
///
///  Pretty-printed output
///     $ block2json model.inp --block junctions --pretty
///
///  Discover available blocks
///     $ block2json model.rpt --list
///
#[doc(hidden)]
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner()),
    after_help("Typical use: block2json model.rpt --block node_depth_results\n\nNOTE: --help shows more detail and examples"),
    term_width(70),
    hide_possible_values(true),
    override_usage("block2json <file> [options]")
)]
struct Cli {
    // * Positional
    /// Path to input SWMM text file
    #[arg(name = "file")]
    file: String,

    /// Name of the block to extract
    #[arg(help_heading("Block options"))]
    #[arg(short, long)]
    #[arg(value_name = "name")]
    block: Option<String>,

    /// File format (guessed from the extension by default)
    #[arg(help_heading("Block options"))]
    #[arg(short, long)]
    #[arg(value_enum, value_name = "format")]
    format: Option<Format>,

    /// List the blocks the format supports
    #[arg(help_heading("Block options"))]
    #[arg(short, long)]
    list: bool,

    /// Pretty-print the JSON output
    #[arg(help_heading("Block options"))]
    #[arg(short, long)]
    pretty: bool,

    // * Flags
    /// Verbose logging (-v, -vv)
    ///
    /// If specified, the default log level of INFO is increased to DEBUG
    /// (-v) or TRACE (-vv). Errors and Warnings are always logged unless in
    /// quiet (-q) mode.
    #[arg(short, long)]
    #[arg(action = clap::ArgAction::Count)]
    verbose: u8,

    /// Supress all log output (overrules --verbose)
    #[arg(short, long)]
    quiet: bool,
}

/// Recognised file formats
#[doc(hidden)]
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// SWMM report file
    Report,
    /// SWMM input file
    Input,
    /// SWMM routing interface file
    Interface,
    /// LSPC summary file
    Lspc,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Sets up logging at runtime to allow for multiple verbosity levels
#[doc(hidden)]
fn logging_init(verbosity: usize, quiet: bool) {
    stderrlog::new()
        .modules(vec![module_path!()])
        .quiet(quiet)
        .verbosity(verbosity)
        .show_level(false)
        .color(stderrlog::ColorChoice::Never)
        .timestamp(stderrlog::Timestamp::Off)
        .init()
        .unwrap();
}

/// Creates a banner fot the command line
#[doc(hidden)]
fn banner() -> String {
    let mut s = f!("{:-<1$}\n", "", 70);
    s += &f!("{:^70}\n", "Swmmtab :: Block2Json");
    s += &f!("{:-<1$}", "", 70);
    s
}

#[doc(hidden)]
/// Fall back on the file extension when no format is forced
fn guess_format(file: &str) -> Format {
    let extension = file.rsplit('.').next().unwrap_or_default().to_lowercase();
    match extension.as_str() {
        "rpt" => Format::Report,
        "inp" => Format::Input,
        "out" => Format::Lspc,
        _ => Format::Interface,
    }
}

#[doc(hidden)]
/// Print the block names the chosen format supports
fn list_blocks(format: Format) {
    match format {
        Format::Report => ReportReader::block_names().for_each(|name| println!("{name}")),
        Format::Input => InpReader::card_names().for_each(|name| println!("{name}")),
        Format::Interface => println!("table"),
        Format::Lspc => println!("variables"),
    }
}

#[doc(hidden)]
/// Dispatch the extraction to the reader for the format
fn extract(file: &str, format: Format, block: &str) -> Result<Table> {
    let table = match format {
        Format::Report => {
            let mut reader = ReportReader::from_path(file)?;
            reader.table(block).cloned()
        }
        Format::Input => {
            let mut reader = InpReader::from_path(file)?;
            reader.table(block).cloned()
        }
        Format::Interface => {
            let mut reader = InterfaceReader::from_path(file)?;
            reader.table().cloned()
        }
        Format::Lspc => {
            let mut reader = LspcSummaryReader::from_path(file)?;
            reader.variables().cloned()
        }
    };
    table.with_context(|| f!("Could not extract {block:?} from \"{file}\""))
}
