//! Command line tool to check SWMM input file coverage
//!
//! Scans an input file and reports which section cards are present and
//! parseable, which are present but unmapped by the catalog, and which
//! catalogued cards the file does not carry.
//!
//! # Usage
//!
//! ```text
//! Usage: inpcheck <file> [options]
//! ```
//!
//! Help is printed with the `-h` flag.
//!
//! ## Options
//!
//! By default only the unmapped tags are interesting enough to warn about.
//! Use `--all` to print every category.
//!
//! ```bash
//! # Warn about any section the catalog cannot parse
//! inpcheck model.inp
//!
//! # Full coverage report
//! inpcheck model.inp --all
//! ```

// internal modules
use swmmtab::utils::f;
use swmmtab::InpReader;

// external crates
use anyhow::Result;
use clap::Parser;
use log::*;

#[doc(hidden)]
fn main() -> Result<()> {
    // set up the command line interface and match arguments
    let cli: Cli = Cli::parse();

    // set up logging (+2 to make 'Info' the default)
    let verbosity = cli.verbose as usize + 2;
    logging_init(verbosity, cli.quiet);

    info!("Checking \"{}\"", cli.file);
    let inp = InpReader::from_path(&cli.file)?;

    if cli.all {
        println!("sections present:");
        inp.tags_in_file().iter().for_each(|tag| println!("  {tag}"));
        println!("catalogued but absent:");
        inp.missing_cards().iter().for_each(|tag| println!("  {tag}"));
    }

    if inp.unmapped_tags().is_empty() {
        info!("All sections in the file are mapped");
    } else {
        println!("unmapped sections:");
        inp.unmapped_tags().iter().for_each(|tag| println!("  {tag}"));
        warn!(
            "{} section(s) cannot be parsed by the catalog",
            inp.unmapped_tags().len()
        );
    }

    Ok(())
}

/// Report input file section coverage
///
/// Lists the section tags found in the file that the catalog has no
/// descriptor for. Use --all to also print the sections present and the
/// catalogued cards the file lacks.
///
/// Examples
/// --------
///
///  Typical use
///     $ inpcheck model.inp
///
///  Full coverage report
///     $ inpcheck model.inp --all
///
#[doc(hidden)]
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner()),
    after_help("Typical use: inpcheck model.inp\n\nNOTE: --help shows more detail and examples"),
    term_width(70),
    override_usage("inpcheck <file> [options]")
)]
struct Cli {
    // * Positional
    /// Path to input SWMM .inp file
    #[arg(name = "file")]
    file: String,

    /// Print every coverage category, not just unmapped tags
    #[arg(help_heading("Check options"))]
    #[arg(short, long)]
    all: bool,

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
    s += &f!("{:^70}\n", "Swmmtab :: InpCheck");
    s += &f!("{:-<1$}", "", 70);
    s
}
