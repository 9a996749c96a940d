//! wikt-inflect CLI - Extract inflection tables from Wiktionary HTML

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use wikt_inflect::{
    build_grid,
    diagnostics::format_diagnostics,
    export::{export, ExportFormat},
    extract_inflections,
    sections::{extract_section, normalize_section_heading},
    table::{CellClassifier, TableSelector},
    Diagnostics, ExtractError, ExtractOptions, ExtractOutput, ExtractResult, HtmlDocument,
    InflectionTable, RowVariant, SimpleValues,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "wikt-inflect")]
#[command(version)]
#[command(about = "Extract structured inflection tables from Wiktionary HTML", long_about = None)]
struct Cli {
    /// Input HTML file (reads from stdin if not provided)
    input_file: Option<String>,

    /// Language of the table, as used in entry links (e.g. "German", "Old English")
    #[arg(short, long)]
    language: String,

    /// Only output the table if its first form is this word
    #[arg(short, long)]
    word: Option<String>,

    /// Section heading the input was found under; non-inflection sections yield nothing
    #[arg(long)]
    heading: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Print the reconstructed coordinate grid instead of the table
    #[arg(long)]
    grid: bool,

    /// Read every row, ignoring the collapsed layout marker
    #[arg(long)]
    all_rows: bool,

    /// Extraction options file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Strict mode: exit with error if any extraction warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress diagnostic output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Nested JSON object
    Json,
    /// Nested YAML mapping
    Yaml,
    /// column,row,value records
    Csv,
    /// Sorted indented listing
    Text,
    /// Forms only, one per line
    Simple,
}

#[cfg(feature = "cli")]
impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Yaml => ExportFormat::Yaml,
            Format::Csv => ExportFormat::Csv,
            Format::Text => ExportFormat::Text,
            Format::Simple => ExportFormat::Simple,
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(2);
        }
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> ExtractResult<i32> {
    if cli.language.trim().is_empty() {
        return Err(ExtractError::invalid("language must not be empty"));
    }

    let options = load_options(cli)?;
    let use_color = !cli.no_color;

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let doc = HtmlDocument::parse_auto(&input);

    if cli.grid {
        let classifier = CellClassifier::new(&cli.language, &options);
        let mut diagnostics = Diagnostics::new();
        let selection = TableSelector::new(&classifier).select(&doc.root(), &mut diagnostics);
        let (grid, grid_diagnostics) = build_grid(&selection.node, &cli.language, &options);
        diagnostics.extend(grid_diagnostics);
        report(cli, &diagnostics, use_color);
        write_output(cli, &grid.render(use_color && cli.output.is_none()))?;
        return Ok(0);
    }

    let mut output = match cli.heading {
        Some(ref heading) => match extract_section(heading, &doc.root(), &cli.language, &options) {
            Some(output) => output,
            None => {
                log::info!(
                    "Section {:?} holds no inflections",
                    normalize_section_heading(heading)
                );
                ExtractOutput::default()
            }
        },
        None => extract_inflections(&doc.root(), &cli.language, &options),
    };

    if let Some(ref word) = cli.word {
        if !output.is_about(word) {
            log::info!(
                "Table is about {:?}, not {:?}",
                output.simple.first().unwrap_or_default(),
                word
            );
            output.table = InflectionTable::new();
            output.simple = SimpleValues::new();
        }
    }

    report(cli, &output.diagnostics, use_color);

    // Check strict mode
    if cli.strict && output.diagnostics.has_warnings() {
        eprintln!(
            "Error: {} extraction warning(s) in strict mode",
            output.diagnostics.warnings()
        );
        return Ok(1);
    }

    write_output(cli, &export(&output, cli.format.into())?)?;
    Ok(0)
}

#[cfg(feature = "cli")]
fn load_options(cli: &Cli) -> ExtractResult<ExtractOptions> {
    let mut options = match cli.config {
        Some(ref path) => {
            let source = fs::read_to_string(path)?;
            ExtractOptions::from_toml(&source).map_err(|err| match err {
                ExtractError::Config { message, .. } => ExtractError::config_at(message, path),
                other => other,
            })?
        }
        None => ExtractOptions::default(),
    };

    if cli.all_rows {
        options.row_variant = RowVariant::AllRows;
    }
    Ok(options)
}

/// Print diagnostics to stderr (unless quiet mode)
#[cfg(feature = "cli")]
fn report(cli: &Cli, diagnostics: &Diagnostics, use_color: bool) {
    if !cli.quiet && !diagnostics.is_empty() {
        eprintln!("{}", format_diagnostics(diagnostics, use_color));
    }
}

#[cfg(feature = "cli")]
fn write_output(cli: &Cli, result: &str) -> ExtractResult<()> {
    match cli.output {
        Some(ref path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", result.trim_end())?;
            if !cli.quiet {
                eprintln!("✓ Output written to: {}", path);
            }
        }
        None => {
            println!("{}", result.trim_end());
        }
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install wikt-inflect --features cli");
    eprintln!("  wikt-inflect --language <LANGUAGE> [OPTIONS] [INPUT_FILE]");
}
