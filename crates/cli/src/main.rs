mod config;
mod report;

use config::Config;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::{control::set_override, Colorize};
use ctodata_core::{Ctodata, CtodataError, DecodeOptions};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use crate::report::ReportStyle;

const USAGE: &str = "Usage: ctodata <c_file> [--strip-byte]";

const LONG_ABOUT: &str = r##"
ctodata turns the integer array literal at the end of a C source file back
into the raw bytes it encodes.

The literal is the text after the last '{' in the file, up to the next '}'.
Values are decimal integers separated by commas and/or whitespace, each in
the range 0-255. The bytes are written to <C_FILE>.ctodata.

EXAMPLES:
  ctodata splash.png.c                Write splash.png.c.ctodata
  ctodata shader.glsl.c --strip-byte  Drop the trailing 0 of string data
  ctodata splash.png.c --json         Report the result as JSON
  ctodata splash.png.c -x             Preview the written bytes

CONFIGURATION:
  Presentation settings can be stored in a TOML config file.

  Setting        | CLI flag    | Default
  ---------------+-------------+--------
  hexdump_lines  |             | 16
  no_color       | --no-color  | false
  quiet          | --quiet     | false

  Config file location: ctodata --config-path
  Generate default config: ctodata --config-init

  Note: NO_COLOR env var is also respected (https://no-color.org/)"##;

#[derive(Parser)]
#[command(name = "ctodata")]
#[command(version)]
#[command(about = "Turn a C array literal into a raw .ctodata file")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// C source file ending in a brace-delimited integer array
    #[arg(value_name = "C_FILE")]
    input: Option<PathBuf>,

    /// Require a trailing 0 (string terminator) and leave it out of the output
    #[arg(long)]
    strip_byte: bool,

    /// Output the conversion report as JSON (for scripting/piping)
    #[arg(long, short = 'j')]
    json: bool,

    /// Show an xxd-style hexdump of the written bytes
    #[arg(long, short = 'x')]
    hexdump: bool,

    /// Don't print status lines on success
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Disable colored output
    #[arg(long, short = 'C')]
    no_color: bool,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the config file path and exit
    #[arg(long)]
    config_path: bool,

    /// Create a default config file and exit
    #[arg(long)]
    config_init: bool,
}

fn main() {
    // Argument errors exit with 1, like a missing input file.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // Handle --config-path
    if cli.config_path {
        match Config::path() {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!(
                    "{}: Cannot determine config directory",
                    "error".red().bold()
                );
                std::process::exit(1);
            }
        }
        return;
    }

    // Handle --config-init
    if cli.config_init {
        match config::init_config() {
            Ok(path) => println!("Created config file: {}", path.display()),
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    let Some(input) = cli.input.as_deref() else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    // Initialize tracing based on verbosity level (before config loading for logging)
    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    let file_config = Config::load();

    let no_color = if cli.no_color {
        tracing::debug!("no_color = true (from CLI)");
        true
    } else if file_config.no_color() {
        tracing::debug!("no_color = true (from NO_COLOR or config)");
        true
    } else {
        !io::stderr().is_terminal()
    };
    if no_color {
        set_override(false);
    }

    let quiet = cli.quiet || file_config.quiet();
    let style = ReportStyle {
        json: cli.json,
        quiet,
        hexdump_lines: cli.hexdump.then(|| file_config.hexdump_lines()),
    };
    tracing::debug!(
        "strip_byte = {}, json = {}, quiet = {}",
        cli.strip_byte,
        style.json,
        style.quiet
    );

    let ctodata = Ctodata::with_options(DecodeOptions::default().strip_byte(cli.strip_byte));

    if let Err(e) = convert(&ctodata, input, style) {
        report_error(&e, input);
        std::process::exit(1);
    }
}

/// Decode `input`, announce the output file, then write it.
fn convert(ctodata: &Ctodata, input: &Path, style: ReportStyle) -> Result<(), CtodataError> {
    let decoded = ctodata.decode_file(input)?;

    if let Some(line) = style.making_line(&decoded) {
        println!("{line}");
    }

    let report = decoded.write()?;

    match style.finished_lines(&report, &decoded.bytes) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            // The file is written; only the JSON rendering failed.
            eprintln!("{}: Failed to serialize report: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn report_error(error: &CtodataError, input: &Path) {
    eprintln!("{}: {}", "error".red().bold(), error);
    if !error.is_io() {
        eprintln!(
            "  {} fix the array literal in {}",
            "hint:".cyan(),
            input.display()
        );
    }
}
