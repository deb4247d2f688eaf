//! blockify: Convert single-line comments to block comments in place.
//!
//! Usage:
//!   blockify [options] <file ...>
//!
//! Every file is processed independently; a failure on one path is reported
//! and the rest carry on.

use blockify_converter::Batch;
use blockify_diagnostics::{FileReport, Outcome};
use clap::Parser as ClapParser;
use miette::GraphicalReportHandler;
use std::ffi::OsString;
use std::process;
use tracing::info;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(ClapParser, Debug)]
#[command(name = "blockify", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Files to convert in place.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Display this help message.
    #[arg(short = 'h', long)]
    help: bool,

    /// Display the version number.
    #[arg(short = 'v', long)]
    version: bool,

    /// Log every converted comment.
    #[arg(long)]
    verbose: bool,

    /// Render errors as detailed reports when stderr is a terminal.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pretty: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse_from(split_args(std::env::args_os()));

    if cli.help {
        print!("{}", USAGE);
        return;
    }

    if cli.version {
        println!("blockify version {}", PKG_VERSION);
        return;
    }

    if cli.files.is_empty() {
        print_error("No input files specified.");
        eprint!("{}", USAGE);
        process::exit(1);
    }

    setup_tracing(cli.verbose);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            print_error(&format!("Failed to start async runtime: {}", e));
            process::exit(1);
        }
    };

    let use_color = cli.pretty && atty_is_terminal();
    runtime.block_on(run_convert(cli.files, use_color));
}

/// Reorder raw arguments so that only recognized options reach clap as
/// options. Anything else, including names like `-foo.js`, is a file and is
/// passed after a `--`.
fn split_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args = args.into_iter();
    let mut argv: Vec<OsString> = args.next().into_iter().collect();
    let mut files = Vec::new();

    while let Some(arg) = args.next() {
        match arg.to_str() {
            Some("-h" | "--help" | "-v" | "--version" | "--verbose") => argv.push(arg),
            Some("--pretty") => {
                argv.push(arg);
                argv.extend(args.next());
            }
            Some(flag) if flag.starts_with("--pretty=") => argv.push(arg),
            Some("--") => files.extend(args.by_ref()),
            _ => files.push(arg),
        }
    }

    argv.push(OsString::from("--"));
    argv.extend(files);
    argv
}

async fn run_convert(files: Vec<String>, use_color: bool) {
    let reports = Batch::new(files)
        .run(|report| print_report(report, use_color))
        .await;

    info!(
        converted = reports.converted_count(),
        skipped = reports.skipped_count(),
        failed = reports.failed_count(),
        comments = reports.comment_count(),
        "finished"
    );
}

const USAGE: &str = r#"
Usage: blockify [options] <file ...>

Options:
  -h, --help           Display this help message
  -v, --version        Display the version number
      --verbose        Log every converted comment
      --pretty <BOOL>  Render errors as detailed reports [default: true]

Description:
  Converts single-line comments (//) to block comments (/* */).
  Processes the specified file(s) in place.

Environment:
  BLOCKIFY_LOG         Log filter, e.g. "debug" or "blockify_converter=info"

Examples:
  blockify script.js
  blockify src/*.js
"#;

fn print_report(report: &FileReport, use_color: bool) {
    match &report.outcome {
        Outcome::Converted { .. } => println!("{}", report),
        Outcome::Skipped(err) | Outcome::Failed(err) => {
            if use_color {
                let mut rendered = String::new();
                if GraphicalReportHandler::new()
                    .render_report(&mut rendered, err)
                    .is_ok()
                {
                    eprint!("{}", rendered);
                    return;
                }
            }
            eprintln!("{}", report);
        }
    }
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("BLOCKIFY_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("error")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(atty_is_terminal())
        .try_init();
}

fn atty_is_terminal() -> bool {
    // Simple check - on Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
