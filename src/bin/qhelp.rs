//! Command-line interface for qhelp
//! Converts a help database into a directory of static HTML pages.
//!
//! Usage:
//!   qhelp `<input>` `<output-dir>` [--config `<file>`] [--stylesheet `<href>`] [-v...] [-q]
//!
//! Without `--config`, a `qhelp.toml` in the working directory is used when present.

use clap::{Arg, ArgAction, Command};
use qhelp::qhelp::config::{Loader, QhelpConfig};
use qhelp::qhelp::site;
use std::path::{Path, PathBuf};
use tracing::Level;

fn main() {
    let matches = Command::new("qhelp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a QuickHelp-style help database into a static HTML site")
        .arg(
            Arg::new("input")
                .help("Path to the help database source")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Directory that receives the generated pages")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .index(2),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults (default: ./qhelp.toml)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stylesheet")
                .long("stylesheet")
                .help("Stylesheet href linked from every topic page"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only report errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"), matches.get_flag("quiet"));

    let config = load_config(
        matches.get_one::<PathBuf>("config").map(PathBuf::as_path),
        matches.get_one::<String>("stylesheet").map(String::as_str),
    );
    let (Some(input), Some(output)) = (
        matches.get_one::<PathBuf>("input"),
        matches.get_one::<PathBuf>("output"),
    ) else {
        unreachable!("clap enforces required positionals");
    };

    handle_convert_command(input, output, &config);
}

fn init_logging(verbosity: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>, stylesheet: Option<&str>) -> QhelpConfig {
    let loader = Loader::for_run(path, Path::new("."));
    let loader = match stylesheet {
        Some(href) => loader.set_override("site.stylesheet", href),
        None => Ok(loader),
    };
    loader.and_then(Loader::build).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

/// Handle the conversion
fn handle_convert_command(input: &Path, output: &Path, config: &QhelpConfig) {
    match site::convert_file(input, output, config) {
        Ok(summary) => {
            println!(
                "Wrote {} topics and {} redirects to {}",
                summary.topics,
                summary.redirects,
                output.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
