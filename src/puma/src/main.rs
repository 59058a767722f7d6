// puma/src/main.rs

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use puma::cli::{scan_file, stats_file};
use puma::{OutputFormat, ScanConfig};
use puma_scanner::TokenKind;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "puma")]
#[command(about = "Lexical scanner for the Puma programming language", long_about = None)]
#[command(version = env!("PUMA_CLI_VERSION"))]
struct Cli {
    /// YAML file with default output settings
    #[arg(short, long, value_name = "FILE", env = "PUMA_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a source file
    Scan(ScanArgs),
    /// Print token counts for a source file
    Stats(StatsArgs),
}

#[derive(Args)]
struct ScanArgs {
    /// Source file to scan
    file: PathBuf,

    #[arg(short, long, value_enum, env = "PUMA_FORMAT")]
    format: Option<OutputFormat>,

    /// Only print tokens of these kinds (repeatable)
    #[arg(short, long = "kind", value_name = "KIND")]
    kinds: Vec<TokenKind>,

    /// Do not print EndOfLine tokens
    #[arg(long)]
    skip_eol: bool,

    /// Fail if the source contains unrecognized characters
    #[arg(long)]
    deny_unknown: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// Source file to summarize
    file: PathBuf,

    #[arg(short, long, value_enum, env = "PUMA_FORMAT")]
    format: Option<OutputFormat>,
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = ScanConfig::load(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Scan(args) => {
            let config = config
                .with_format(args.format)
                .with_kinds(args.kinds)
                .with_skip_eol(args.skip_eol)
                .with_deny_unknown(args.deny_unknown);
            scan_file(&args.file, &config, &mut out)
        }
        Commands::Stats(args) => {
            let format = args.format.unwrap_or(config.format());
            stats_file(&args.file, format, &mut out)
        }
    };
    out.flush()?;
    result
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
