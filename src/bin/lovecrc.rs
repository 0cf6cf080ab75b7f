// In: src/bin/lovecrc.rs

//! Thin command-line caller for the LoveCRC digest.
//!
//! Reads the message from the positional argument, or from stdin when none is
//! given, and prints the digest. An invalid length exits with status 22.

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Once;

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use lovecrc::{ChunkDecodePolicy, DigestLength, HasherConfig, LoveCrcError, SegmentFormat};

#[derive(Parser, Debug)]
#[command(name = "lovecrc", version, about = "Compute a LoveCRC digest")]
struct Cli {
    /// Message to hash. Read from stdin when omitted.
    message: Option<String>,

    /// Digest length in bits: one of 192, 256, ..., 1024 (multiples of 64).
    /// Validated by the hasher so a bad value exits with status 22.
    #[arg(short, long, value_name = "BITS")]
    length: Option<String>,

    /// JSON config file; command-line flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Zero-pad every segment to 16 hex digits.
    #[arg(long)]
    fixed_width: bool,

    /// Fail on non-hexadecimal block chunks instead of reading them as zero.
    #[arg(long)]
    strict: bool,

    /// Derive polynomials on all cores.
    #[arg(long)]
    parallel: bool,

    /// Print every intermediate value as JSON instead of just the digest.
    #[arg(long)]
    trace: bool,

    /// Log pipeline stages to stderr, or to this file if given.
    #[arg(short, long, value_name = "LOG_FILE", num_args = 0..=1, default_missing_value = "")]
    verbose: Option<String>,
}

static INIT_LOGGER: Once = Once::new();

fn enable_verbose_logging(log_file: Option<String>) -> Result<(), LoveCrcError> {
    let mut result = Ok(());
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(filename) = log_file {
            match OpenOptions::new().append(true).create(true).open(&filename) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(e) => {
                    result = Err(LoveCrcError::Config(format!(
                        "cannot open log file {}: {}",
                        filename, e
                    )));
                    return;
                }
            }
        }

        let _ = builder.try_init();
    });
    result
}

fn build_config(cli: &Cli) -> Result<HasherConfig, LoveCrcError> {
    let mut config = match &cli.config {
        Some(path) => HasherConfig::from_json_file(path)?,
        None => HasherConfig::default(),
    };
    if let Some(bits) = &cli.length {
        config.length = bits.parse::<DigestLength>()?;
    }
    if cli.fixed_width {
        config.segment_format = SegmentFormat::FixedWidth;
    }
    if cli.strict {
        config.chunk_decode = ChunkDecodePolicy::Strict;
    }
    if cli.parallel {
        config.parallel = true;
    }
    Ok(config)
}

fn read_message(cli: &Cli) -> Result<Vec<u8>, LoveCrcError> {
    match &cli.message {
        Some(message) => Ok(message.as_bytes().to_vec()),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> Result<String, LoveCrcError> {
    if let Some(target) = &cli.verbose {
        let log_file = (!target.is_empty()).then(|| target.clone());
        enable_verbose_logging(log_file)?;
    }

    let config = build_config(cli)?;
    let message = read_message(cli)?;
    log::info!(
        "hashing {} bytes to {} bits ({:?}, {:?}, parallel={})",
        message.len(),
        config.length,
        config.chunk_decode,
        config.segment_format,
        config.parallel
    );

    if cli.trace {
        lovecrc::trace(&message, &config)?.to_json_pretty()
    } else {
        Ok(lovecrc::hash_with_config(&message, &config)?.into_string())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
