//! `hhc` command line tool: encode, decode and validate HHC strings.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::Rng;
use thiserror::Error;

use hhc::logging::{setup_logging, LogFormat};
use hhc::{fits_width, BitWidth, HhcCodec, HhcError};

#[derive(Debug, Parser)]
#[command(name = "hhc", version, about = "Sortable text encoding for 32-bit and 64-bit integers")]
struct Cli {
    /// Log output format.
    #[arg(long, env = "HHC_LOG_FORMAT", value_enum, default_value_t = LogFormatArg::Pretty, global = true)]
    log_format: LogFormatArg,

    /// Log filter directives, used when RUST_LOG is unset.
    #[arg(long, env = "HHC_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode integers, one encoding per line.
    Encode {
        #[command(flatten)]
        width: WidthArgs,

        /// Strip leading zero digits.
        #[arg(long)]
        unpadded: bool,

        /// Values to encode.
        #[arg(required = true)]
        values: Vec<u64>,
    },
    /// Decode strings, one value per line.
    Decode {
        #[command(flatten)]
        width: WidthArgs,

        /// Padded or unpadded encodings.
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Check strings without decoding them.
    Validate {
        #[command(flatten)]
        width: WidthArgs,

        /// Candidate encodings.
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Measure encode+decode round trips per second.
    Bench {
        #[command(flatten)]
        width: WidthArgs,

        /// Number of round trips.
        #[arg(long, default_value_t = 1_000_000)]
        count: usize,
    },
}

#[derive(Debug, Args)]
struct WidthArgs {
    /// Integer width.
    #[arg(long, short, value_enum, default_value_t = WidthArg::W64)]
    width: WidthArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WidthArg {
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

impl From<WidthArg> for BitWidth {
    fn from(arg: WidthArg) -> Self {
        match arg {
            WidthArg::W32 => BitWidth::W32,
            WidthArg::W64 => BitWidth::W64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// Errors reported by the command line tool.
#[derive(Debug, Error)]
enum CliError {
    #[error("{input:?}: {source}")]
    Codec {
        input: String,
        #[source]
        source: HhcError,
    },

    #[error("{failed} of {total} inputs failed")]
    Partial { failed: usize, total: usize },

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli.log_level, cli.log_format.into());

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match command {
        Command::Encode { width, unpadded, values } => {
            encode(width.width.into(), unpadded, &values, &mut out, &mut err)
        }
        Command::Decode { width, inputs } => decode(width.width.into(), &inputs, &mut out, &mut err),
        Command::Validate { width, inputs } => validate(width.width.into(), &inputs, &mut out),
        Command::Bench { width, count } => bench(width.width.into(), count, &mut out),
    }
}

fn encode(
    width: BitWidth,
    unpadded: bool,
    values: &[u64],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let codec = HhcCodec::new(width);
    let mut failed = 0;

    for &value in values {
        let encoded = if unpadded {
            codec.encode_unpadded(value)
        } else {
            codec.encode_padded(value)
        };
        match encoded {
            Ok(encoded) => writeln!(out, "{encoded}")?,
            Err(source) => {
                failed += 1;
                writeln!(err, "{}", CliError::Codec { input: value.to_string(), source })?;
            }
        }
    }

    finish(failed, values.len())
}

fn decode(
    width: BitWidth,
    inputs: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let codec = HhcCodec::new(width);
    let mut failed = 0;

    for input in inputs {
        match codec.decode(input) {
            Ok(value) => writeln!(out, "{value}")?,
            Err(source) => {
                failed += 1;
                writeln!(err, "{}", CliError::Codec { input: input.clone(), source })?;
            }
        }
    }

    finish(failed, inputs.len())
}

fn validate(width: BitWidth, inputs: &[String], out: &mut impl Write) -> Result<(), CliError> {
    let mut failed = 0;

    for input in inputs {
        if fits_width(input, width) {
            writeln!(out, "{input}\tok")?;
        } else {
            failed += 1;
            writeln!(out, "{input}\tinvalid")?;
        }
    }

    finish(failed, inputs.len())
}

fn finish(failed: usize, total: usize) -> Result<(), CliError> {
    if failed == 0 {
        Ok(())
    } else {
        Err(CliError::Partial { failed, total })
    }
}

fn bench(width: BitWidth, count: usize, out: &mut impl Write) -> Result<(), CliError> {
    let codec = HhcCodec::new(width);
    let mut rng = rand::thread_rng();
    let values: Vec<u64> = (0..count)
        .map(|_| rng.gen_range(0..=width.max_value()))
        .collect();

    tracing::info!(%width, count, "starting round-trip benchmark");

    let start = Instant::now();
    let mut mismatches = 0usize;
    for &value in &values {
        let round_trip = codec
            .encode_unpadded(value)
            .and_then(|encoded| {
                // Zero unpads to "", which is not decodable.
                let text = if encoded.is_empty() { "-" } else { encoded.as_str() };
                codec.decode(text)
            });
        if round_trip != Ok(value) {
            mismatches += 1;
        }
    }
    let elapsed = start.elapsed();

    let per_second = count as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    writeln!(out, "{width}: {count} encode/decode pairs in {:.3} seconds", elapsed.as_secs_f64())?;
    writeln!(out, "        ({per_second:.0} operations/second)")?;

    if mismatches != 0 {
        tracing::error!(mismatches, "round trips did not reproduce their input");
    }
    Ok(())
}
