use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use flexproto_tools::{
    encode_values, format_hex, format_inspect_pretty, frame_bytes, inspect_varints,
    unframe_bytes,
};

#[derive(Parser)]
#[command(
    name = "flexproto-tools",
    version,
    about = "flexproto inspection and conversion tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk a file as a stream of varints.
    Inspect {
        /// Path to the encoded bytes.
        file: PathBuf,
        /// Show zig-zag decoded values in pretty output.
        #[arg(long)]
        signed: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Print the encoding of integer values.
    Encode {
        /// Zig-zag encode the values as signed integers.
        #[arg(long)]
        signed: bool,
        /// Values to encode, in order.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Wrap a file in a single COBS frame.
    Frame {
        input: PathBuf,
        output: PathBuf,
    },
    /// Unwrap every COBS frame in a file and concatenate the payloads.
    Unframe {
        input: PathBuf,
        output: PathBuf,
        /// Largest accepted frame in bytes.
        #[arg(long)]
        max_frame_bytes: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect {
            file,
            signed,
            format,
        } => {
            let bytes = read_input(&file)?;
            let report = inspect_varints(&bytes);
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => {
                    print!("{}", format_inspect_pretty(&report, signed));
                }
            }
            if let Some(offset) = report.truncated_at {
                bail!("truncated varint at byte {offset} of {}", file.display());
            }
        }
        Command::Encode { signed, values } => {
            let bytes = encode_values(values.as_slice(), signed)?;
            println!("{}", format_hex(&bytes));
        }
        Command::Frame { input, output } => {
            let payload = read_input(&input)?;
            let framed = frame_bytes(&payload)?;
            write_output(&output, &framed)?;
            println!("{} -> {} bytes", payload.len(), framed.len());
        }
        Command::Unframe {
            input,
            output,
            max_frame_bytes,
        } => {
            let data = read_input(&input)?;
            let mut limits = wire::FrameLimits::default();
            if let Some(max) = max_frame_bytes {
                limits.max_frame_bytes = max;
            }
            let payload = unframe_bytes(&data, limits)
                .with_context(|| format!("unframe {}", input.display()))?;
            write_output(&output, &payload)?;
            println!("{} -> {} bytes", data.len(), payload.len());
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}
