//! blocksort CLI
//!
//! Applies the Burrows-Wheeler or Move-to-Front transform, or both, to
//! standard input and writes the result to standard output.

mod commands;

use blocksort_core::Direction;
use blocksort_transform::{BwtCodec, MtfCodec, PipelineCodec};
use clap::{Parser, Subcommand, ValueEnum};
use commands::cmd_transform;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blocksort")]
#[command(
    author,
    version,
    about = "Burrows-Wheeler and Move-to-Front block transforms"
)]
#[command(long_about = "
blocksort reads all of standard input, transforms it, and writes the result
to standard output. Set RUST_LOG=debug to see what each transform did.

Examples:
  blocksort bwt encode < input > input.bwt
  blocksort bwt decode < input.bwt > input
  blocksort mtf - < input.bwt > input.mtf
  blocksort mtf + < input.mtf > input.bwt
  blocksort pipeline encode < input > input.bwt.mtf
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Burrows-Wheeler transform (4-byte big-endian row, then last column)
    Bwt {
        /// Transform direction
        #[arg(value_enum)]
        mode: Mode,
    },

    /// Move-to-Front transform (one position byte per input byte)
    Mtf {
        /// Transform direction
        #[arg(value_enum)]
        mode: Mode,
    },

    /// Burrows-Wheeler transform followed by Move-to-Front
    Pipeline {
        /// Transform direction
        #[arg(value_enum)]
        mode: Mode,
    },
}

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Forward transform
    #[value(alias = "-")]
    Encode,
    /// Inverse transform
    #[value(alias = "+")]
    Decode,
}

impl From<Mode> for Direction {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Encode => Direction::Encode,
            Mode::Decode => Direction::Decode,
        }
    }
}

fn main() {
    // stdout carries the transformed data, so logs go to stderr
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(fmt::format().compact()),
        )
        .with(EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bwt { mode } => cmd_transform(BwtCodec, mode.into()),
        Commands::Mtf { mode } => cmd_transform(MtfCodec, mode.into()),
        Commands::Pipeline { mode } => cmd_transform(PipelineCodec, mode.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
