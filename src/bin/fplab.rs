// Command-line front end: π estimation, timing, and exact binary32 values
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use fp_precision::{
  compare, exact_decimal_from_bits, time_repeated, ArithmeticKind, Decimal, F32Bits,
  IntegrationConfig, RoundFrom, Rounding,
};

#[derive(Parser)]
#[command(name = "fplab")]
#[command(version)]
#[command(about = "Experiments with floating-point and decimal precision", long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Log progress to stderr (twice for every run)
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  verbose: u8,
}

/// Writes log records to stderr.
struct StderrLogger;

impl log::Log for StderrLogger {
  fn enabled(&self, metadata: &log::Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &log::Record) {
    if self.enabled(record.metadata()) {
      eprintln!("[{}] {}", record.level(), record.args());
    }
  }

  fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

#[derive(Subcommand)]
enum Commands {
  /// Estimate π with the midpoint rule in the chosen arithmetic
  Pi {
    /// Number of rectangles
    #[arg(short, long, default_value = "1000000")]
    steps: u64,

    /// Arithmetic to compute in
    #[arg(short, long, value_enum, default_value = "f64")]
    kind: Kind,

    /// Significant digits, for decimal arithmetic
    #[arg(short, long, default_value = "30")]
    precision: u32,

    /// Rounding mode, for decimal arithmetic
    #[arg(short, long, default_value = "half-up")]
    rounding: Rounding,

    /// Number of timed runs
    #[arg(long, default_value = "1")]
    repeat: u32,
  },

  /// Estimate π in f32, f64 and decimal arithmetic side by side
  Compare {
    /// Number of rectangles
    #[arg(short, long, default_value = "100000")]
    steps: u64,

    /// Significant digits of a decimal run (repeat for several)
    #[arg(short, long, default_values_t = [30])]
    precision: Vec<u32>,

    /// Rounding mode of the decimal runs
    #[arg(short, long, default_value = "half-up")]
    rounding: Rounding,
  },

  /// Print the exact decimal value of a normalised binary32 number
  Exact {
    /// The 32 bits, sign first; spaces and underscores are ignored
    #[arg(value_name = "BITS", num_args = 1.., required = true)]
    bits: Vec<String>,

    /// Print in scientific notation
    #[arg(long)]
    sci: bool,
  },

  /// Round a decimal number to the nearest binary32 (ties to even)
  Encode {
    #[arg(value_name = "DECIMAL", allow_hyphen_values = true)]
    value: String,
  },

  /// List consecutive binary32 numbers, moving away from zero, with their exact values
  Walk {
    /// The 32 bits of the first number; spaces and underscores are ignored
    #[arg(value_name = "BITS", num_args = 1.., required = true)]
    bits: Vec<String>,

    /// How many numbers to list
    #[arg(short = 'n', long, default_value = "8")]
    count: usize,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
  F32,
  F64,
  Decimal,
}

impl Kind {
  fn arithmetic(self, precision_digits: u32, rounding: Rounding) -> ArithmeticKind {
    match self {
      Self::F32 => ArithmeticKind::Float32,
      Self::F64 => ArithmeticKind::Float64,
      Self::Decimal => ArithmeticKind::Decimal { precision_digits, rounding },
    }
  }
}

/// Join the arguments and drop any grouping characters, so that `0 01111111 000…` works.
fn bit_string(parts: &[String]) -> String {
  parts.concat().chars().filter(|c| !c.is_whitespace() && *c != '_').collect()
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  log::set_logger(&LOGGER).context("cannot install logger")?;
  log::set_max_level(match cli.verbose {
    0 => log::LevelFilter::Warn,
    1 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  });

  match cli.command {
    Commands::Pi { steps, kind, precision, rounding, repeat } => {
      let config = IntegrationConfig::new(steps, kind.arithmetic(precision, rounding));
      let timing = time_repeated(&config, repeat)
        .with_context(|| format!("cannot estimate π in {} with {steps} steps", config.arithmetic_kind))?;
      let estimate = timing.estimate();
      println!("{estimate}");
      println!("error:   {:e}", estimate.abs_error()?.normalized());
      if repeat > 1 {
        println!("elapsed: {:?} mean, {:?} min over {repeat} runs", timing.mean(), timing.min());
      } else {
        println!("elapsed: {:?}", timing.mean());
      }
    }

    Commands::Compare { steps, precision, rounding } => {
      let kinds: Vec<_> = [ArithmeticKind::Float32, ArithmeticKind::Float64].into_iter()
        .chain(precision.iter().map(|&precision_digits| ArithmeticKind::Decimal { precision_digits, rounding }))
        .collect();
      let rows = compare(steps, &kinds)
        .with_context(|| format!("cannot compare estimates with {steps} steps"))?;
      println!("{:<24} {:>6} {:>12} {:>14}  estimate", "arithmetic", "digits", "error", "elapsed");
      for row in rows {
        println!(
          "{:<24} {:>6} {:>12.3e} {:>14}  {}",
          row.arithmetic_kind.to_string(),
          row.agreeing_digits,
          row.abs_error.to_f64(),
          format!("{:?}", row.elapsed),
          row.estimate,
        );
      }
    }

    Commands::Exact { bits, sci } => {
      let bits = bit_string(&bits);
      let value = exact_decimal_from_bits(&bits)
        .with_context(|| format!("cannot reconstruct {bits:?}"))?;
      if sci {
        println!("{value:e}");
      } else {
        println!("{value}");
      }
    }

    Commands::Encode { value } => {
      let decimal: Decimal = value.parse()
        .with_context(|| format!("{value:?} is not a decimal number"))?;
      let bits = F32Bits::round_from(&decimal);
      println!("{}", bits.to_bit_string());
      println!("{bits:#010x}");
      println!("{}", f32::from(bits));
    }

    Commands::Walk { bits, count } => {
      let bits = bit_string(&bits);
      let first: F32Bits = bits.parse()
        .with_context(|| format!("cannot parse {bits:?}"))?;
      for x in first.ascending().take(count) {
        match x.exact_decimal() {
          Ok(value) => println!("{} {value}", x.to_bit_string()),
          Err(_) => println!("{} ({:?})", x.to_bit_string(), x.classify()),
        }
      }
    }
  }

  Ok(())
}
