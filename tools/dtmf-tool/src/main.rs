use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use console::style;
use tracing::{error, info};

use dtmf_codec::detector::DEFAULT_TOLERANCE_HZ;
use dtmf_codec::generator::{DEFAULT_DURATION, DEFAULT_SAMPLE_RATE};
use dtmf_codec::spectrum::Spectrum;
use dtmf_codec::{Detection, Detector, Symbol, ToneBuffer, ToneSettings};

use crate::error::Result;
use crate::logging::LogLevel;

mod batch;
mod error;
mod logging;
mod wav;

#[derive(Parser)]
#[clap(author, version, about, long_about=None)]
pub(crate) struct Cli {
    #[clap(long, arg_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Copy)]
pub(crate) struct ToneArgs {
    #[clap(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Seconds
    #[clap(long, default_value_t = DEFAULT_DURATION)]
    pub duration: f64,
}

impl From<ToneArgs> for ToneSettings {
    fn from(args: ToneArgs) -> Self {
        ToneSettings {
            sample_rate: args.sample_rate,
            duration: args.duration,
        }
    }
}

#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// 0-9, * or #
    symbol: Symbol,

    #[clap(flatten)]
    tone: ToneArgs,

    #[clap(long, parse(from_os_str), default_value = ".")]
    output_dir: PathBuf,
}

#[derive(Args)]
pub(crate) struct GenerateAllArgs {
    #[clap(flatten)]
    tone: ToneArgs,

    #[clap(long, parse(from_os_str), default_value = ".")]
    output_dir: PathBuf,
}

#[derive(Args)]
pub(crate) struct IdentifyArgs {
    #[clap(parse(from_os_str))]
    file: PathBuf,

    /// Hz, applied to each of the two frequencies
    #[clap(long, default_value_t = DEFAULT_TOLERANCE_HZ)]
    tolerance: f64,
}

#[derive(Args)]
pub(crate) struct InspectArgs {
    #[clap(parse(from_os_str))]
    file: PathBuf,

    /// Leading samples to print
    #[clap(long, default_value_t = 100)]
    samples: usize,

    /// Strongest spectral bins to print
    #[clap(long, default_value_t = 2)]
    peaks: usize,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    #[clap(name="generate")]
    Generate(GenerateArgs),

    #[clap(name="generate-all")]
    GenerateAll(GenerateAllArgs),

    #[clap(name="identify")]
    Identify(IdentifyArgs),

    #[clap(name="inspect")]
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    let args = Cli::parse();

    logging::setup_logging(args.log_level)?;

    let result = run(args.command);
    if let Err(e) = &result {
        error!("{e}");
    }
    result
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate(a) => {
            let settings = ToneSettings::from(a.tone);
            let buffer = settings.generate(a.symbol)?;

            fs::create_dir_all(&a.output_dir)?;
            let path = a.output_dir.join(wav::tone_file_name(a.symbol));
            wav::write_tone(&path, &buffer)?;

            info!(symbol = %a.symbol, samples = buffer.len(), "generated");
            println!("Saved: {}", path.display());
        },
        Commands::GenerateAll(a) => {
            fs::create_dir_all(&a.output_dir)?;
            for (_, path) in batch::save_all(&a.output_dir, a.tone.into())? {
                println!("Saved: {}", path.display());
            }
        },
        Commands::Identify(a) => {
            let buffer = wav::read_tone(&a.file)?;
            println!("Sampling Rate: {} Hz", buffer.sample_rate());

            let analysis = Detector::with_tolerance(a.tolerance).analyze(&buffer)?;
            if let Some(dominant) = analysis.dominant {
                println!("Dominant Frequencies: {:.1} Hz, {:.1} Hz", dominant.first_hz, dominant.second_hz);
            }

            match analysis.detection {
                Detection::Recognized(symbol) => {
                    println!("Identified DTMF Key: {}", style(symbol).green().bold());
                },
                Detection::Unrecognized => {
                    println!("{}", style("Unable to identify the DTMF key.").yellow());
                },
            }
        },
        Commands::Inspect(a) => {
            let buffer = wav::read_tone(&a.file)?;
            inspect(&buffer, a.samples, a.peaks);
        },
    }

    Ok(())
}

///////////////////////////////////////////////////////////////////////

fn inspect(buffer: &ToneBuffer, samples: usize, peaks: usize) {
    println!(
        "{} Hz, {} samples, {:.3} s",
        buffer.sample_rate(),
        buffer.len(),
        buffer.duration()
    );

    println!("{}", style("Time domain").bold());
    let sample_period = 1.0 / buffer.sample_rate() as f64;
    for (n, sample) in buffer.samples().iter().take(samples).enumerate() {
        println!("{:>10.6} s {:>7}", n as f64 * sample_period, sample);
    }

    println!("{}", style("Frequency domain").bold());
    let spectrum = Spectrum::of(buffer.samples(), buffer.sample_rate());
    println!("bin width {:.3} Hz, {} bins", spectrum.bin_width(), spectrum.len());
    for peak in spectrum.peaks(peaks) {
        println!("{:>10.1} Hz {:>14.1}", peak.frequency_hz, peak.magnitude);
    }
}
