use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use swingcoach_core::{
    Analyzer, AnalyzerConfig, FfmpegVideo, FrameSampler, GeminiClient, Provider, Sport,
    StaticCoachDirectory, format_report_readable,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", secs / 60.0, secs % 60.0)
    }
}

/// CLI wrapper for Sport enum (needed for clap ValueEnum)
#[derive(Clone, Copy, Default, ValueEnum)]
enum CliSport {
    #[default]
    Tennis,
    Pickleball,
    Golf,
    Badminton,
    TableTennis,
    Padel,
    Baseball,
    Basketball,
}

impl From<CliSport> for Sport {
    fn from(cli: CliSport) -> Self {
        match cli {
            CliSport::Tennis => Sport::Tennis,
            CliSport::Pickleball => Sport::Pickleball,
            CliSport::Golf => Sport::Golf,
            CliSport::Badminton => Sport::Badminton,
            CliSport::TableTennis => Sport::TableTennis,
            CliSport::Padel => Sport::Padel,
            CliSport::Baseball => Sport::Baseball,
            CliSport::Basketball => Sport::Basketball,
        }
    }
}

#[derive(Parser)]
#[command(name = "swingcoach")]
#[command(about = "Sample frames from a sports clip and get an AI coaching review")]
struct Cli {
    /// Path to the video clip
    video: PathBuf,

    /// Sport shown in the clip
    #[arg(short, long, default_value = "tennis")]
    sport: CliSport,

    /// Gemini model (overrides SWINGCOACH_MODEL)
    #[arg(short, long)]
    model: Option<String>,

    /// Seconds to wait for each seek (overrides SWINGCOACH_SEEK_TIMEOUT_SECS)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    seek_timeout_secs: Option<u64>,

    /// Print the report as JSON instead of markdown
    #[arg(long)]
    json: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

const DEFAULT_LOG_FILTER: &str = "swingcoach=info,swingcoach_core=info";

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let sport: Sport = cli.sport.into();

    // Validate configuration early
    let mut config = match AnalyzerConfig::from_env(Provider::Gemini) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(secs) = cli.seek_timeout_secs {
        config.seek_timeout = Duration::from_secs(secs);
    }
    tracing::info!(model = %config.model, seek_timeout = ?config.seek_timeout, "loaded configuration");

    let analyzer = Analyzer::new(
        FrameSampler::new(config.seek_timeout),
        GeminiClient::new(&config)?,
        StaticCoachDirectory,
    );

    eprintln!(
        "\n{}  {}\n",
        style("swingcoach").cyan().bold(),
        style(format!("{} Technique Review", sport)).dim()
    );
    eprintln!("{}", style("─".repeat(60)).dim());

    let total_start = Instant::now();

    // Step 1: Sample frames
    let step_start = Instant::now();
    let mut video = FfmpegVideo::open(&cli.video)?;
    let spinner = create_spinner("Sampling frames...");
    let frames = match analyzer.sample(&mut video).await {
        Ok(frames) => frames,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };
    let total_bytes: usize = frames.iter().map(|f| f.len()).sum();
    spinner.finish_with_message(format!(
        "{} Sampled {} frames ({} KB) {}",
        style("✓").green().bold(),
        frames.as_slice().len(),
        total_bytes / 1024,
        style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
    ));

    // Step 2: Ask the model
    let step_start = Instant::now();
    let spinner = create_spinner(&format!(
        "Analyzing {} technique with {}...",
        sport,
        analyzer.model_name()
    ));
    let answer = match analyzer.ask(sport, &frames).await {
        Ok(answer) => answer,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };
    spinner.finish_with_message(format!(
        "{} Analysis received ({} sources) {}",
        style("✓").green().bold(),
        answer.citations.len(),
        style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
    ));

    // Step 3: Classify
    let report = analyzer.report(sport, &frames, &answer);
    eprintln!(
        "{} Sorted sources: {} videos, {} places, {} coaches",
        style("✓").green().bold(),
        style(report.result.videos.len()).yellow(),
        style(report.result.places.len()).yellow(),
        style(report.result.coaches.len()).yellow()
    );

    eprintln!(
        "\n{} {}\n",
        style("Total time:").dim(),
        style(format_duration(total_start.elapsed())).cyan().bold()
    );
    eprintln!("{}", style("─".repeat(60)).dim());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report_readable(&report));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seek_timeout_is_rejected() {
        let result = Cli::try_parse_from(["swingcoach", "clip.mp4", "--seek-timeout-secs", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn positive_seek_timeout_is_accepted() {
        let cli = Cli::try_parse_from(["swingcoach", "clip.mp4", "--seek-timeout-secs", "3"])
            .unwrap();
        assert_eq!(cli.seek_timeout_secs, Some(3));
    }

    #[test]
    fn default_log_filter_is_info() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        assert!(DEFAULT_LOG_FILTER.starts_with("swingcoach=info"));
    }
}
