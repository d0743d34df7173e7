use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ramswap::config::{self, Config, OutputFormat, load_config, load_config_from_path};
use ramswap::launcher::launch_monitor;
use ramswap::logging;
use ramswap::sampler::{Sampler, SamplerLoop};
use ramswap::sink::{DisplaySink, JsonSink, TextSink};
use ramswap::system::platform::source_for;

#[derive(Parser)]
#[command(
    name = "ramswap",
    about = "Memory and swap usage sampler with ok/warn/critical status"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sampling interval in seconds
    #[arg(long)]
    interval: Option<u64>,

    /// meminfo-shaped statistics file to read instead of the platform default
    #[arg(long)]
    source: Option<PathBuf>,

    /// Output format: text, json
    #[arg(long)]
    output: Option<String>,

    /// Take a single sample and exit.
    #[arg(long, default_value_t = false)]
    once: bool,

    /// Open a system monitor application and exit.
    #[arg(long, default_value_t = false)]
    open_monitor: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.log_json)?;
    let config = load_config_for_cli(&cli);

    if cli.open_monitor {
        let app = launch_monitor(&config.monitor.apps)?;
        println!("Started {app}");
        return Ok(());
    }

    let sink: Box<dyn DisplaySink + Send> = match config.output_format() {
        OutputFormat::Text => Box::new(TextSink::stdout()),
        OutputFormat::Json => Box::new(JsonSink::stdout()),
    };
    let source = source_for(config.general.source_path.as_deref());
    let mut sampler = Sampler::new(source, sink, config.thresholds);

    if cli.once {
        sampler.tick();
        return Ok(());
    }

    run(sampler, Duration::from_secs(config.general.interval_secs)).await
}

async fn run<S, D>(sampler: Sampler<S, D>, period: Duration) -> Result<()>
where
    S: ramswap::system::platform::StatsSource + Send + 'static,
    D: DisplaySink + Send + 'static,
{
    let mut sampler_loop = SamplerLoop::start(sampler, period);
    let signal = tokio::signal::ctrl_c().await;
    sampler_loop.stop().await;
    signal?;
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(interval) = cli.interval {
        config.general.interval_secs = interval;
    }
    if let Some(ref source) = cli.source {
        config.general.source_path = Some(source.clone());
    }
    if let Some(ref output) = cli.output {
        config.general.output = output.clone();
    }

    config.sanitize();
    tracing::debug!(path = ?config::config_path(), ?config, "configuration loaded");
    config
}
