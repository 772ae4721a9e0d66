use anyhow::{Context, Result};
use clap::Parser;

use timeplot::app::{self, TimingApp};
use timeplot::cli::TimeplotCli;
use timeplot::color::PALETTE_SEED;
use timeplot::data::loader;
use timeplot::render::{self, OutputFormat, TimingChart};
use timeplot::state::TimingState;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(TimeplotCli::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: TimeplotCli) -> Result<()> {
    // Reject a bad output path before reading anything.
    if let Some(path) = &cli.output.output {
        OutputFormat::from_path(path)?;
    }

    let data = loader::load_timing(&cli.files, PALETTE_SEED).context("loading timing data")?;
    log::info!(
        "Loaded {} samples from {} files",
        data.len(),
        data.series.len()
    );

    let title = cli
        .output
        .title
        .clone()
        .unwrap_or_else(|| data.default_title());

    match &cli.output.output {
        Some(path) => {
            let chart = TimingChart {
                data: &data,
                title: &title,
            };
            render::save_chart(&chart, path, cli.output.size())
                .with_context(|| format!("saving {}", path.display()))?;
        }
        None => {
            let state = TimingState::new(data, title.clone());
            app::show(&title, cli.output.size(), TimingApp { state })?;
        }
    }

    Ok(())
}
