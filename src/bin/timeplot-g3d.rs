use anyhow::{Context, Result};
use clap::Parser;

use timeplot::app::{self, SurfaceApp};
use timeplot::cli::SurfaceCli;
use timeplot::color::{seeded_palette, PALETTE_SEED};
use timeplot::data::loader;
use timeplot::render::{self, OutputFormat, SurfaceChart};
use timeplot::state::SurfaceState;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(SurfaceCli::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: SurfaceCli) -> Result<()> {
    if let Some(path) = &cli.output.output {
        OutputFormat::from_path(path)?;
    }

    let mut data = loader::load_grid(&cli.files, PALETTE_SEED).context("loading grid data")?;
    if !cli.sizes.is_empty() {
        data = data.select_sizes(&cli.sizes)?;
        // Colours follow the plotted order, not the order in the files.
        data.assign_colors(&seeded_palette(data.groups.len(), PALETTE_SEED));
    }
    log::info!(
        "Loaded {} grid points in {} size groups",
        data.len(),
        data.groups.len()
    );
    data.warn_unplottable();

    let title = cli
        .output
        .title
        .clone()
        .unwrap_or_else(|| data.default_title());

    match &cli.output.output {
        Some(path) => {
            let chart = SurfaceChart {
                data: &data,
                title: &title,
                camera: cli.camera(),
            };
            render::save_chart(&chart, path, cli.output.size())
                .with_context(|| format!("saving {}", path.display()))?;
        }
        None => {
            let state = SurfaceState::new(data, title.clone(), cli.camera());
            app::show(&title, cli.output.size(), SurfaceApp { state })?;
        }
    }

    Ok(())
}
