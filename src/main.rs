// src/main.rs
//
// Plot one coordinate file, or two overlaid, as paths with direction
// arrows.

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pathplot::{
    coords::read_coordinates,
    directions::{ArrowHead, Directions},
    plt,
    style::Style,
    PlotConfig,
};

#[derive(Parser)]
#[command(name = "pathplot")]
#[command(about = "Plot coordinate files as paths with direction arrows")]
struct Args {
    /// Coordinate file, one `label label x=.. y=..` record per line
    #[arg(default_value = "coordinates.txt")]
    file: PathBuf,

    /// Second coordinate file drawn on the same axes
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Style token of the first file (marker and color)
    #[arg(long)]
    style: Option<String>,

    /// Style token of the overlaid file
    #[arg(long)]
    overlay_style: Option<String>,

    /// Join points with plain lines instead of arrows
    #[arg(long, conflicts_with = "arrows")]
    lines: bool,

    /// Keep arrowheads when overlaying two files
    #[arg(long)]
    arrows: bool,

    /// Write the figure to this file instead of opening a window
    #[arg(long)]
    save: Option<PathBuf>,

    /// Resolution of the saved figure
    #[arg(long, requires = "save")]
    dpi: Option<f64>,
}

impl Args {
    fn head(&self, config: &PlotConfig) -> ArrowHead {
        // Overlays join points with plain lines unless asked otherwise.
        if self.lines || (self.overlay.is_some() && !self.arrows) {
            ArrowHead::NONE
        } else {
            config.head
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut config = PlotConfig::default();
    if let Some(s) = &args.style {
        config.style = s.clone();
    }
    if let Some(s) = &args.overlay_style {
        config.overlay_style = s.clone();
    }

    // Read everything before drawing anything.
    let mut series = vec![(args.file.clone(), config.style.as_str())];
    if let Some(overlay) = &args.overlay {
        series.push((overlay.clone(), config.overlay_style.as_str()));
    }
    let mut loaded = Vec::with_capacity(series.len());
    for (path, style) in &series {
        let seq = read_coordinates(path)
            .with_context(|| format!("cannot load {}", path.display()))?;
        let style: Style = style.parse()
            .with_context(|| format!("invalid style {:?}", style))?;
        info!("{}: {} points", path.display(), seq.len());
        loaded.push((path.display().to_string(), seq, style));
    }

    let head = args.head(&config);
    let fig = plt::figure(Some(config.figsize))?;
    let mut ax = fig.subplot()?;
    for (name, seq, style) in &loaded {
        let mut directions = Directions::new(style).head(head);
        if loaded.len() > 1 {
            directions = directions.label(name);
        } else {
            directions = directions.arrow_color(&config.arrow_color);
        }
        directions.plot(&mut ax, seq)
            .with_context(|| format!("cannot plot {}", name))?;
    }
    config.apply(&mut ax)?;
    if loaded.len() > 1 {
        ax.legend()?;
    }

    match &args.save {
        Some(path) => {
            let mut save = fig.save();
            if let Some(dpi) = args.dpi {
                save.dpi(dpi);
            }
            save.to_file(path)
                .with_context(|| format!("cannot save {}", path.display()))?;
            info!("saved {}", path.display());
        }
        None => plt::show()?,
    }
    Ok(())
}
