//! Displays the centered power spectrum of a small 2-D matrix

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use power_spectrum::render::{Colormap, DisplaySurface, PngWriter, TerminalViewer, TerminalViewerConfig};
use power_spectrum::spectrum::{RendererConfig, SpectrumRenderer, ValueScale};
use power_spectrum::Signal;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColormapArg {
    Viridis,
    Grayscale,
    Copper,
}

impl From<ColormapArg> for Colormap {
    fn from(arg: ColormapArg) -> Self {
        match arg {
            ColormapArg::Viridis => Colormap::Viridis,
            ColormapArg::Grayscale => Colormap::Grayscale,
            ColormapArg::Copper => Colormap::Copper,
        }
    }
}

/// Power spectrum of a 2-D matrix, zero frequency at the center
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Matrix literal, rows separated by ';' (default: the 2x2 identity)
    #[arg(short, long)]
    matrix: Option<String>,

    /// Color map
    #[arg(short, long, value_enum, default_value_t = ColormapArg::Viridis)]
    colormap: ColormapArg,

    /// Color-map power in dB instead of linear power
    #[arg(long)]
    db: bool,

    /// Terminal glyphs per cell horizontally
    #[arg(long, default_value_t = 8)]
    cell_width: usize,

    /// Terminal lines per cell vertically
    #[arg(long, default_value_t = 4)]
    cell_height: usize,

    /// Also write the image to this file (PNG)
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Pixels per cell in the saved image
    #[arg(long, default_value_t = 64)]
    pixel_size: usize,

    /// Return immediately instead of waiting for a key press
    #[arg(long)]
    no_wait: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let signal = match &args.matrix {
        Some(text) => Signal::parse_matrix(text)
            .with_context(|| format!("Invalid matrix literal '{}'", text))?,
        None => Signal::identity_2x2(),
    };
    info!("Input signal shape {:?}", signal.shape());

    let mut renderer = SpectrumRenderer::new(RendererConfig {
        colormap: args.colormap.into(),
        scale: if args.db { ValueScale::Decibel } else { ValueScale::Linear },
        ..RendererConfig::default()
    });

    let raster = renderer
        .rasterize(&signal)
        .context("Failed to compute power spectrum")?;

    if let Some(path) = &args.save {
        PngWriter::new(path, args.pixel_size)
            .show(&raster)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    let mut viewer = TerminalViewer::new(TerminalViewerConfig {
        cell_width: args.cell_width,
        cell_height: args.cell_height,
        wait_for_dismiss: !args.no_wait,
    });
    viewer
        .show(&raster)
        .context("Failed to display power spectrum")?;

    Ok(())
}
