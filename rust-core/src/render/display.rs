//! Display surfaces for rendered rasters
//!
//! `TerminalViewer` draws the raster with ratatui and blocks until a key is
//! pressed; `PngWriter` paints it through a plotters bitmap backend.

use super::colormap::Raster;
use crate::error::{Result, SpectrumError};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Terminal, TerminalOptions, Viewport};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Largest saved image side, in pixels
pub const MAX_IMAGE_SIDE: usize = 16384;

/// Something a raster can be shown on
pub trait DisplaySurface {
    fn show(&mut self, raster: &Raster) -> Result<()>;
}

/// Terminal viewer configuration
#[derive(Debug, Clone)]
pub struct TerminalViewerConfig {
    /// Glyphs per cell horizontally
    pub cell_width: usize,

    /// Lines per cell vertically
    pub cell_height: usize,

    /// Block until a key is pressed
    pub wait_for_dismiss: bool,
}

impl Default for TerminalViewerConfig {
    fn default() -> Self {
        Self {
            // Terminal glyphs are roughly twice as tall as wide
            cell_width: 8,
            cell_height: 4,
            wait_for_dismiss: true,
        }
    }
}

/// Build the styled lines for a raster: one colored span per cell
pub fn raster_lines(raster: &Raster, config: &TerminalViewerConfig) -> Vec<Line<'static>> {
    let cell_width = config.cell_width.max(1);
    let cell_height = config.cell_height.max(1);
    let mut lines = Vec::with_capacity(raster.height() * cell_height + 2);

    for row in raster.rows() {
        let spans: Vec<Span<'static>> = row
            .iter()
            .map(|&[r, g, b]| {
                Span::styled("█".repeat(cell_width), Style::default().fg(Color::Rgb(r, g, b)))
            })
            .collect();
        let line = Line::from(spans);

        for _ in 0..cell_height {
            lines.push(line.clone());
        }
    }

    let (vmin, vmax) = raster.range();
    lines.push(Line::from(format!(
        "{}x{} cells, range [{:.6e}, {:.6e}]",
        raster.height(),
        raster.width(),
        vmin,
        vmax
    )));
    if config.wait_for_dismiss {
        lines.push(Line::from("Press any key to close"));
    }

    lines
}

/// Draw prepared lines onto any ratatui terminal
pub fn draw_lines<B: Backend>(terminal: &mut Terminal<B>, lines: Vec<Line<'static>>) -> io::Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        frame.render_widget(Paragraph::new(lines), area);
    })?;
    Ok(())
}

/// Restores cooked mode when dropped, also on early return
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Blocking viewer drawing inline in the terminal
pub struct TerminalViewer {
    config: TerminalViewerConfig,
}

impl TerminalViewer {
    pub fn new(config: TerminalViewerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TerminalViewerConfig {
        &self.config
    }
}

impl DisplaySurface for TerminalViewer {
    fn show(&mut self, raster: &Raster) -> Result<()> {
        let lines = raster_lines(raster, &self.config);
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

        {
            let _raw = if self.config.wait_for_dismiss {
                Some(RawModeGuard::enable()?)
            } else {
                None
            };

            let mut terminal = Terminal::with_options(
                CrosstermBackend::new(io::stdout()),
                TerminalOptions {
                    viewport: Viewport::Inline(height),
                },
            )?;
            draw_lines(&mut terminal, lines)?;

            if self.config.wait_for_dismiss {
                wait_for_key()?;
            }
        }

        // Leave the prompt below the image
        writeln!(io::stdout())?;
        Ok(())
    }
}

/// Paint a raster onto a drawing area, one evenly split sub-area per cell
pub fn paint_raster<DB: DrawingBackend>(raster: &Raster, root: &DrawingArea<DB, Shift>) -> Result<()> {
    let cells = root.split_evenly((raster.height(), raster.width()));
    for (cell, pixel) in cells.iter().zip(raster.rows().flatten()) {
        cell.fill(&RGBColor(pixel[0], pixel[1], pixel[2]))
            .map_err(|e| SpectrumError::Plot(e.to_string()))?;
    }
    Ok(())
}

/// Writes rasters as PNG images
pub struct PngWriter {
    path: PathBuf,
    pixel_size: usize,
}

impl PngWriter {
    /// # Arguments
    /// * `path` - Output file
    /// * `pixel_size` - Side length in pixels of the square drawn for each cell
    pub fn new(path: impl Into<PathBuf>, pixel_size: usize) -> Self {
        Self {
            path: path.into(),
            pixel_size: pixel_size.max(1),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Output image size in pixels, bounded by `MAX_IMAGE_SIDE`
    pub fn image_size(&self, raster: &Raster) -> Result<(u32, u32)> {
        let width = raster.width().checked_mul(self.pixel_size);
        let height = raster.height().checked_mul(self.pixel_size);

        match (width, height) {
            (Some(w), Some(h)) if w <= MAX_IMAGE_SIDE && h <= MAX_IMAGE_SIDE => Ok((w as u32, h as u32)),
            _ => Err(SpectrumError::ImageTooLarge {
                width: raster.width().saturating_mul(self.pixel_size),
                height: raster.height().saturating_mul(self.pixel_size),
                max: MAX_IMAGE_SIDE,
            }),
        }
    }
}

impl DisplaySurface for PngWriter {
    fn show(&mut self, raster: &Raster) -> Result<()> {
        let size = self.image_size(raster)?;
        let root = BitMapBackend::new(&self.path, size).into_drawing_area();
        paint_raster(raster, &root)?;
        root.present().map_err(|e| SpectrumError::Plot(e.to_string()))?;

        info!("Wrote {}", self.path.display());
        Ok(())
    }
}
