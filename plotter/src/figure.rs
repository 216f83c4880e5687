use std::convert::TryFrom;
use std::fs;
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use colorizers::{Colorizer, MinMaxScale};
use image::{imageops, GrayImage, Luma};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::errors::*;
use crate::matrix::Matrix;
use crate::settings::Settings;

const BACKGROUND: Luma<u8> = Luma([255]);
const INK: Luma<u8> = Luma([0]);

// axes box as fractions of the figure, measured from the bottom-left corner
const AXES_LEFT: f64 = 0.125;
const AXES_RIGHT: f64 = 0.9;
const AXES_BOTTOM: f64 = 0.11;
const AXES_TOP: f64 = 0.88;

/// Gap between the title and the top of the axes, in points.
const TITLE_PAD: f64 = 6.0;

/// DejaVu Sans, used for the title unless another font is configured.
static BUNDLED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Pixel rectangle on the canvas, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The axes box of a square canvas with side `side`.
pub fn axes_area(side: u32) -> Area {
    let s = f64::from(side);
    let x0 = (AXES_LEFT * s).round() as u32;
    let x1 = (AXES_RIGHT * s).round() as u32;
    let y0 = ((1.0 - AXES_TOP) * s).round() as u32;
    let y1 = ((1.0 - AXES_BOTTOM) * s).round() as u32;
    Area { x: x0, y: y0, width: x1.saturating_sub(x0), height: y1.saturating_sub(y0) }
}

/// Largest area inside `axes` with square cells for a `rows` x `cols`
/// raster, centred in `axes`.
pub fn image_area(axes: Area, rows: u32, cols: u32) -> Area {
    let scale = (f64::from(axes.width) / f64::from(cols)).min(f64::from(axes.height) / f64::from(rows));
    let width = ((f64::from(cols) * scale).round() as u32).max(1).min(axes.width.max(1));
    let height = ((f64::from(rows) * scale).round() as u32).max(1).min(axes.height.max(1));
    Area {
        x: axes.x + (axes.width.saturating_sub(width)) / 2,
        y: axes.y + (axes.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Loads the title font: the configured file, else the bundled DejaVu Sans.
/// A configured font that cannot be used is an error.
pub fn find_font(configured: Option<&Path>) -> Result<FontVec> {
    match configured {
        Some(path) => {
            let font = read_font(path).map_err(|reason| ErrorKind::InvalidSetting { key: "font", reason })?;
            debug!("using title font {}", path.display());
            Ok(font)
        }
        None => Ok(FontVec::try_from_vec(BUNDLED_FONT.to_vec()).map_err(|e| ErrorKind::InvalidSetting {
            key: "font",
            reason: format!("bundled font is unusable: {}", e),
        })?),
    }
}

fn read_font(path: &Path) -> ::std::result::Result<FontVec, String> {
    let bytes = fs::read(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    FontVec::try_from_vec(bytes).map_err(|e| format!("{} is not a usable font: {}", path.display(), e))
}

/// A square figure holding one grayscale image and a title.
pub struct Figure {
    side: u32,
    title: String,
    title_px: f32,
    title_pad: u32,
    colorizer: MinMaxScale,
    font: Option<FontVec>,
}

impl Figure {
    /// Sets up a figure from validated settings, loading the title font.
    pub fn new(settings: &Settings) -> Result<Figure> {
        let font = find_font(settings.font.as_ref().map(|p| p.as_path()))?;
        let colorizer = MinMaxScale::new()
            .with_map(settings.gray_map()?)
            .with_bad(BACKGROUND[0]);
        Ok(Figure {
            side: settings.canvas_side(),
            title: settings.title.clone(),
            title_px: settings.points_to_pixels(settings.font_size) as f32,
            title_pad: settings.points_to_pixels(TITLE_PAD).round() as u32,
            colorizer,
            font: Some(font),
        })
    }

    /// Replaces the title font, `None` draws no title.
    pub fn with_font(self, font: Option<FontVec>) -> Figure {
        Figure { font, ..self }
    }

    /// Where `matrix` lands on the canvas.
    pub fn layout(&self, matrix: &Matrix) -> Result<Area> {
        let (rows, cols) = raster_size(matrix)?;
        Ok(image_area(axes_area(self.side), rows, cols))
    }

    /// Draws the matrix, one square block per cell, framed and titled.
    pub fn render(&self, matrix: &Matrix) -> Result<GrayImage> {
        let (rows, cols) = raster_size(matrix)?;
        let raster = self
            .colorizer
            .colorize(matrix.data(), (cols, rows))
            .ok_or(ErrorKind::Render { dims: matrix.dims() })?;

        let area = image_area(axes_area(self.side), rows, cols);
        debug!("{} matrix drawn at {:?} on a {}px canvas", matrix.dims(), area, self.side);

        // nearest neighbour: each canvas pixel takes the cell it falls in
        let block = GrayImage::from_fn(area.width, area.height, |x, y| {
            let c = ((u64::from(x) * u64::from(cols)) / u64::from(area.width)) as u32;
            let r = ((u64::from(y) * u64::from(rows)) / u64::from(area.height)) as u32;
            *raster.get_pixel(c.min(cols - 1), r.min(rows - 1))
        });

        let mut canvas = GrayImage::from_pixel(self.side, self.side, BACKGROUND);
        imageops::replace(&mut canvas, &block, i64::from(area.x), i64::from(area.y));

        let frame = Rect::at(area.x as i32 - 1, area.y as i32 - 1).of_size(area.width + 2, area.height + 2);
        draw_hollow_rect_mut(&mut canvas, frame, INK);

        self.draw_title(&mut canvas, area);
        Ok(canvas)
    }

    fn draw_title(&self, canvas: &mut GrayImage, area: Area) {
        let font = match (&self.font, self.title.is_empty()) {
            (Some(font), false) => font,
            _ => return,
        };
        let scale = PxScale::from(self.title_px);
        let (w, h) = text_size(scale, font, &self.title);
        let x = (i64::from(self.side) - i64::from(w)) / 2;
        let y = i64::from(area.y) - 1 - i64::from(self.title_pad) - i64::from(h);
        draw_text_mut(canvas, INK, x as i32, y.max(0) as i32, scale, font, &self.title);
    }
}

fn raster_size(matrix: &Matrix) -> Result<(u32, u32)> {
    let too_big = |_| ErrorKind::Render { dims: matrix.dims() };
    let rows = u32::try_from(matrix.rows()).map_err(too_big)?;
    let cols = u32::try_from(matrix.cols()).map_err(too_big)?;
    Ok((rows, cols))
}
