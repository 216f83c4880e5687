extern crate image;
extern crate num_traits;

pub use image::{Pixel, ImageBuffer};

pub mod gray_scale;

pub use gray_scale::{value_range, GrayMap, MinMaxScale, SimpleScale};

/// Turns a row-major raster of values into an image of `size` (width, height).
pub trait Colorizer<I, O: Pixel> {
    /// Returns `None` if `input` does not hold exactly `size.0 * size.1` values.
    fn colorize(&self, input: &[I], size: (u32, u32)) -> Option<ImageBuffer<O, Vec<O::Subpixel>>>;
}

fn pixel_count(size: (u32, u32)) -> Option<usize> {
    (size.0 as usize).checked_mul(size.1 as usize)
}
