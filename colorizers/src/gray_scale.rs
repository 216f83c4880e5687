use super::{pixel_count, Colorizer, ImageBuffer};
use image::Luma;
use num_traits::cast::ToPrimitive;

/// Number of entries in a colormap lookup table.
const LUT_SIZE: usize = 256;

/// Linear gray colormaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrayMap {
    /// Black for the lowest value, white for the highest.
    GistGray,
    /// White for the lowest value, black for the highest.
    GistYarg,
}

impl GrayMap {
    pub fn from_name(name: &str) -> Option<GrayMap> {
        match name {
            "gist_gray" | "gray" => Some(GrayMap::GistGray),
            "gist_yarg" | "gray_r" => Some(GrayMap::GistYarg),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            GrayMap::GistGray => "gist_gray",
            GrayMap::GistYarg => "gist_yarg",
        }
    }

    /// Gray level for a normalised value. Values outside `[0, 1]` are clipped.
    pub fn shade(&self, t: f64) -> u8 {
        let t = if t.is_nan() { 0.0 } else { t.max(0.0).min(1.0) };
        // same binning as a 256 entry lookup table: 1.0 lands in the last bin
        let bin = ((t * LUT_SIZE as f64) as usize).min(LUT_SIZE - 1) as u8;
        match *self {
            GrayMap::GistGray => bin,
            GrayMap::GistYarg => u8::max_value() - bin,
        }
    }
}

impl Default for GrayMap {
    fn default() -> Self {
        GrayMap::GistGray
    }
}

/// Smallest and largest finite value of `input`, or `None` if there is none.
pub fn value_range<T: ToPrimitive + Copy>(input: &[T]) -> Option<(f64, f64)> {
    input
        .iter()
        .filter_map(|x| x.to_f64())
        .filter(|x| x.is_finite())
        .fold(None, |range, x| match range {
            None => Some((x, x)),
            Some((l, h)) => Some((l.min(x), h.max(x))),
        })
}

/// Fixed mapping `gray = (x - offset) * scale`, saturating at 0 and 255.
#[derive(Debug, Clone, Copy)]
pub struct SimpleScale<T: PartialOrd> {
    offset: T,
    scale: T,
}

impl <T: PartialOrd> SimpleScale<T> {
    pub fn new(offset: T, scale: T) -> Self {
        SimpleScale { offset, scale }
    }
}

impl <T> Colorizer<T, Luma<u8>> for SimpleScale<T> where T: PartialOrd + ToPrimitive + Copy {
    fn colorize(&self, input: &[T], size: (u32, u32)) -> Option<ImageBuffer<Luma<u8>, Vec<u8>>> {
        if pixel_count(size)? != input.len() {
            return None;
        }
        let offset = self.offset.to_f64()?;
        let scale = self.scale.to_f64()?;
        let vec = input
            .iter()
            .map(|&x| {
                let v = (x.to_f64().unwrap_or(0.0) - offset) * scale;
                if v.is_nan() { 0 } else { v.max(0.0).min(255.0) as u8 }
            })
            .collect::<Vec<_>>();
        ImageBuffer::from_raw(size.0, size.1, vec)
    }
}

/// Stretches the finite value range of the input over the whole colormap.
///
/// A constant input maps every value to the bottom of the colormap. NaN
/// values get the `bad` shade.
#[derive(Debug, Clone, Copy)]
pub struct MinMaxScale {
    map: GrayMap,
    bad: u8,
}

impl MinMaxScale {
    pub fn new() -> Self {
        MinMaxScale { map: GrayMap::default(), bad: u8::max_value() }
    }

    pub fn with_map(self, map: GrayMap) -> Self {
        MinMaxScale { map, ..self }
    }

    pub fn with_bad(self, bad: u8) -> Self {
        MinMaxScale { bad, ..self }
    }
}

impl Default for MinMaxScale {
    fn default() -> Self {
        MinMaxScale::new()
    }
}

impl <T> Colorizer<T, Luma<u8>> for MinMaxScale where T: ToPrimitive + Copy {
    fn colorize(&self, input: &[T], size: (u32, u32)) -> Option<ImageBuffer<Luma<u8>, Vec<u8>>> {
        if pixel_count(size)? != input.len() {
            return None;
        }

        let (min, max) = value_range(input).unwrap_or((0.0, 0.0));
        let span = max - min;

        let vec = input
            .iter()
            .map(|&x| match x.to_f64() {
                Some(v) if v.is_nan() => self.bad,
                Some(v) if span > 0.0 => self.map.shade((v - min) / span),
                Some(v) if v == f64::INFINITY => self.map.shade(1.0),
                Some(_) => self.map.shade(0.0),
                None => self.bad,
            })
            .collect::<Vec<_>>();
        ImageBuffer::from_raw(size.0, size.1, vec)
    }
}
