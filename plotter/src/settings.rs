use std::path::{Path, PathBuf};

use colorizers::GrayMap;
use config::{Config, Environment, File};

use crate::errors::*;

/// Name of the optional settings file looked up in the working directory.
pub const CONFIG_NAME: &str = "plotter";
/// Prefix of the environment variables that override settings.
pub const ENV_PREFIX: &str = "PLOTTER";
/// Largest canvas side, in pixels, the renderer will allocate.
pub const MAX_CANVAS_SIDE: u32 = 16384;

/// Everything the plot pipeline can be told.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Matrix text file.
    pub input: PathBuf,
    /// Image file, format chosen by its extension.
    pub output: PathBuf,
    pub title: String,
    /// Side length of the square figure in inches.
    pub figsize: f64,
    pub dpi: u32,
    /// Title size in points.
    pub font_size: f64,
    /// JPEG quality, 1 to 100.
    pub quality: u8,
    pub colormap: String,
    /// Open the saved image in a viewer.
    pub show: bool,
    /// Title font. The bundled DejaVu Sans is used when unset.
    pub font: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            input: PathBuf::from("out.txt"),
            output: PathBuf::from("im.jpg"),
            title: "display of density".to_owned(),
            figsize: 8.0,
            dpi: 100,
            font_size: 12.0,
            quality: 75,
            colormap: GrayMap::GistGray.name().to_owned(),
            show: true,
            font: None,
        }
    }
}

impl Settings {
    /// Layers defaults, the settings file and `PLOTTER_*` environment variables.
    ///
    /// Without an explicit `file`, `plotter.toml` (or any other format the
    /// config crate knows) is used if present in the working directory.
    pub fn load(file: Option<&Path>) -> Result<Settings> {
        let builder = Config::builder();
        let builder = match file {
            Some(path) => {
                debug!("reading settings from {}", path.display());
                builder.add_source(File::from(path).required(true))
            }
            None => builder.add_source(File::with_name(CONFIG_NAME).required(false)),
        };
        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize::<Settings>())
            .map_err(ErrorKind::ConfigError)?;
        Ok(settings)
    }

    /// Checks the values the renderer and encoder rely on.
    pub fn validate(&self) -> Result<()> {
        if !(self.figsize.is_finite() && self.figsize > 0.0) {
            return Err(invalid("figsize", format!("{} is not a positive size", self.figsize)));
        }
        if self.dpi == 0 {
            return Err(invalid("dpi", "must be at least 1".to_owned()));
        }
        if self.quality == 0 || self.quality > 100 {
            return Err(invalid("quality", format!("{} is outside 1..=100", self.quality)));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(invalid("font_size", format!("{} is not a positive size", self.font_size)));
        }
        if self.canvas_side() == 0 {
            return Err(invalid("figsize", "figure is smaller than one pixel".to_owned()));
        }
        let side = self.figsize * f64::from(self.dpi);
        if side.round() > f64::from(MAX_CANVAS_SIDE) {
            return Err(invalid(
                "figsize",
                format!("{}in at {} dpi is wider than {}px", self.figsize, self.dpi, MAX_CANVAS_SIDE),
            ));
        }
        self.gray_map()?;
        Ok(())
    }

    pub fn gray_map(&self) -> Result<GrayMap> {
        GrayMap::from_name(&self.colormap)
            .ok_or_else(|| invalid("colormap", format!("unknown colormap `{}`", self.colormap)))
    }

    /// Width and height of the rendered canvas in pixels.
    pub fn canvas_side(&self) -> u32 {
        (self.figsize * f64::from(self.dpi)).round() as u32
    }

    /// Converts a length in points to pixels at the configured dpi.
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }
}

fn invalid(key: &'static str, reason: String) -> failure::Error {
    ErrorKind::InvalidSetting { key, reason }.into()
}
