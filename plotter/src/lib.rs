extern crate ab_glyph;
extern crate colorizers;
extern crate config;
extern crate image;
extern crate imageproc;
extern crate open;
extern crate serde;

extern crate failure;
#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;

pub mod errors;
pub mod figure;
pub mod matrix;
pub mod output;
pub mod settings;
pub mod viewer;

use errors::Result;
use figure::Figure;
use matrix::Matrix;
use settings::Settings;

/// Loads the matrix, renders it, saves the image and shows it.
///
/// The first failing step aborts the run; nothing is retried.
pub fn run(settings: &Settings) -> Result<()> {
    settings.validate()?;

    let matrix = Matrix::load(&settings.input)?;
    info!("loaded {} matrix from {}", matrix.dims(), settings.input.display());
    if let Some((min, max)) = colorizers::value_range(matrix.data()) {
        debug!("value range: {} to {}", min, max);
    }

    let figure = Figure::new(settings)?;
    let image = figure.render(&matrix)?;

    output::save(&image, &settings.output, settings.quality)?;
    info!("saved {}", settings.output.display());

    if settings.show {
        viewer::show(&settings.output);
    }
    Ok(())
}
