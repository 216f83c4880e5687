extern crate colorizers;
extern crate plotter;

use std::env;
use std::path::Path;

use colorizers::{Colorizer, SimpleScale};
use plotter::matrix::Matrix;

static MATRIX_IN: &'static str = "out.txt";
static IMAGE_OUT: &'static str = "raw.png";

// One pixel per cell, densities scaled by a fixed factor instead of min/max.
fn main() {
    let args: Vec<String> = env::args().collect();
    let input = args.get(1).map(|s| s.as_str()).unwrap_or(MATRIX_IN);
    let scale: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(128.0);

    let matrix = Matrix::load(Path::new(input)).unwrap();
    println!("matrix: {}", matrix.dims());

    let size = (matrix.cols() as u32, matrix.rows() as u32);
    let colorizer = SimpleScale::new(0.0, scale);
    let imgbuf = colorizer.colorize(matrix.data(), size).unwrap();

    plotter::output::save(&imgbuf, IMAGE_OUT, 100).unwrap();
}
