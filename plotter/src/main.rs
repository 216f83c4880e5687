extern crate clap;
extern crate env_logger;
extern crate plotter;

#[macro_use] extern crate log;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use plotter::errors::Result;
use plotter::settings::Settings;

/// Render a numeric matrix file as a grayscale density image.
#[derive(Parser, Debug)]
#[command(name = "plotter", version)]
struct Args {
    /// Matrix file, one row per line [default: out.txt]
    input: Option<PathBuf>,
    /// Image to write; the extension selects the format [default: im.jpg]
    output: Option<PathBuf>,
    /// Figure title
    #[arg(long)]
    title: Option<String>,
    /// Pixels per inch of the 8x8 inch figure
    #[arg(long)]
    dpi: Option<u32>,
    /// JPEG quality (1-100)
    #[arg(long)]
    quality: Option<u8>,
    /// gist_gray or gist_yarg
    #[arg(long)]
    colormap: Option<String>,
    /// TrueType/OpenType font for the title
    #[arg(long)]
    font: Option<PathBuf>,
    /// Only write the image, do not open a viewer
    #[arg(long)]
    no_show: bool,
    /// Settings file [default: ./plotter.toml when present]
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(input) = self.input {
            settings.input = input;
        }
        if let Some(output) = self.output {
            settings.output = output;
        }
        if let Some(title) = self.title {
            settings.title = title;
        }
        if let Some(dpi) = self.dpi {
            settings.dpi = dpi;
        }
        if let Some(quality) = self.quality {
            settings.quality = quality;
        }
        if let Some(colormap) = self.colormap {
            settings.colormap = colormap;
        }
        if self.font.is_some() {
            settings.font = self.font;
        }
        if self.no_show {
            settings.show = false;
        }
        settings
    }
}

fn run(args: Args) -> Result<()> {
    let settings = Settings::load(args.config.as_ref().map(|p| p.as_path()))?;
    let settings = args.apply(settings);
    plotter::run(&settings)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        for cause in e.iter_causes() {
            error!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
