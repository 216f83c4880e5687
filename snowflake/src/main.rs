extern crate clap;
extern crate env_logger;
extern crate snowflake;

#[macro_use] extern crate log;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use snowflake::errors::{ErrorKind, Result};
use snowflake::{Automaton, Params};

/// Simulate snowflake growth and print the final density lattice.
#[derive(Parser, Debug)]
#[command(name = "snowflake", version, allow_negative_numbers = true)]
struct Args {
    /// Side length of the square lattice
    size: usize,
    /// Number of steps to simulate
    iterations: usize,
    /// Diffusion constant
    alpha: f64,
    /// Background vapour density
    beta: f64,
    /// Vapour added to receptive cells each step
    gamma: f64,
    /// Write the lattice here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let params = Params {
        size: args.size,
        iterations: args.iterations,
        alpha: args.alpha,
        beta: args.beta,
        gamma: args.gamma,
    };
    info!("simulating {:?}", params);
    let mut automaton = Automaton::new(params)?;
    let lattice = automaton.run();

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|cause| ErrorKind::Io { path: path.display().to_string(), cause })?;
            lattice.write_to(BufWriter::new(file))?;
            info!("wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            lattice.write_to(BufWriter::new(stdout.lock()))?;
        }
    }
    Ok(())
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
