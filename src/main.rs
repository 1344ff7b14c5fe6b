//////////////////////////////////////////////////////////////////////
// command line front end: build a tiling, then write whatever
// listings/renderings were asked for

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::fmt::SubscriberBuilder;

#[macro_use]
extern crate error_chain;

use penrose_rs::errors::*;
use penrose_rs::render::{RenderSettings, Viewport};
use penrose_rs::{listing, seeds, tiling};

#[derive(Parser)]
#[command(name = "penrose")]
#[command(about = "Generate Penrose P3 tilings by triangle subdivision")]
struct Cmd {

    /// Number of subdivision generations
    #[arg(allow_negative_numbers = true)]
    depth: i64,

    /// Starting configuration
    #[arg(long, default_value = "sun")]
    seed: String,

    /// Start from a triangle listing instead of a named seed
    #[arg(long, conflicts_with = "seed")]
    load: Option<PathBuf>,

    /// Write a rendering (.pdf or .png)
    #[arg(long)]
    render: Option<PathBuf>,

    /// Canvas edge in points (pdf) or pixels (png)
    #[arg(long, default_value_t = penrose_rs::render::DEFAULT_SIZE)]
    size: f64,

    /// Stroke width on the canvas
    #[arg(long, default_value_t = penrose_rs::render::DEFAULT_LINE_WIDTH)]
    line_width: f64,

    /// Fit the view to the tiling instead of [-1, 1] x [-1, 1]
    #[arg(long)]
    fit: bool,

    /// Write the deduplicated vertices here
    #[arg(long)]
    points: Option<PathBuf>,

    /// Write the final triangles here
    #[arg(long)]
    triangles: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

}

fn init_logging(verbose: u8) {

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE
    };

    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

}

fn load_triangles(path: &Path) -> Result<Vec<tiling::Triangle>> {

    let f = File::open(path)
        .chain_err(|| format!("can't open {:}", path.display()))?;

    listing::read_triangles(BufReader::new(f))
        .chain_err(|| format!("reading {:}", path.display()))

}

fn create(path: &Path) -> Result<BufWriter<File>> {

    let f = File::create(path)
        .chain_err(|| format!("can't create {:}", path.display()))?;

    Ok(BufWriter::new(f))

}

//////////////////////////////////////////////////////////////////////

fn run() -> Result<()> {

    let cmd = Cmd::parse();

    init_logging(cmd.verbose);

    let depth = tiling::validate_depth(cmd.depth)?;

    let seed = match &cmd.load {
        Some(path) => load_triangles(path)?,
        None => seeds::seed_by_name(&cmd.seed)?
    };

    info!(seed = %cmd.seed, triangles = seed.len(), depth, "starting");

    let settings = match &cmd.render {

        None => None,

        Some(path) => {
            let mut settings = RenderSettings::new(path)?;
            settings.size = cmd.size;
            settings.line_width = cmd.line_width;
            if cmd.fit {
                settings.viewport = Viewport::Fit;
            }
            Some(settings)
        }

    };

    let pt = tiling::build_from(seed, depth, settings.as_ref())?;

    if let Some(path) = &cmd.points {
        let mut w = create(path)?;
        listing::write_points(&mut w, &pt.points)?;
        w.flush()?;
        info!(path = %path.display(), "wrote points");
    }

    if let Some(path) = &cmd.triangles {
        let mut w = create(path)?;
        listing::write_triangles(&mut w, &pt.triangles)?;
        w.flush()?;
        info!(path = %path.display(), "wrote triangles");
    }

    let (small, large) = tiling::count_kinds(&pt.triangles);

    println!("depth {:}: {:} triangles ({:} small, {:} large), {:} points",
             depth, pt.triangles.len(), small, large, pt.points.len());

    if let Some(path) = &cmd.render {
        println!("wrote {:}", path.display());
    }

    Ok(())

}

quick_main!(run);
