use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use boost_anim::{Animation, AnimationConfig, DrawList, Driver, JsonLinesEncoder};
use clap::Parser;
use env_logger::Env;

#[derive(Parser, Debug)]
#[command(version, about = "Render Galilean and Lorentz boost animations as frame streams")]
struct Args {
    /// Animations to produce; all three when omitted
    #[arg(short, long, value_enum)]
    animation: Vec<Animation>,

    /// Hold a constant velocity (fraction of c) instead of ramping up
    #[arg(short, long, allow_hyphen_values = true)]
    velocity: Option<f64>,

    /// Output directory for the frame streams
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<usize>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = AnimationConfig::default();
    if let Some(fps) = args.fps {
        config.fps = fps;
    }
    if let Some(dir) = args.out_dir {
        config.out_dir = dir;
    }

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let animations = if args.animation.is_empty() { Animation::ALL.to_vec() } else { args.animation };

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating output directory {}", config.out_dir.display()))?;

    for animation in animations {
        let frames = animation
            .frames(&config, args.velocity, args.frames)
            .with_context(|| format!("building frames for {}", animation.stem()))?;
        let total = frames.len();

        let path = config.out_dir.join(animation.stream_name());
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        let mut encoder = JsonLinesEncoder::new(BufWriter::new(file));
        let mut canvas = DrawList::default();

        log::info!("{}: {} frames -> {}", animation.title(), total, path.display());
        let written = Driver::new(animation, &config)
            .run(frames, &mut canvas, &mut encoder)
            .with_context(|| format!("rendering {}", animation.stem()))?;
        log::info!("done: {} ({} frames)", path.display(), written);
    }

    Ok(())
}
