use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;

use promoreel::{Composition, FrameIndex, fingerprint_tree};

#[derive(Parser, Debug)]
#[command(name = "promoreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print composition metadata and scene windows.
    Info(InfoArgs),
    /// Evaluate one frame and print its visual tree as JSON.
    Eval(EvalArgs),
    /// Print frame fingerprints for regression comparison.
    Fingerprint(FingerprintArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Composition id.
    #[arg(long, default_value = "promo")]
    comp: String,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Composition id.
    #[arg(long, default_value = "promo")]
    comp: String,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct FingerprintArgs {
    /// Composition id.
    #[arg(long, default_value = "promo")]
    comp: String,

    /// Single frame to fingerprint; omit to fingerprint every frame.
    #[arg(long)]
    frame: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Eval(args) => cmd_eval(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let comp = Composition::find(&args.comp)?;
    println!("composition: {}", comp.id);
    println!(
        "format:      {}x{} @ {} fps",
        comp.canvas.width,
        comp.canvas.height,
        comp.fps.get()
    );
    println!(
        "length:      {} frames ({:.2}s)",
        comp.total_frames(),
        comp.fps.frames_to_secs(comp.total_frames() as f64)
    );
    println!("scenes:");
    for (scene, window) in comp
        .timeline()
        .scenes()
        .iter()
        .zip(comp.timeline().windows())
    {
        println!(
            "  {:<12} [{:>4}, {:>4})  {} frames",
            scene.id, window.start.0, window.end.0, scene.duration_frames
        );
    }
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let comp = Composition::find(&args.comp)?;
    let tree = comp.render_frame(FrameIndex(args.frame))?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&tree)
    } else {
        serde_json::to_string(&tree)
    }
    .context("serializing frame tree")?;
    println!("{json}");
    Ok(())
}

fn cmd_fingerprint(args: FingerprintArgs) -> anyhow::Result<()> {
    let comp = Composition::find(&args.comp)?;
    match args.frame {
        Some(frame) => {
            let tree = comp.render_frame(FrameIndex(frame))?;
            println!("{frame} {}", fingerprint_tree(&tree));
        }
        None => {
            // Frames are independent; fingerprint them in parallel, print in
            // order.
            let fingerprints = (0..comp.total_frames())
                .into_par_iter()
                .map(|frame| {
                    comp.render_frame(FrameIndex(frame))
                        .map(|tree| fingerprint_tree(&tree))
                })
                .collect::<Result<Vec<_>, _>>()?;
            for (frame, fp) in fingerprints.iter().enumerate() {
                println!("{frame} {fp}");
            }
        }
    }
    Ok(())
}
