mod cli;
mod replay;

use std::path::Path;

use clap::Parser;

use isogrid_core::{TileGrid, CATEGORY_COLORS};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();
    match cli.command {
        cli::Command::Replay { script, summary } => run_replay(Path::new(&script), summary),
        cli::Command::Scene => {
            print_scene();
            Ok(())
        }
    }
}

fn run_replay(path: &Path, summary: bool) -> anyhow::Result<()> {
    let script = replay::load(path)?;
    log::info!(
        "replaying {} steps at {}x{}",
        script.frames.len(),
        script.width,
        script.height
    );

    let reports = replay::run(&script);
    let shown: &[replay::FrameReport] = if summary {
        reports.last().map(std::slice::from_ref).unwrap_or(&[])
    } else {
        &reports
    };
    for report in shown {
        println!(
            "frame {:4}  target ({:+.4}, {:+.4})  position ({:+.4}, {:+.4})  highlighted {} ({:?})",
            report.frame,
            report.target.0,
            report.target.1,
            report.position.0,
            report.position.1,
            report.highlighted,
            report.mode,
        );
    }
    Ok(())
}

fn print_scene() {
    let grid = TileGrid::new();
    println!("tile categories (row-major):");
    for row in 0..isogrid_core::GRID_SIZE {
        let line: String = (0..isogrid_core::GRID_SIZE)
            .map(|col| {
                char::from_digit(grid.category(isogrid_core::GridCell { row, col }) as u32, 10)
                    .unwrap_or('?')
            })
            .collect();
        println!("  {line}");
    }
    println!("category colors (linear rgba):");
    for (id, color) in CATEGORY_COLORS.iter().enumerate() {
        println!("  {id}: {color:?}");
    }
}
