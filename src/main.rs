use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use sketchpad::config::Config;
use sketchpad::export::{self, ExportFormat, ExportSettings};
use sketchpad::input::{Action, DrawingController, Script};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Raster drawing canvas with live shape preview")]
struct Cli {
    /// Replay input events from a JSON script
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Config file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Directory exported images are written to
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Export format (png or jpeg)
    #[arg(long, short = 'f', value_name = "FORMAT")]
    format: Option<ExportFormat>,

    /// Export the canvas once the script (if any) has been replayed
    #[arg(long, short = 'e', action = ArgAction::SetTrue)]
    export: bool,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["script", "export"])]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }

    if cli.script.is_none() && !cli.export {
        // No work requested: show usage
        println!("sketchpad: Raster drawing canvas with live shape preview");
        println!();
        println!("Usage:");
        println!("  sketchpad --script strokes.json      Replay a recorded event script");
        println!("  sketchpad --script s.json --export   Replay, then export the result");
        println!("  sketchpad --export                   Export a blank canvas");
        println!("  sketchpad --init-config              Write ~/.config/sketchpad/config.toml");
        println!("  sketchpad --help                     Show all options");
        println!();
        println!("Script events:");
        println!("  pointer-down {{x, y}}, pointer-move {{x, y}}, pointer-up,");
        println!("  select-tool {{tool}}, set-style {{color, line_width, fill_enabled, ...}},");
        println!("  clear, export");
        println!();
        println!("Tools: brush, eraser, rectangle, circle, triangle, line");
        return Ok(());
    }

    run(&cli)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    if let Some(format) = cli.format {
        config.export.format = format;
    }
    config.validate_and_clamp();

    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let settings = config.export_settings();
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config.export.directory_path());

    let mut controller =
        DrawingController::from_config(&config).context("Failed to create drawing surface")?;
    log::info!(
        "Canvas ready: {}x{}, tool {}",
        controller.width(),
        controller.height(),
        controller.tool()
    );

    if let Some(path) = &cli.script {
        let script = Script::load(path)?;
        for event in &script.events {
            if let Some(Action::Export) = controller.apply(event) {
                save(&controller, &settings, &output_dir)?;
            }
        }
        if controller.is_drawing() {
            log::warn!("Script ended with the pointer still down; keeping the last frame");
            controller.end_stroke();
        }
    }

    if cli.export {
        save(&controller, &settings, &output_dir)?;
    }

    Ok(())
}

fn save(controller: &DrawingController, settings: &ExportSettings, dir: &Path) -> Result<()> {
    let image = controller
        .export(settings)
        .context("Failed to encode canvas")?;
    let path = export::save_export(&image, dir)
        .with_context(|| format!("Failed to save export to {}", dir.display()))?;
    println!("Saved {}", path.display());
    Ok(())
}
