//! line-raster: draw line segments into a pixel buffer.
//!
//! Renders a YAML scene and/or ad-hoc `--line` segments to a PNG file or to
//! the terminal.
//!
//! Run: `line-raster scene.yaml -o out.png`
//!      `line-raster --width 40 --height 20 --line 0,0,39,19 --preview`

#![cfg_attr(test, allow(clippy::unwrap_used))]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use line_raster::color::Color;
use line_raster::geometry::Segment;
use line_raster::output::{PngEncoder, TerminalEncoder, TerminalMode};
use line_raster::scene::{ItemReport, Scene};

/// line-raster: integer line rasterizer
#[derive(Parser, Debug)]
#[command(name = "line-raster")]
#[command(version)]
#[command(about = "Rasterize line segments into a PNG or a terminal preview", long_about = None)]
struct Cli {
    /// Scene file (YAML)
    scene: Option<PathBuf>,

    /// Extra segment as x0,y0,x1,y1 (repeatable)
    #[arg(short, long = "line", value_parser = parse_segment, allow_hyphen_values = true)]
    lines: Vec<Segment>,

    /// Write the result to a PNG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the result to the terminal
    #[arg(short, long)]
    preview: bool,

    /// Use 24-bit color half blocks for the preview
    #[arg(long)]
    color_preview: bool,

    /// Buffer width, overrides the scene
    #[arg(long)]
    width: Option<u32>,

    /// Buffer height, overrides the scene
    #[arg(long)]
    height: Option<u32>,

    /// Color of --line segments (#RRGGBB or #RRGGBBAA)
    #[arg(short, long, default_value = "#000000", value_parser = parse_color)]
    color: Color,

    /// Background color, overrides the scene
    #[arg(short, long, value_parser = parse_color)]
    background: Option<Color>,

    /// Suppress warnings about clipped segments
    #[arg(short, long)]
    quiet: bool,
}

fn parse_color(s: &str) -> std::result::Result<Color, String> {
    s.parse().map_err(|e: line_raster::Error| e.to_string())
}

fn parse_segment(s: &str) -> std::result::Result<Segment, String> {
    let coords = s
        .split(',')
        .map(|part| part.trim().parse::<i32>().map_err(|e| format!("{part:?}: {e}")))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    match coords.as_slice() {
        &[x0, y0, x1, y1] => Ok(Segment::from_coords(x0, y0, x1, y1)),
        _ => Err(format!("expected x0,y0,x1,y1, got {} values", coords.len())),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut scene = match &cli.scene {
        Some(path) => Scene::load(path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => Scene::new(),
    };

    scene = scene.with_dimensions(cli.width, cli.height);
    if let Some(background) = cli.background {
        scene.background = background;
    }
    for segment in &cli.lines {
        scene.push_segment(*segment, cli.color);
    }

    if scene.segments.is_empty() && scene.polylines.is_empty() && !cli.quiet {
        eprintln!("warning: nothing to draw");
    }

    let (buffer, reports) = scene.render()?;

    if !cli.quiet {
        warn_clipped(&reports);
    }

    if let Some(path) = &cli.output {
        PngEncoder::write_to_file(&buffer, path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if cli.preview || cli.output.is_none() {
        let mode = if cli.color_preview {
            TerminalMode::UnicodeHalfBlock
        } else {
            TerminalMode::Ascii
        };
        print!("{}", TerminalEncoder::new().mode(mode).render(&buffer));
    }

    Ok(())
}

fn warn_clipped(reports: &[ItemReport]) {
    for item in reports {
        if let Some(first) = item.report.first_out_of_bounds() {
            eprintln!(
                "warning: {}: skipped {} pixel(s), first at ({}, {})",
                item.label,
                item.report.skipped(),
                first.x,
                first.y
            );
        }
    }
}
