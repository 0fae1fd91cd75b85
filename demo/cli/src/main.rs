// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// room-tess: triangulate a room outline and write a JSON report or an SVG.

mod room;
mod svg;

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use monotess::{ElementType, Point, TessOption, Tessellator, VertexKind};

use crate::room::Room;

#[derive(Parser, Debug)]
#[command(name = "room-tess")]
#[command(about = "Triangulate a room outline by monotone decomposition")]
struct Args {
    /// Room descriptor (JSON).
    room: PathBuf,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Draw the faces as SVG instead of printing a JSON report.
    #[arg(long)]
    svg: bool,

    /// Stop after the monotone decomposition.
    #[arg(long)]
    monotone_only: bool,

    /// Drop obstacles instead of failing on them.
    #[arg(long)]
    ignore_obstacles: bool,

    /// Emit counter-clockwise triangles whatever the room's winding.
    #[arg(long)]
    ccw: bool,

    /// Number of colors to aim for (at least 4).
    #[arg(long, default_value_t = 4)]
    palette: usize,

    /// Pixels per world unit in the SVG.
    #[arg(long, default_value_t = 100.0)]
    scale: f64,

    /// Pixels each SVG face corner moves toward its face centre.
    #[arg(long, default_value_t = 3.72)]
    shrink: f64,

    /// More output per occurrence (warn, info, debug, trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    name: &'a str,
    wu_per_m: f64,
    area_m2: f64,
    clockwise: bool,
    vertices: &'a [Point],
    vertex_kinds: &'a [VertexKind],
    sweep_diagonals: usize,
    monotone_pieces: &'a BTreeMap<u32, Vec<u32>>,
    faces: &'a BTreeMap<u32, Vec<u32>>,
    triangles: &'a [[u32; 3]],
    colors: Option<&'a BTreeMap<u32, usize>>,
}

fn log_filter_from_level(level: u8) -> log::LevelFilter {
    match level {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn init_logging(level: u8) {
    let mut builder = env_logger::builder();
    builder.format(|buf, record| {
        let module = record
            .module_path()
            .and_then(|m| m.split("::").next())
            .unwrap_or("?");
        writeln!(buf, "{:5} [{}]: {}", record.level(), module, record.args())
    });
    builder.filter_level(log_filter_from_level(level)).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let room = Room::load(&args.room)?;

    let mut tess = Tessellator::new();
    tess.set_option(TessOption::ForceCounterClockwise, args.ccw);
    tess.set_palette_size(args.palette);
    room.add_to(&mut tess, args.ignore_obstacles)?;

    let element_type = if args.monotone_only {
        ElementType::MonotonePieces
    } else {
        ElementType::Triangles
    };
    tess.tessellate(element_type)
        .with_context(|| format!("tessellating room '{}'", room.name))?;
    info!(
        "room '{}': {} element(s) from {} vertices",
        room.name,
        tess.element_count(),
        tess.vertex_count()
    );

    let text = if args.svg {
        let view = svg::View {
            scale: args.scale,
            shrink: args.shrink,
        };
        svg::render(&tess, &room.name, &view)
    } else {
        serde_json::to_string_pretty(&report(&room, &tess))? + "\n"
    };

    match &args.output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout().write_all(text.as_bytes())?,
    }
    Ok(())
}

fn report<'a>(room: &'a Room, tess: &'a Tessellator) -> Report<'a> {
    let area = monotess::geom::signed_area(tess.vertices()).abs();
    Report {
        name: &room.name,
        wu_per_m: room.wu_per_m,
        area_m2: area / (room.wu_per_m * room.wu_per_m),
        clockwise: tess.is_clockwise(),
        vertices: tess.vertices(),
        vertex_kinds: tess.vertex_kinds(),
        sweep_diagonals: tess.sweep_diagonal_count(),
        monotone_pieces: tess.monotone_pieces(),
        faces: tess.faces(),
        triangles: tess.triangles(),
        colors: tess.colors(),
    }
}
