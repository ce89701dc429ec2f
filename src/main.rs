use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use navgrid_reader::{
    DecodeNotice, DecodeOptions, FlagSet, MeshGrid, NavGrid, OverlayHeader, decode_with, open,
};

/// Print a summary of a navgrid file.
#[derive(Debug, Parser)]
#[command(name = "navgrid-info", version, about)]
struct Args {
    /// Path to a .aimesh_ngrid or .ngrid_overlay file
    path: PathBuf,

    /// Fail on versions whose layout is not fully known
    #[arg(long)]
    strict: bool,

    /// Number of sample cells to print
    #[arg(long, default_value_t = 10)]
    cells: usize,

    /// Print the height grid summary
    #[arg(long)]
    heights: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    println!("Reading navgrid file: {}", args.path.display());
    println!("{}", "=".repeat(60));

    let options = DecodeOptions {
        strict_version: args.strict,
    };
    let result = open(&args.path).and_then(|mut file| {
        let decoded = decode_with(&mut file, options)?;
        Ok((file, decoded))
    });

    match result {
        Ok((file, decoded)) => {
            println!("\nFile Information:");
            println!("  Name: {}", file.name());
            println!("  Kind: {}", file.kind());
            println!("  Size: {} bytes", file.size());

            match decoded {
                NavGrid::Mesh(mesh) => print_mesh(&mesh, &args),
                NavGrid::Overlay(overlay) => print_overlay(&overlay),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read navgrid file");
            eprintln!("  {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_notice(notice: &DecodeNotice) {
    match notice {
        DecodeNotice::UnsupportedVersion(version) => {
            println!("  Notice: version {} is not fully supported, header only", version)
        }
        DecodeNotice::BodyNotDecoded => println!("  Notice: body not decoded"),
    }
}

fn print_mesh(mesh: &MeshGrid, args: &Args) {
    let size = mesh.map_size();

    println!("  Version: {}", mesh.version);
    if let Some(notice) = &mesh.notice {
        print_notice(notice);
    }

    println!("\nGrid:");
    println!(
        "  Bounds: ({}, {}, {}) .. ({}, {}, {})",
        mesh.bounds_min.x,
        mesh.bounds_min.y,
        mesh.bounds_min.z,
        mesh.bounds_max.x,
        mesh.bounds_max.y,
        mesh.bounds_max.z
    );
    println!("  Map size: {} x {} x {}", size.x, size.y, size.z);
    println!("  Cell size: {}", mesh.cell_size);
    println!(
        "  Cell counts: {} x {} ({} total)",
        mesh.count_x,
        mesh.count_z,
        mesh.total_cell_count()
    );
    println!("  Decoded cells: {}", mesh.cells.len());

    if !mesh.cells.is_empty() {
        println!("\nSample Cells (first {}):", args.cells);
        for cell in mesh.cells.iter().take(args.cells) {
            println!(
                "  {} vision={:#06x} river={:#04x} jungle={:?} region={:?} lane={:?} poi={:?} ring={:?}",
                cell,
                cell.flags.vision_pathing.raw(),
                cell.flags.river_region.raw(),
                cell.flags.jungle_quadrant.kind(),
                cell.flags.main_region.kind(),
                cell.flags.nearest_lane.kind(),
                cell.flags.point_of_interest.kind(),
                cell.flags.ring_segment.kind(),
            );
        }
        if mesh.cells.len() > args.cells {
            println!("  ... and {} more", mesh.cells.len() - args.cells);
        }
    }

    if args.heights {
        match &mesh.heights {
            Some(heights) => {
                println!("\nHeight Grid:");
                println!("  Samples: {} x {}", heights.count_x, heights.count_z);
                println!("  Offset: ({}, {})", heights.offset_x, heights.offset_z);
                match heights.range() {
                    Some(range) => println!("  Range: {} .. {}", range.min, range.max),
                    None => println!("  Range: (empty)"),
                }
            }
            None => println!("\nHeight Grid: not decoded"),
        }
    }
}

fn print_overlay(overlay: &OverlayHeader) {
    println!("  Version: {}", overlay.version);
    for notice in &overlay.notices {
        print_notice(notice);
    }
}
