// lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod files;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use files::{check_output, read_text, write_values};

/// Quadtree compression for square grayscale images stored one pixel per line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Subcommands,

    /// Overwrite output files that already exist
    #[arg(short, long, global = true)]
    force: bool,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Compress an image into a quadtree stream
    Compress(CompressArgs),

    /// Rebuild an image from a quadtree stream
    Uncompress(UncompressArgs),
}

#[derive(Debug, Args)]
struct CompressArgs {
    /// Uncompressed image, one value in [0, 255] per line
    input: PathBuf,
    /// Where to write the compressed stream
    output: PathBuf,
}

#[derive(Debug, Args)]
struct UncompressArgs {
    /// Compressed stream, the pixel count followed by the preorder tree
    input: PathBuf,
    /// Where to write the uncompressed image
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    match args.command {
        Subcommands::Compress(a) => compress(a, args.force),
        Subcommands::Uncompress(a) => uncompress(a, args.force),
    }
}

fn compress(args: CompressArgs, force: bool) -> Result<()> {
    check_output(&args.output, force)?;
    println!("Compressing: {}", args.input.display());

    let src = read_text(&args.input)?;
    let pixels = node::read_uncompressed(&src)
        .with_context(|| format!("Failed to read image {:?}", args.input))?;
    let compressed = node::compress(&pixels)
        .with_context(|| format!("Failed to compress image {:?}", args.input))?;
    println!("QuadTree: {}", compressed.tree);

    let written = write_values(&args.output, &compressed.tokens)?;
    println!("Output file: {}", written.display());

    println!("Uncompressed image size: {}", compressed.pixel_count);
    println!("Compressed image size: {}", compressed.compressed_len());
    println!("Compression: {:.2}%", compressed.compression() * 100.0);
    info!(
        leaves = compressed.tree.leaf_count(),
        depth = compressed.tree.depth(),
        "compress done"
    );
    Ok(())
}

fn uncompress(args: UncompressArgs, force: bool) -> Result<()> {
    check_output(&args.output, force)?;
    println!("Uncompressing: {}", args.input.display());

    let src = read_text(&args.input)?;
    let tokens = node::read_compressed(&src)
        .with_context(|| format!("Failed to read compressed stream {:?}", args.input))?;
    let uncompressed = node::uncompress(&tokens)
        .with_context(|| format!("Failed to uncompress {:?}", args.input))?;
    println!("QuadTree: {}", uncompressed.tree);

    let written = write_values(&args.output, &uncompressed.pixels)?;
    println!("Output file: {}", written.display());
    info!(
        side = uncompressed.side,
        leaves = uncompressed.tree.leaf_count(),
        "uncompress done"
    );
    Ok(())
}
