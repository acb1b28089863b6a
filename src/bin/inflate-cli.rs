//! inflate-cli - Command-line interface for datlib
//!
//! A command-line tool for decompressing dat-file and texture-block streams
//! extracted from the game's data archive.

use clap::{Parser, Subcommand};
use datlib::{inflate_dat_bytes, inflate_texture_bytes, RECOGNISED_FOURCCS};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "inflate-cli")]
#[command(about = "A CLI tool for decompressing game archive dat and texture streams")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompress a dat-file stream
    Dat {
        /// Input compressed file
        input: PathBuf,

        /// Output decompressed file
        output: PathBuf,

        /// Decompressed size in bytes, as recorded by the archive index
        #[arg(short, long)]
        size: usize,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Decompress a texture-block stream
    Texture {
        /// Input compressed file
        input: PathBuf,

        /// Output decompressed file
        output: PathBuf,

        /// Texture width in pixels
        #[arg(long)]
        width: u16,

        /// Texture height in pixels
        #[arg(long)]
        height: u16,

        /// Block format FourCC (DXT1..DXT5, DXTA, DXTL, DXTN, 3DCX)
        #[arg(long)]
        format: String,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dat {
            input,
            output,
            size,
            force,
        } => decompress_dat(&input, &output, size, force, cli.verbose, cli.quiet),
        Commands::Texture {
            input,
            output,
            width,
            height,
            format,
            force,
        } => decompress_texture(
            &input,
            &output,
            width,
            height,
            &format,
            force,
            cli.verbose,
            cli.quiet,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Parse a FourCC given as four ASCII characters, e.g. "DXT5".
fn parse_fourcc(name: &str) -> Result<u32, Box<dyn std::error::Error>> {
    let upper = name.to_ascii_uppercase();
    let bytes: [u8; 4] = upper
        .as_bytes()
        .try_into()
        .map_err(|_| format!("FourCC '{}' must be exactly four characters", name))?;
    let fourcc = u32::from_le_bytes(bytes);
    if !RECOGNISED_FOURCCS.contains(&fourcc) {
        return Err(format!("unrecognised texture format '{}'", upper).into());
    }
    Ok(fourcc)
}

fn check_paths(
    input: &PathBuf,
    output: &PathBuf,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }
    if output.exists() && !force {
        return Err(format!(
            "Output file '{}' already exists. Use --force to overwrite",
            output.display()
        )
        .into());
    }
    Ok(())
}

fn progress_bar(input_size: usize, quiet: bool, message: &'static str) -> Option<ProgressBar> {
    if quiet || input_size <= 1024 * 1024 {
        return None;
    }
    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message);
    Some(pb)
}

fn decompress_dat(
    input: &PathBuf,
    output: &PathBuf,
    size: usize,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Decompressing '{}' to '{}' ({} bytes expected)",
            input.display(),
            output.display(),
            size
        );
    }

    let start_time = Instant::now();
    let compressed_data = fs::read(input)?;
    let input_size = compressed_data.len();

    let progress = progress_bar(input_size, quiet, "Decompressing...");
    if let Some(ref pb) = progress {
        pb.inc(1);
    }

    let decompressed_data = inflate_dat_bytes(&compressed_data, size)
        .map_err(|e| format!("Decompression failed: {}", e))?;

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Decompression complete");
    }

    fs::write(output, &decompressed_data)?;

    if !quiet {
        println!("✓ Decompression successful!");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes", decompressed_data.len());
        println!("  Time:   {:.2?}", start_time.elapsed());
        if decompressed_data.len() < size {
            println!(
                "  Note: stream ended early; {} of {} bytes produced",
                decompressed_data.len(),
                size
            );
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn decompress_texture(
    input: &PathBuf,
    output: &PathBuf,
    width: u16,
    height: u16,
    format: &str,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;
    let fourcc = parse_fourcc(format)?;

    if verbose {
        println!(
            "Decompressing '{}' to '{}' ({}x{} {})",
            input.display(),
            output.display(),
            width,
            height,
            format.to_ascii_uppercase()
        );
    }

    let start_time = Instant::now();
    let compressed_data = fs::read(input)?;
    let input_size = compressed_data.len();

    let progress = progress_bar(input_size, quiet, "Decompressing...");
    if let Some(ref pb) = progress {
        pb.inc(1);
    }

    let decompressed_data = inflate_texture_bytes(width, height, fourcc, &compressed_data)
        .map_err(|e| format!("Decompression failed: {}", e))?;

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Decompression complete");
    }

    fs::write(output, &decompressed_data)?;

    if !quiet {
        println!("✓ Decompression successful!");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes", decompressed_data.len());
        println!("  Time:   {:.2?}", start_time.elapsed());
    }

    Ok(())
}
