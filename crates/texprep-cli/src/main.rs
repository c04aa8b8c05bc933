//! texprep - prepare images for use as alpha-blended textures.
//!
//! Dilates opaque color into transparent pixels (default) or pre-multiplies
//! color by alpha, then saves the result as an 8-bit RGBA PNG.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use texprep_ops::Operation;

#[derive(Parser)]
#[command(name = "texprep")]
#[command(version, about = "Prepare images for use as alpha-blended textures")]
#[command(long_about = "
Processes one image file and saves the processed version as an 8-bit RGBA
PNG. The default operation dilates color from alpha>0 pixels to nearby
pixels with alpha=0, which prevents filtering and mipmap bleed artifacts.
With --premul the operation pre-multiplies colors by alpha instead.

Warning: destination files are overwritten!

Examples:
  texprep sprite.png sprite_dilated.png
  texprep --premul ui.png ui_premul.png
")]
struct Cli {
    /// Pre-multiply colors by alpha instead of dilating
    #[arg(short, long)]
    premul: bool,

    /// Input image (png, jpeg)
    input: Option<PathBuf>,

    /// Output image (always written as png)
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Mirror the classic tool contract: too few arguments prints usage and
    // exits successfully.
    let (Some(input), Some(output)) = (cli.input.as_deref(), cli.output.as_deref()) else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let op = if cli.premul {
        Operation::Premultiply
    } else {
        Operation::Dilate
    };

    run(op, input, output)
}

fn run(op: Operation, input: &Path, output: &Path) -> Result<()> {
    // Refuse destructive in-place overwrites before any decode work.
    if paths_collide(input, output) {
        bail!("in-place conversion is not supported: {}", input.display());
    }

    let image = texprep_io::read(input)
        .with_context(|| format!("Failed to load: {}", input.display()))?;

    if !image.has_alpha() {
        warn!("image has no alpha channel");
    }
    if image.channels == 2 {
        warn!("grayscale+alpha input upconverted to RGBA");
    }

    let mut buffer = image
        .into_rgba()
        .with_context(|| format!("Failed to normalize: {}", input.display()))?;

    info!("applying {} to {}x{} image", op, buffer.width(), buffer.height());
    op.apply(&mut buffer);

    texprep_io::write_png(output, &buffer)
        .with_context(|| format!("Failed to save: {}", output.display()))?;

    println!(
        "{} processed ({}) and saved as {}",
        input.display(),
        op,
        output.display()
    );

    Ok(())
}

/// Returns `true` when input and output name the same file.
///
/// Case-insensitive on Windows, byte comparison elsewhere. A guard against
/// destructive overwrites, not a canonicalizing path check.
fn paths_collide(a: &Path, b: &Path) -> bool {
    #[cfg(windows)]
    {
        a.as_os_str()
            .to_string_lossy()
            .eq_ignore_ascii_case(&b.as_os_str().to_string_lossy())
    }
    #[cfg(not(windows))]
    {
        a == b
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_collide_identical() {
        assert!(paths_collide(Path::new("a.png"), Path::new("a.png")));
        assert!(!paths_collide(Path::new("a.png"), Path::new("b.png")));
    }

    #[cfg(windows)]
    #[test]
    fn test_paths_collide_case_insensitive() {
        assert!(paths_collide(Path::new("A.PNG"), Path::new("a.png")));
    }

    #[test]
    fn test_collision_rejected_before_output_touched() {
        let dir = std::env::temp_dir();
        let path = dir.join("texprep_collision_test.png");
        let result = run(Operation::Dilate, &path, &path);
        assert!(result.is_err());
        // The output file must not have been created by the failed run.
        assert!(!path.exists());
    }

    #[test]
    fn test_cli_parses_premul_flag() {
        let cli = Cli::try_parse_from(["texprep", "--premul", "in.png", "out.png"]).unwrap();
        assert!(cli.premul);
        assert_eq!(cli.input.as_deref(), Some(Path::new("in.png")));
        assert_eq!(cli.output.as_deref(), Some(Path::new("out.png")));

        let cli = Cli::try_parse_from(["texprep", "in.png", "out.png"]).unwrap();
        assert!(!cli.premul);
    }

    #[test]
    fn test_cli_accepts_missing_positionals() {
        // Fewer than two positional arguments must still parse; the binary
        // prints usage and exits successfully.
        let cli = Cli::try_parse_from(["texprep"]).unwrap();
        assert!(cli.input.is_none() && cli.output.is_none());

        let cli = Cli::try_parse_from(["texprep", "only-input.png"]).unwrap();
        assert!(cli.output.is_none());
    }
}
