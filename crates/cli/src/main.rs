#![deny(unsafe_code)]
//! CLI binary for the gradgen gradient-image generator.
//!
//! Subcommands:
//! - `linear` — write linear gradient PNGs (`--axis x`, `y`, or `both`)
//! - `bw` — black-to-white strip (`--direction reverse` for white-to-black)
//! - `radial` — radial gradient from a configurable center
//! - `rgb` — three-channel composite from per-channel sources or a recipe file
//! - `samples` — write the stock demo batch into a directory
//! - `list` — print available colormaps, channel sources, and directions

mod error;
mod samples;

use clap::{Parser, Subcommand};
use gradgen_core::gradient;
use gradgen_core::recipe::{ChannelSource, ChannelSpec, Recipe};
use gradgen_core::{Direction, Field};
use gradgen_render::snapshot::{write_composite_png, write_field_png};
use gradgen_render::Colormap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use error::CliError;

/// All recognized channel source names.
const SOURCE_NAMES: &[&str] = &["linear-x", "linear-y", "radial"];

#[derive(Parser)]
#[command(name = "gradgen", about = "Synthetic gradient image generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write linear gradient PNGs along one or both axes.
    Linear {
        /// Axis to render: "x", "y", or "both".
        #[arg(long, default_value = "x")]
        axis: String,

        /// Gradient direction: "forward" or "reverse".
        #[arg(short, long, default_value = "forward")]
        direction: String,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Colormap name (gray, reds, greens, blues, viridis).
        #[arg(short, long, default_value = "gray")]
        colormap: String,

        /// Output file path. With --axis both, "-x"/"-y" suffixes are added.
        #[arg(short, long, default_value = "linear.png")]
        output: PathBuf,
    },
    /// Write a black-to-white gradient strip.
    Bw {
        /// Gradient direction; "reverse" gives white-to-black.
        #[arg(short, long, default_value = "forward")]
        direction: String,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Colormap name (gray, reds, greens, blues, viridis).
        #[arg(short, long, default_value = "gray")]
        colormap: String,

        /// Output file path.
        #[arg(short, long, default_value = "bw.png")]
        output: PathBuf,
    },
    /// Write a radial gradient from a configurable center.
    Radial {
        /// Center x in normalized grid coordinates (may lie outside [0,1]).
        #[arg(long, default_value_t = 0.5)]
        center_x: f64,

        /// Center y in normalized grid coordinates (may lie outside [0,1]).
        #[arg(long, default_value_t = 0.5)]
        center_y: f64,

        /// Gradient direction: "forward" or "reverse".
        #[arg(short, long, default_value = "forward")]
        direction: String,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Colormap name (gray, reds, greens, blues, viridis).
        #[arg(short, long, default_value = "gray")]
        colormap: String,

        /// Output file path.
        #[arg(short, long, default_value = "radial.png")]
        output: PathBuf,
    },
    /// Write a three-channel composite image.
    Rgb {
        /// Red channel source (linear-x, linear-y, radial).
        #[arg(long, default_value = "linear-x")]
        red: String,

        /// Green channel source (linear-x, linear-y, radial).
        #[arg(long, default_value = "linear-y")]
        green: String,

        /// Blue channel source (linear-x, linear-y, radial).
        #[arg(long, default_value = "radial")]
        blue: String,

        /// Direction applied to the red channel.
        #[arg(long, default_value = "forward")]
        red_direction: String,

        /// Direction applied to the green channel.
        #[arg(long, default_value = "forward")]
        green_direction: String,

        /// Direction applied to the blue channel.
        #[arg(long, default_value = "forward")]
        blue_direction: String,

        /// Center x shared by any radial channels.
        #[arg(long, default_value_t = 0.5)]
        center_x: f64,

        /// Center y shared by any radial channels.
        #[arg(long, default_value_t = 0.5)]
        center_y: f64,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Read the composite description from a JSON recipe file instead.
        #[arg(long, conflicts_with_all = [
            "red", "green", "blue",
            "red_direction", "green_direction", "blue_direction",
            "center_x", "center_y", "width", "height",
        ])]
        recipe: Option<PathBuf>,

        /// Output file path.
        #[arg(short, long, default_value = "rgb.png")]
        output: PathBuf,
    },
    /// Write the stock demo batch (linear grid, radial, composites, strip).
    Samples {
        /// Directory the sample PNGs are written into.
        #[arg(long, default_value = "samples")]
        outdir: PathBuf,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,
    },
    /// List available colormaps, channel sources, and directions.
    List,
}

fn parse_direction(name: &str) -> Result<Direction, CliError> {
    name.parse::<Direction>()
        .map_err(|e| CliError::Input(e.to_string()))
}

fn parse_colormap(name: &str) -> Result<Colormap, CliError> {
    Colormap::from_name(name).map_err(|e| CliError::Input(e.to_string()))
}

fn parse_source(name: &str, center_x: f64, center_y: f64) -> Result<ChannelSource, CliError> {
    match name {
        "linear-x" => Ok(ChannelSource::LinearX),
        "linear-y" => Ok(ChannelSource::LinearY),
        "radial" => Ok(ChannelSource::Radial { center_x, center_y }),
        other => Err(CliError::Input(format!(
            "unknown channel source '{other}' (expected one of: {})",
            SOURCE_NAMES.join(", ")
        ))),
    }
}

/// Inserts an axis suffix before the extension: `linear.png` -> `linear-x.png`.
fn with_axis_suffix(path: &Path, axis: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("linear");
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => path.with_file_name(format!("{stem}-{axis}.{ext}")),
        None => path.with_file_name(format!("{stem}-{axis}")),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Linear {
            axis,
            direction,
            width,
            height,
            colormap,
            output,
        } => {
            let direction = parse_direction(&direction)?;
            let colormap = parse_colormap(&colormap)?;
            let (x, y) = gradient::directional(width, height, direction, direction)?;
            let fields: Vec<(&str, &Field)> = match axis.as_str() {
                "x" => vec![("x", &x)],
                "y" => vec![("y", &y)],
                "both" => vec![("x", &x), ("y", &y)],
                other => {
                    return Err(CliError::Input(format!(
                        "unknown axis '{other}' (expected x, y, or both)"
                    )))
                }
            };
            let mut outputs = Vec::new();
            for (name, field) in &fields {
                let path = if fields.len() == 1 {
                    output.clone()
                } else {
                    with_axis_suffix(&output, name)
                };
                write_field_png(field, &colormap, &path)?;
                outputs.push(path);
            }
            if cli.json {
                let info = serde_json::json!({
                    "command": "linear",
                    "axis": axis,
                    "direction": direction.name(),
                    "width": width,
                    "height": height,
                    "outputs": outputs
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for path in &outputs {
                    eprintln!(
                        "wrote linear gradient ({width}x{height}, {}) -> {}",
                        direction.name(),
                        path.display()
                    );
                }
            }
        }
        Command::Bw {
            direction,
            width,
            height,
            colormap,
            output,
        } => {
            let direction = parse_direction(&direction)?;
            let colormap = parse_colormap(&colormap)?;
            let strip = direction.apply(&gradient::black_to_white(width, height)?);
            write_field_png(&strip, &colormap, &output)?;
            if cli.json {
                let info = serde_json::json!({
                    "command": "bw",
                    "direction": direction.name(),
                    "width": width,
                    "height": height,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "wrote {} gradient ({width}x{height}) -> {}",
                    match direction {
                        Direction::Forward => "black-to-white",
                        Direction::Reverse => "white-to-black",
                    },
                    output.display()
                );
            }
        }
        Command::Radial {
            center_x,
            center_y,
            direction,
            width,
            height,
            colormap,
            output,
        } => {
            let direction = parse_direction(&direction)?;
            let colormap = parse_colormap(&colormap)?;
            let field = direction.apply(&gradient::radial(width, height, center_x, center_y)?);
            write_field_png(&field, &colormap, &output)?;
            if cli.json {
                let info = serde_json::json!({
                    "command": "radial",
                    "center_x": center_x,
                    "center_y": center_y,
                    "direction": direction.name(),
                    "width": width,
                    "height": height,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "wrote radial gradient ({width}x{height}, center {center_x},{center_y}) -> {}",
                    output.display()
                );
            }
        }
        Command::Rgb {
            red,
            green,
            blue,
            red_direction,
            green_direction,
            blue_direction,
            center_x,
            center_y,
            width,
            height,
            recipe,
            output,
        } => {
            let recipe = match recipe {
                Some(path) => {
                    let text = fs::read_to_string(&path).map_err(|e| {
                        CliError::Io(format!("cannot read {}: {e}", path.display()))
                    })?;
                    serde_json::from_str::<Recipe>(&text)
                        .map_err(|e| CliError::Input(format!("invalid recipe JSON: {e}")))?
                }
                None => {
                    let channels = [
                        ChannelSpec::new(parse_source(&red, center_x, center_y)?)
                            .with_direction(parse_direction(&red_direction)?),
                        ChannelSpec::new(parse_source(&green, center_x, center_y)?)
                            .with_direction(parse_direction(&green_direction)?),
                        ChannelSpec::new(parse_source(&blue, center_x, center_y)?)
                            .with_direction(parse_direction(&blue_direction)?),
                    ];
                    Recipe::new(width, height, channels)
                }
            };
            let image = recipe.generate()?;
            write_composite_png(&image, &output)?;
            if cli.json {
                let info = serde_json::json!({
                    "command": "rgb",
                    "recipe": serde_json::to_value(&recipe)?,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "wrote rgb composite ({}x{}) -> {}",
                    image.width(),
                    image.height(),
                    output.display()
                );
            }
        }
        Command::Samples {
            outdir,
            width,
            height,
        } => {
            let reports = samples::write_samples(&outdir, width, height)?;
            if cli.json {
                let files: Vec<serde_json::Value> = reports
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "name": r.name,
                            "path": r.path.display().to_string(),
                        })
                    })
                    .collect();
                let info = serde_json::json!({
                    "command": "samples",
                    "outdir": outdir.display().to_string(),
                    "files": files,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for report in &reports {
                    eprintln!("wrote {} -> {}", report.name, report.path.display());
                }
                eprintln!("{} samples in {}", reports.len(), outdir.display());
            }
        }
        Command::List => {
            let colormaps = Colormap::list_names();
            let directions = [Direction::Forward.name(), Direction::Reverse.name()];
            if cli.json {
                let info = serde_json::json!({
                    "colormaps": colormaps,
                    "sources": SOURCE_NAMES,
                    "directions": directions,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Colormaps:");
                println!("  {}", colormaps.join(", "));
                println!("Channel sources:");
                println!("  {}", SOURCE_NAMES.join(", "));
                println!("Directions:");
                println!("  {}", directions.join(", "));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_source_recognizes_all_names() {
        assert_eq!(
            parse_source("linear-x", 0.5, 0.5).unwrap(),
            ChannelSource::LinearX
        );
        assert_eq!(
            parse_source("linear-y", 0.5, 0.5).unwrap(),
            ChannelSource::LinearY
        );
        assert_eq!(
            parse_source("radial", 0.25, 0.75).unwrap(),
            ChannelSource::Radial {
                center_x: 0.25,
                center_y: 0.75,
            }
        );
    }

    #[test]
    fn parse_source_rejects_unknown_name_with_exit_code_12() {
        let err = parse_source("spiral", 0.5, 0.5).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("spiral"));
    }

    #[test]
    fn parse_direction_maps_bad_name_to_input_error() {
        let err = parse_direction("sideways").unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn parse_colormap_maps_bad_name_to_input_error() {
        let err = parse_colormap("plasma").unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn with_axis_suffix_keeps_extension() {
        let path = with_axis_suffix(Path::new("out/linear.png"), "x");
        assert_eq!(path, PathBuf::from("out/linear-x.png"));
    }

    #[test]
    fn with_axis_suffix_handles_missing_extension() {
        let path = with_axis_suffix(Path::new("linear"), "y");
        assert_eq!(path, PathBuf::from("linear-y"));
    }

    #[test]
    fn cli_parses_rgb_defaults() {
        let cli = Cli::try_parse_from(["gradgen", "rgb"]).unwrap();
        match cli.command {
            Command::Rgb {
                red, green, blue, ..
            } => {
                assert_eq!(red, "linear-x");
                assert_eq!(green, "linear-y");
                assert_eq!(blue, "radial");
            }
            _ => panic!("expected rgb subcommand"),
        }
    }

    #[test]
    fn cli_rejects_recipe_combined_with_source_flags() {
        let result = Cli::try_parse_from([
            "gradgen", "rgb", "--recipe", "r.json", "--red", "radial",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_global_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["gradgen", "list", "--json"]).unwrap();
        assert!(cli.json);
    }
}
