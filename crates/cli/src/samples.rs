//! The stock demo batch: one PNG per gradient family, written into a
//! single output directory.
//!
//! Covers the four-direction linear pairs (X in reds, Y in greens), the
//! centered radial (blues), five rgb composite combinations, and the
//! white-to-black strip.

use std::fs;
use std::path::{Path, PathBuf};

use gradgen_core::gradient;
use gradgen_core::recipe::{ChannelSource, ChannelSpec, Recipe};
use gradgen_core::{Direction, Field};
use gradgen_render::snapshot::{write_composite_png, write_field_png};
use gradgen_render::Colormap;

use crate::error::CliError;

/// One file written by the sample batch.
pub struct SampleReport {
    pub name: String,
    pub path: PathBuf,
}

/// The rgb composite combinations shown by the stock demos.
fn composite_samples(width: usize, height: usize) -> Vec<(&'static str, Recipe)> {
    let linear_x = ChannelSpec::new(ChannelSource::LinearX);
    let linear_y = ChannelSpec::new(ChannelSource::LinearY);
    let radial = ChannelSpec::new(ChannelSource::Radial {
        center_x: 0.5,
        center_y: 0.5,
    });
    vec![
        (
            "rgb-linear-linear-radial",
            Recipe::new(width, height, [linear_x, linear_y, radial]),
        ),
        (
            "rgb-linear-radial-radial",
            Recipe::new(width, height, [linear_x, radial, radial]),
        ),
        (
            "rgb-radial-linear-linear",
            Recipe::new(width, height, [radial, linear_y, linear_y]),
        ),
        (
            "rgb-linear-linear-linear",
            Recipe::new(width, height, [linear_x, linear_y, linear_y]),
        ),
        (
            "rgb-radial-radial-linear",
            Recipe::new(width, height, [radial, radial, linear_y]),
        ),
    ]
}

fn write_field_sample(
    reports: &mut Vec<SampleReport>,
    outdir: &Path,
    name: &str,
    field: &Field,
    colormap: &Colormap,
) -> Result<(), CliError> {
    let path = outdir.join(format!("{name}.png"));
    write_field_png(field, colormap, &path)?;
    reports.push(SampleReport {
        name: name.to_string(),
        path,
    });
    Ok(())
}

/// Writes the full sample batch into `outdir`, creating it if needed.
///
/// Returns one report per file written, in write order.
pub fn write_samples(
    outdir: &Path,
    width: usize,
    height: usize,
) -> Result<Vec<SampleReport>, CliError> {
    fs::create_dir_all(outdir)
        .map_err(|e| CliError::Io(format!("cannot create {}: {e}", outdir.display())))?;

    let mut reports = Vec::new();
    let reds = Colormap::reds();
    let greens = Colormap::greens();

    // Four-direction linear demo. Two calls cover all four distinct fields:
    // each axis forward and reversed.
    for direction in [Direction::Forward, Direction::Reverse] {
        let (x, y) = gradient::directional(width, height, direction, direction)?;
        let x_name = format!("linear-x-{}", direction.name());
        let y_name = format!("linear-y-{}", direction.name());
        write_field_sample(&mut reports, outdir, &x_name, &x, &reds)?;
        write_field_sample(&mut reports, outdir, &y_name, &y, &greens)?;
    }

    let radial = gradient::radial(width, height, 0.5, 0.5)?;
    write_field_sample(&mut reports, outdir, "radial", &radial, &Colormap::blues())?;

    for (name, recipe) in composite_samples(width, height) {
        let path = outdir.join(format!("{name}.png"));
        let image = recipe.generate()?;
        write_composite_png(&image, &path)?;
        reports.push(SampleReport {
            name: name.to_string(),
            path,
        });
    }

    let strip = Direction::Reverse.apply(&gradient::black_to_white(width, height)?);
    write_field_sample(
        &mut reports,
        outdir,
        "white-to-black",
        &strip,
        &Colormap::gray(),
    )?;

    Ok(reports)
}
