use std::path::Path;

use launch_axioms::image::{CoordComponent, Image1d, Image2d, Image3d, ImageLimits, clamp};

use super::merge_flags;

pub fn run(
    config: Option<&Path>,
    defines: &[String],
    dims: usize,
    coord: &str,
    float: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let limits = ImageLimits::from_flags(&merge_flags(config, defines)?);
    if float {
        let components = parse_components::<f32>(coord)?;
        report(&limits, dims, &components)
    } else {
        let components = parse_components::<i32>(coord)?;
        report(&limits, dims, &components)
    }
}

fn parse_components<T: std::str::FromStr>(coord: &str) -> Result<Vec<T>, String> {
    coord
        .split(',')
        .map(str::trim)
        .map(|part| {
            part.parse()
                .map_err(|_| format!("invalid coordinate component '{part}'"))
        })
        .collect()
}

fn report<T: CoordComponent>(
    limits: &ImageLimits,
    dims: usize,
    components: &[T],
) -> Result<(), Box<dyn std::error::Error>> {
    if components.len() != dims {
        return Err(format!(
            "expected {dims} coordinate component(s), got {}",
            components.len()
        )
        .into());
    }

    let (extent, index): (Vec<u32>, usize) = match dims {
        1 => {
            let image = Image1d::image1d(limits);
            (image.extent().to_vec(), image.index([components[0]]))
        }
        2 => {
            let image = Image2d::image2d(limits);
            (
                image.extent().to_vec(),
                image.index([components[0], components[1]]),
            )
        }
        3 => {
            let image = Image3d::image3d(limits);
            (
                image.extent().to_vec(),
                image.index([components[0], components[1], components[2]]),
            )
        }
        other => return Err(format!("image rank must be 1, 2 or 3, got {other}").into()),
    };

    let clamped: Vec<String> = components
        .iter()
        .zip(&extent)
        .map(|(c, &max)| clamp(c.to_i64(), max).to_string())
        .collect();
    let extent: Vec<String> = extent.iter().map(ToString::to_string).collect();

    println!("extent:  ({})", extent.join(", "));
    println!("clamped: ({})", clamped.join(", "));
    println!("index:   {index}");
    Ok(())
}
