use std::path::Path;

use launch_axioms::axiom::{standing_axioms, synthesize_axioms};
use launch_axioms::emit::{EmitFormat, render};
use launch_axioms::geometry::validate_flags;

use super::load_flags;

pub fn run(
    config: Option<&Path>,
    defines: &[String],
    format: EmitFormat,
    with_global_id: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let flags = load_flags(config, defines)?;
    let geometry = validate_flags(&flags)?;

    let axioms = if with_global_id {
        standing_axioms(&geometry)
    } else {
        synthesize_axioms(&geometry)
    };

    let rendered = render(&axioms, format)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
