use std::path::Path;

use launch_axioms::geometry::validate_flags;
use launch_axioms::witness::find_witness;

use super::load_flags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitnessFormat {
    Text,
    Json,
}

impl WitnessFormat {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}', expected 'text' or 'json'"
            )),
        }
    }
}

pub fn run(
    config: Option<&Path>,
    defines: &[String],
    format: WitnessFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let flags = load_flags(config, defines)?;
    let geometry = validate_flags(&flags)?;
    let assignment = find_witness(&geometry)?;

    match format {
        WitnessFormat::Text => {
            for (quantity, value) in assignment.iter() {
                println!("{quantity} = {value}");
            }
        }
        WitnessFormat::Json => println!("{}", serde_json::to_string_pretty(&assignment)?),
    }
    Ok(())
}
