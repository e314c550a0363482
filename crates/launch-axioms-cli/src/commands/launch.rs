use launch_axioms::geometry::{ConfigFile, validate_flags};
use launch_axioms::launch::LaunchOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchFormat {
    Defines,
    Yaml,
}

impl LaunchFormat {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "defines" => Ok(Self::Defines),
            "yaml" => Ok(Self::Yaml),
            other => Err(format!(
                "unknown format '{other}', expected 'defines' or 'yaml'"
            )),
        }
    }
}

/// Raw option values as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchArgs {
    pub local_size: Option<String>,
    pub num_groups: Option<String>,
    pub global_size: Option<String>,
    pub global_offset: Option<String>,
    pub header: Option<String>,
}

pub fn run(args: &LaunchArgs, format: LaunchFormat) -> Result<(), Box<dyn std::error::Error>> {
    let options = match &args.header {
        Some(line) => LaunchOptions::from_header(line)?,
        None => LaunchOptions::from_args(
            args.local_size.as_deref(),
            args.num_groups.as_deref(),
            args.global_size.as_deref(),
            args.global_offset.as_deref(),
        )?,
    };
    let flags = options.to_flags()?;
    // Lowered flags must describe a geometry the validator accepts.
    validate_flags(&flags)?;

    match format {
        LaunchFormat::Defines => println!("{}", flags.to_defines().join(" ")),
        LaunchFormat::Yaml => {
            let file = ConfigFile { defines: flags };
            print!("{}", serde_yaml::to_string(&file)?);
        }
    }
    Ok(())
}
