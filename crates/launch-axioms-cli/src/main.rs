use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Top-level CLI argument parser for the `lax` command
#[derive(Parser)]
#[command(
    name = "lax",
    about = "launch-axioms: kernel launch geometry to standing verifier axioms",
    version
)]
struct Cli {
    /// Log debug events to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the `lax` CLI
#[derive(Subcommand)]
enum Commands {
    /// Validate a launch geometry and report lint diagnostics
    Validate {
        /// Path to a YAML configuration file
        config: Option<PathBuf>,
        /// Extra define, e.g. -D__LOCAL_SIZE_0=64 (repeatable)
        #[arg(short = 'D', long = "define")]
        defines: Vec<String>,
    },
    /// Print the standing axioms for a launch geometry
    Axioms {
        /// Path to a YAML configuration file
        config: Option<PathBuf>,
        /// Extra define, e.g. -D__LOCAL_SIZE_0=64 (repeatable)
        #[arg(short = 'D', long = "define")]
        defines: Vec<String>,
        /// Output format: text (default), smtlib, or json
        #[arg(long, default_value = "text")]
        format: String,
        /// Append the global-id defining equations
        #[arg(long)]
        with_global_id: bool,
    },
    /// Find a concrete assignment satisfying every synthesized axiom
    Witness {
        /// Path to a YAML configuration file
        config: Option<PathBuf>,
        /// Extra define, e.g. -D__LOCAL_SIZE_0=64 (repeatable)
        #[arg(short = 'D', long = "define")]
        defines: Vec<String>,
        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Translate command-line launch options into flags
    Launch {
        /// Work-group size per axis, e.g. 64,4 or [64,*]
        #[arg(long)]
        local_size: Option<String>,
        /// Number of work groups per axis
        #[arg(long, alias = "group-size")]
        num_groups: Option<String>,
        /// Global size per axis
        #[arg(long)]
        global_size: Option<String>,
        /// Global offset per axis
        #[arg(long)]
        global_offset: Option<String>,
        /// Kernel header line, e.g. "//--local_size=64 --num_groups=12"
        #[arg(long, conflicts_with_all = ["local_size", "num_groups", "global_size", "global_offset"])]
        header: Option<String>,
        /// Output format: defines (default) or yaml
        #[arg(long, default_value = "defines")]
        format: String,
    },
    /// Compute the clamped storage index of an image coordinate
    ImageIndex {
        /// Path to a YAML configuration file carrying image limits
        config: Option<PathBuf>,
        /// Extra define, e.g. -DCL_DEVICE_IMAGE2D_MAX_WIDTH=1024 (repeatable)
        #[arg(short = 'D', long = "define")]
        defines: Vec<String>,
        /// Image rank: 1, 2 or 3
        #[arg(long, default_value_t = 2)]
        dims: usize,
        /// Comma-separated coordinate, e.g. 10,-3
        #[arg(long, allow_hyphen_values = true)]
        coord: String,
        /// Treat coordinate components as floats
        #[arg(long)]
        float: bool,
    },
    /// Look up math intrinsics and resolve overloads
    Intrinsic {
        /// Intrinsic name; lists the whole catalogue when omitted
        name: Option<String>,
        /// Comma-separated argument types to resolve against, e.g. int,uint
        #[arg(long)]
        args: Option<String>,
        /// Only list intrinsics of this family, e.g. fast-math
        #[arg(long)]
        family: Option<String>,
    },
}

/// Dispatch a parsed CLI subcommand to its handler
fn run_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Validate { config, defines } => {
            commands::validate::run(config.as_deref(), &defines)
        }
        Commands::Axioms {
            config,
            defines,
            format,
            with_global_id,
        } => match format.parse::<launch_axioms::emit::EmitFormat>() {
            Ok(fmt) => commands::axioms::run(config.as_deref(), &defines, fmt, with_global_id),
            Err(e) => Err(e.into()),
        },
        Commands::Witness {
            config,
            defines,
            format,
        } => match commands::witness::WitnessFormat::from_str(&format) {
            Ok(fmt) => commands::witness::run(config.as_deref(), &defines, fmt),
            Err(e) => Err(e.into()),
        },
        Commands::Launch {
            local_size,
            num_groups,
            global_size,
            global_offset,
            header,
            format,
        } => match commands::launch::LaunchFormat::from_str(&format) {
            Ok(fmt) => commands::launch::run(
                &commands::launch::LaunchArgs {
                    local_size,
                    num_groups,
                    global_size,
                    global_offset,
                    header,
                },
                fmt,
            ),
            Err(e) => Err(e.into()),
        },
        Commands::ImageIndex {
            config,
            defines,
            dims,
            coord,
            float,
        } => commands::image_index::run(config.as_deref(), &defines, dims, &coord, float),
        Commands::Intrinsic { name, args, family } => {
            commands::intrinsic::run(name.as_deref(), args.as_deref(), family.as_deref())
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins unless `--verbose`
/// is given; the fallback level is `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point: parse CLI arguments and run the selected subcommand
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run_command(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
