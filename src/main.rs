//! plcc-gen: KiCad footprint generator for PLCC plug sockets
//!
//! Writes a `.kicad_mod` footprint for an APW932x plug with the requested
//! pin count to standard output or a file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, error, info, Level};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use plcc_gen::config::{self, Config, OutputFormat};
use plcc_gen::error::FootprintError;
use plcc_gen::export;
use plcc_gen::kicad::KicadFootprint;
use plcc_gen::output::Destination;
use plcc_gen::plcc::{self, MountingOptions, Vendor};

/// Generate KiCad footprints for APW932x PLCC plugs.
#[derive(Parser, Debug)]
#[command(name = "plcc-gen")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true, args_override_self = true)]
struct Args {
    /// Number of pins (20, 28, 32, 44, 52, 68, 84)
    #[arg(short, long, value_name = "PINS", required_unless_present = "list")]
    pins: Option<u32>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    outfile: Option<PathBuf>,

    /// Use double-sided pads with vias (default: enabled)
    #[arg(short = 'd', long, overrides_with = "single_sided")]
    double_sided: bool,

    /// Use single-sided SMD pads only
    #[arg(short = 's', long, overrides_with = "double_sided")]
    single_sided: bool,

    /// Place vias outside the footprint (default: enabled)
    #[arg(short = 'v', long, overrides_with = "via_inside")]
    via_outside: bool,

    /// Place vias inside the footprint
    #[arg(short = 'V', long, overrides_with = "via_outside")]
    via_inside: bool,

    /// Plug vendor whose datasheet dimensions are used
    #[arg(long, value_enum)]
    vendor: Option<Vendor>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Timestamp UUID written into every record (default: all zeros)
    #[arg(long, value_name = "UUID")]
    tstamp: Option<Uuid>,

    /// List the catalog of the selected vendor and exit
    #[arg(long)]
    list: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (--verbose for info, twice for debug, three times for trace)
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Applies the command-line flags on top of the configured defaults.
    fn mounting_options(&self, cfg: &Config) -> MountingOptions {
        let mut opts = cfg.mounting_options();
        if self.double_sided {
            opts.double_sided = true;
        }
        if self.single_sided {
            opts.double_sided = false;
        }
        if self.via_outside {
            opts.via_outside = true;
        }
        if self.via_inside {
            opts.via_outside = false;
        }
        if let Some(tstamp) = self.tstamp {
            opts.tstamp = tstamp;
        }
        opts
    }
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the catalog of `vendor`.
fn print_catalog(vendor: Vendor) {
    println!("{:<8} {:>4} {:>7} {:>7} {:>7} {:>7} {:>7}", "NAME", "PINS", "GRID", "A", "B", "C", "D");
    for spec in vendor.catalog() {
        let grid = format!("{}x{}", spec.pins_x, spec.pins_y);
        println!(
            "{:<8} {:>4} {:>7} {:>7.2} {:>7.2} {:>7.2} {:>7.2}",
            spec.name,
            spec.pins,
            grid,
            spec.body.a,
            spec.body.b,
            spec.body.c,
            spec.body.d
        );
    }
}

/// Generates the footprint and writes it to its destination.
fn run(args: &Args, cfg: &Config, pins: u32) -> Result<(), FootprintError> {
    let vendor = args.vendor.unwrap_or(cfg.vendor);
    let format = args.format.unwrap_or(cfg.format);
    let opts = args.mounting_options(cfg);

    let (spec, geometry) = plcc::generate(vendor, pins, &opts)?;
    info!(
        name = spec.name,
        pins = spec.pins,
        %vendor,
        double_sided = opts.double_sided,
        via_outside = opts.via_outside,
        "Generating footprint"
    );

    let contents = match format {
        OutputFormat::Kicad => KicadFootprint::new(&spec, &geometry, opts.tstamp).to_string(),
        OutputFormat::Json => export::to_json(&spec, &geometry)?,
    };
    debug!(bytes = contents.len(), "Footprint rendered");

    Destination::from_path(args.outfile.as_deref()).write(&contents)
}

/// Entry point for plcc-gen.
fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.kind() == ErrorKind::DisplayHelp {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(get_log_level(args.verbose, args.quiet, &cfg.logging.level));

    if args.list {
        print_catalog(args.vendor.unwrap_or(cfg.vendor));
        return ExitCode::SUCCESS;
    }

    let Some(pins) = args.pins else {
        eprintln!("Error: --pins option is required");
        return ExitCode::FAILURE;
    };

    match run(&args, &cfg, pins) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Footprint generation failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
