#[macro_use]
extern crate log;

use api::{to_json, Registry};
use clap::Parser;
use std::path::Path;
use verifier::{verify, EnergyMode, LogSink, VerifierConfig};

/// Command line options.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Options {
    /// Number of incoming directions sampled per check.
    #[clap(
        long = "incoming",
        short = 'n',
        value_name = "NUM",
        default_value_t = 1,
        help = "Sample the specified number of incoming directions per check."
    )]
    num_incoming: usize,

    /// Number of outgoing samples per incoming direction.
    #[clap(
        long = "samples",
        short = 's',
        value_name = "NUM",
        default_value_t = 1024,
        help = "Draw the specified number of outgoing samples per incoming direction."
    )]
    samples: usize,

    /// Run the convergence-mode energy check instead of the fixed-sample one.
    #[clap(
        long = "convergence",
        help = "Accumulate the energy estimator until it stabilizes instead of using a fixed sample budget."
    )]
    convergence: bool,

    /// Path to write the registered models back out as JSON definitions.
    #[clap(
        long = "outfile",
        short = 'o',
        value_name = "FILE",
        help = "Write the registered models' serialized definitions to the given file."
    )]
    outfile: Option<String>,

    /// Definition files or directories to load. Directories are scanned for
    /// `*.json` files.
    #[clap(help = "Definition files or directories")]
    paths: Vec<String>,
}

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    let mut registry = Registry::new();

    for path in &options.paths {
        if let Err(e) = load(&mut registry, path) {
            error!("{e}");
        }
    }

    if registry.is_empty() {
        warn!("No BRDF definitions were registered.");
        return;
    }

    let cfg = VerifierConfig {
        num_incoming: options.num_incoming,
        samples_per_incoming: options.samples,
        samples_per_outgoing: options.samples,
        energy_mode: if options.convergence {
            EnergyMode::Convergence
        } else {
            EnergyMode::FixedSamples
        },
        ..VerifierConfig::default()
    };

    info!("Checking whether BRDFs are physically plausible...");
    let mut sink = LogSink;
    for (alias, brdf) in registry.iter() {
        let verification = verify(brdf, &cfg, &mut sink);
        if verification.is_physically_based() {
            info!("[{alias}] is physically plausible.");
        } else {
            warn!("[{alias}] is not physically based.");
        }
    }

    if let Some(outfile) = &options.outfile {
        if let Err(e) = save(&registry, outfile) {
            error!("{e}");
        }
    }
}

/// Loads a definition file or directory into the registry.
///
/// * `registry` - The registry to fill.
/// * `path`     - A definition file or a directory of definitions.
fn load(registry: &mut Registry, path: &str) -> Result<(), String> {
    let path = Path::new(path);

    if path.is_dir() {
        let registered = registry.load_dir(path).map_err(|e| e.to_string())?;
        info!("Registered {registered} BRDFs from {}", path.display());
        return Ok(());
    }

    let json =
        std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    registry
        .register_str(&json)
        .map_err(|e| format!("{}: {e}", path.display()))
}

/// Writes every registered model's definition to a single JSON file.
///
/// * `registry` - The registry to serialize.
/// * `outfile`  - Destination path.
fn save(registry: &Registry, outfile: &str) -> Result<(), String> {
    let mut defs = Vec::with_capacity(registry.len());
    for (alias, brdf) in registry.iter() {
        defs.push(to_json(&brdf.to_def(alias)).map_err(|e| e.to_string())?);
    }

    let json = format!("[\n{}\n]", defs.join(",\n"));
    std::fs::write(outfile, json).map_err(|e| format!("{outfile}: {e}"))?;

    info!("Wrote {} definitions to {outfile}", registry.len());
    Ok(())
}
