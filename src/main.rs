use std::path::PathBuf;

use pointlogic::{run_pointlogic, PointLogicConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Optional first argument: path to a YAML or JSON config file.
    let cfg = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => PointLogicConfig::from_path(&path)?,
        None => PointLogicConfig::default(),
    };

    run_pointlogic(cfg)?;
    Ok(())
}
