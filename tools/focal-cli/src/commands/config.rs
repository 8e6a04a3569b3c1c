//! Show or save the effective configuration.

use std::path::PathBuf;

use focal_common::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, path: Option<PathBuf>, save: bool) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(config_file_path);
    println!("Config file: {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);

    if save {
        config.save_to(&path)?;
        println!("\nConfiguration saved.");
    }
    Ok(())
}
