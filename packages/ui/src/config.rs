//! Platform loading of [`AlumniConfig`].
//!
//! - **Web**: built-in defaults.
//! - **Desktop** (native): `<config_dir>/alumniconnect/alumni.toml` when present.

use store::AlumniConfig;

/// Load the configuration for this platform, falling back to defaults.
pub fn load_config() -> AlumniConfig {
    #[cfg(target_arch = "wasm32")]
    {
        AlumniConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match config_path() {
            Some(path) => load_config_from(&path),
            None => AlumniConfig::default(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|dir| dir.join("alumniconnect").join(AlumniConfig::filename()))
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config_from(path: &std::path::Path) -> AlumniConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let config = AlumniConfig::default();
            match config.to_toml() {
                Ok(text) => {
                    tracing::debug!("No config at {}, using defaults:\n{}", path.display(), text)
                }
                Err(e) => tracing::warn!("Failed to render default config: {}", e),
            }
            return config;
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return AlumniConfig::default();
        }
    };
    match AlumniConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Invalid config in {}, using defaults: {}", path.display(), e);
            AlumniConfig::default()
        }
    }
}
