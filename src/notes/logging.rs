//! Diagnostic logging setup.
//!
//! The library only emits `tracing` events. The binary calls [`init_logging`]
//! once; `RUST_LOG` overrides the level derived from `-v`. Output goes to stderr
//! so it never mixes with command output.

use crate::config::NotesConfig;
use crate::error::{NotesError, Result};
use tracing_subscriber::EnvFilter;

pub fn init_logging(config: &NotesConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| NotesError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_config_error() {
        let config = NotesConfig::new("notes.json");
        let _ = init_logging(&config);
        assert!(matches!(
            init_logging(&config),
            Err(NotesError::Config(msg)) if msg.contains("Failed to initialize logging")
        ));
    }
}
