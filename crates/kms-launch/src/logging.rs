//! Logging setup for the command line.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over the configured level; `verbose` raises the default to
/// `debug`.
pub fn init(level: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level, verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Filter used when `RUST_LOG` is unset. `ureq` is capped at `warn` but
/// never raised above the configured level.
#[must_use]
pub fn default_directives(level: &str, verbose: bool) -> String {
    let level = if verbose { "debug" } else { level };
    match level {
        "off" | "error" | "warn" => level.to_string(),
        _ => format!("{level},ureq=warn"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_silences_ureq_too() {
        assert_eq!(default_directives("off", false), "off");
        assert_eq!(default_directives("error", false), "error");
    }

    #[test]
    fn chatty_levels_cap_ureq() {
        assert_eq!(default_directives("info", false), "info,ureq=warn");
        assert_eq!(default_directives("off", true), "debug,ureq=warn");
    }
}
