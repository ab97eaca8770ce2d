use std::path::{Path, PathBuf};
use std::sync::Once;
use std::{env, fs, io};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".budget_ledger";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("budget_ledger=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application data directory, defaulting to `~/.budget_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BUDGET_LEDGER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Creates `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
