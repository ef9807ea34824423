//! Global asset-cache switch
//!
//! Asset caching is **enabled by default**. Set `OGCARD_CACHE=0` (or
//! `false`, `no`, `off`) to start with it disabled, or flip it at runtime:
//!
//! ```
//! use ogcard_core::cache_config;
//!
//! cache_config::set_caching_enabled(false);
//! assert!(!cache_config::is_caching_enabled());
//!
//! cache_config::set_caching_enabled(true);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// Environment variable read once at first use
pub const CACHE_ENV_VAR: &str = "OGCARD_CACHE";

static CACHING_ENABLED: AtomicBool = AtomicBool::new(true);

static ENV_CHECKED: OnceLock<()> = OnceLock::new();

fn check_env() {
    ENV_CHECKED.get_or_init(|| {
        if let Ok(val) = std::env::var(CACHE_ENV_VAR) {
            if is_off(&val) {
                CACHING_ENABLED.store(false, Ordering::SeqCst);
                log::info!("ogcard asset caching disabled via {CACHE_ENV_VAR} env var");
            }
        }
    });
}

fn is_off(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

/// Whether cache-backed providers should keep what they fetch
pub fn is_caching_enabled() -> bool {
    check_env();
    CACHING_ENABLED.load(Ordering::SeqCst)
}

/// Override the environment setting at runtime
pub fn set_caching_enabled(enabled: bool) {
    check_env();
    CACHING_ENABLED.store(enabled, Ordering::SeqCst);
    log::debug!(
        "ogcard asset caching {} via runtime call",
        if enabled { "enabled" } else { "disabled" }
    );
}
