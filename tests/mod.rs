use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod config;
pub mod escape;
pub mod types;



static CONFIG_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that touch the global diagnostic settings.
///
/// Settings are reset when the guard is taken and again when it drops.
pub struct ConfigGuard {
    _lock: MutexGuard<'static, ()>,
}

impl Drop for ConfigGuard {
    fn drop(&mut self) {
        outcome_rail::config::reset();
    }
}

pub fn lock_config() -> ConfigGuard {
    let lock = CONFIG_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    outcome_rail::config::reset();
    ConfigGuard { _lock: lock }
}
