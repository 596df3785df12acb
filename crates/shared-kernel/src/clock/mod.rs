// crates/shared-kernel/src/clock/mod.rs

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

use chrono::{DateTime, Utc};

/// Source de temps injectée (les calculs de fenêtres "posté depuis N jours" en dépendent)
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
