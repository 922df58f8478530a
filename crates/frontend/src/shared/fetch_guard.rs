//! Привязка асинхронных загрузок к времени жизни компонента.
//!
//! Ответ, пришедший после размонтирования страницы, отбрасывается:
//!
//! ```rust,ignore
//! let guard = MountGuard::new();
//! spawn_local(async move {
//!     let result = fetch_coupons().await;
//!     guard.run(|| state.update(|s| s.apply(result)));
//! });
//! ```

use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    /// Создает guard для текущего reactive owner и снимает его при cleanup
    pub fn new() -> Self {
        let guard = Self::detached();
        let alive = guard.alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
        guard
    }

    /// Guard без привязки к owner
    pub fn detached() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Выполняет `f`, только если компонент еще смонтирован
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        if self.is_alive() {
            Some(f())
        } else {
            log::debug!("dropping async result: component unmounted");
            None
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_after_cancel_are_dropped() {
        let guard = MountGuard::detached();
        let clone = guard.clone();
        assert_eq!(guard.run(|| 1), Some(1));

        clone.cancel();
        let mut applied = false;
        assert_eq!(guard.run(|| applied = true), None);
        assert!(!applied);
    }
}
