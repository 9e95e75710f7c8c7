use serde::Serialize;
use std::time::Instant;

use crate::metrics::summarize;
use crate::notifications::NotificationStore;
use crate::state::Shared;

#[derive(Debug, Serialize)]
pub struct KernelHealth {
    pub uptime_seconds: u64,
    pub notifications_tracked: usize,
    pub unread: usize,
    pub critical_unread: usize,
    pub memory_usage_mb: f32,
}

#[derive(Clone)]
pub struct HealthTracker {
    start_time: Instant,
}

impl Default for HealthTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthTracker {
    pub fn new() -> Self {
        Self { start_time: Instant::now() }
    }

    pub fn get_health(&self, store: &Shared<NotificationStore>) -> KernelHealth {
        let summary = summarize(store.lock().notifications());

        KernelHealth {
            uptime_seconds: self.start_time.elapsed().as_secs(),
            notifications_tracked: summary.total,
            unread: summary.unread,
            critical_unread: summary.critical_unread,
            memory_usage_mb: get_memory_usage_mb(),
        }
    }
}

fn get_memory_usage_mb() -> f32 {
    #[cfg(target_os = "linux")]
    {
        if let Ok(status) = std::fs::read_to_string("/proc/self/status") {
            let rss_kb = status
                .lines()
                .find(|line| line.starts_with("VmRSS:"))
                .and_then(|line| line.split_whitespace().nth(1))
                .and_then(|kb| kb.parse::<u64>().ok());
            if let Some(kb) = rss_kb {
                return kb as f32 / 1024.0;
            }
        }
    }

    // approximation hors Linux
    12.0
}
