#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, System};

/// Optional resource usage reporting for long imports, enabled with
/// `--monitor`. The pipeline is single-threaded, so plain mutable state is
/// enough here.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: System,
    pid: Option<Pid>,
    started: Instant,
    peak_memory_mb: u64,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            system: System::new(),
            pid: sysinfo::get_current_pid().ok(),
            started: Instant::now(),
            peak_memory_mb: 0,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn memory_mb(&mut self) -> Option<u64> {
        let pid = self.pid?;
        self.system.refresh_all();
        let process = self.system.process(pid)?;
        let memory_mb = process.memory() / 1024 / 1024;
        if memory_mb > self.peak_memory_mb {
            self.peak_memory_mb = memory_mb;
        }
        Some(memory_mb)
    }

    pub fn log_phase(&mut self, phase: &str) {
        if !self.enabled {
            return;
        }
        if let Some(memory_mb) = self.memory_mb() {
            tracing::info!(
                "📊 {} - Memory: {}MB, Elapsed: {:?}",
                phase,
                memory_mb,
                self.started.elapsed()
            );
        }
    }

    pub fn log_summary(&mut self) {
        if !self.enabled {
            return;
        }
        self.memory_mb();
        tracing::info!(
            "📊 Run finished - Total Time: {:?}, Peak Memory: {}MB",
            self.started.elapsed(),
            self.peak_memory_mb
        );
    }
}

// No-op stand-in when built without the CLI feature.
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn is_enabled(&self) -> bool {
        false
    }

    pub fn log_phase(&mut self, _phase: &str) {}

    pub fn log_summary(&mut self) {}
}
