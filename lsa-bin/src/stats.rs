//! Wall-clock time and resident memory of a single call.
use log::warn;
use std::{
    sync::atomic::{AtomicBool, AtomicU64, Ordering},
    thread,
    time::{Duration, Instant},
};
use sysinfo::{get_current_pid, Pid, System};

const SAMPLE_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurement {
    pub time_ms: f64,
    /// Peak resident set size of the process while the call ran.
    pub memory_kib: u64,
}

/// Resident set size of process `pid` in KiB, or 0 when unavailable.
fn rss_kib(sys: &mut System, pid: Pid) -> u64 {
    sys.refresh_process(pid);
    sys.process(pid).map_or(0, |p| p.memory() / 1024)
}

/// Run `f` while a background thread samples the resident set size.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Measurement) {
    let pid = match get_current_pid() {
        Ok(pid) => Some(pid),
        Err(e) => {
            warn!("Memory usage is not available: {e}");
            None
        }
    };
    let done = &AtomicBool::new(false);
    let peak = &AtomicU64::new(0);

    let (result, time_ms) = thread::scope(|s| {
        if let Some(pid) = pid {
            let mut sys = System::new();
            peak.fetch_max(rss_kib(&mut sys, pid), Ordering::Relaxed);
            s.spawn(move || {
                while !done.load(Ordering::Relaxed) {
                    peak.fetch_max(rss_kib(&mut sys, pid), Ordering::Relaxed);
                    thread::sleep(SAMPLE_INTERVAL);
                }
                peak.fetch_max(rss_kib(&mut sys, pid), Ordering::Relaxed);
            });
        }
        let start = Instant::now();
        let result = f();
        let time_ms = start.elapsed().as_secs_f64() * 1000.;
        done.store(true, Ordering::Relaxed);
        (result, time_ms)
    });

    (
        result,
        Measurement {
            time_ms,
            memory_kib: peak.load(Ordering::Relaxed),
        },
    )
}
