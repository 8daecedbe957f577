//! Progress reporting over the members of a batch.
//!
//! With the `progress` feature, [`MemberProgress`] drives an `indicatif` bar whose
//! message shows the member being decoded and a smoothed per-member duration
//! (exponential moving average, `ema ← α·dt + (1–α)·ema`). Without the feature
//! every method is a no-op, so the driver calls it unconditionally.
#[cfg(feature = "progress")]
use std::time::{Duration, Instant};

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

#[cfg(feature = "progress")]
struct MemberTimer {
    last: Instant,
    ema_ns: f64,
    alpha: f64,
    count: u64,
}

#[cfg(feature = "progress")]
impl MemberTimer {
    fn new(alpha: f64) -> Self {
        Self {
            last: Instant::now(),
            ema_ns: 0.0,
            alpha,
            count: 0,
        }
    }

    fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        self.count += 1;

        let dt_ns = dt.as_nanos() as f64;
        self.ema_ns = if self.count == 1 {
            dt_ns
        } else {
            self.alpha * dt_ns + (1.0 - self.alpha) * self.ema_ns
        };
        dt
    }

    fn avg(&self) -> Duration {
        Duration::from_nanos(self.ema_ns as u64)
    }
}

#[cfg(feature = "progress")]
fn fmt_dur(d: Duration) -> String {
    let us = d.as_micros();
    if us < 1_000 {
        format!("{us}µs")
    } else if us < 1_000_000 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.2}s", d.as_secs_f32())
    }
}

pub(crate) struct MemberProgress {
    #[cfg(feature = "progress")]
    bar: Option<ProgressBar>,
    #[cfg(feature = "progress")]
    timer: MemberTimer,
}

impl MemberProgress {
    /// Start reporting over `total` members. Single-member batches get no bar.
    pub(crate) fn new(total: usize) -> Self {
        #[cfg(feature = "progress")]
        {
            let bar = (total > 1).then(|| {
                let pb = ProgressBar::new(total as u64);
                if let Ok(style) = ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos}/{len} ({percent:>3}%) | ETA {eta_precise} | {msg}",
                ) {
                    pb.set_style(style);
                }
                pb
            });
            MemberProgress {
                bar,
                timer: MemberTimer::new(0.2),
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            let _ = total;
            MemberProgress {}
        }
    }

    /// Mark `member` as done.
    pub(crate) fn advance(&mut self, member: &str) {
        #[cfg(feature = "progress")]
        {
            let last = self.timer.tick();
            if let Some(pb) = &self.bar {
                pb.set_message(format!(
                    "{member} | last: {}, avg: {}",
                    fmt_dur(last),
                    fmt_dur(self.timer.avg())
                ));
                pb.inc(1);
            }
        }
        #[cfg(not(feature = "progress"))]
        let _ = member;
    }

    pub(crate) fn finish(self) {
        #[cfg(feature = "progress")]
        if let Some(pb) = self.bar {
            pb.finish_and_clear();
        }
    }
}
