use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::format::percent_text;
use crate::sink::{DisplaySink, Frame, Reading};
use crate::status::{StatusLevel, Thresholds};
use crate::system::platform::StatsSource;
use crate::system::utilization::{memory_utilization, swap_utilization};

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(3);

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// One read-compute-classify-emit cycle plus the change detection between cycles.
pub struct Sampler<S, D> {
    source: S,
    sink: D,
    thresholds: Thresholds,
    // None until the first tick, so that tick always restyles.
    last_ram: Option<StatusLevel>,
    last_swap: Option<StatusLevel>,
}

impl<S: StatsSource, D: DisplaySink> Sampler<S, D> {
    pub fn new(source: S, sink: D, thresholds: Thresholds) -> Self {
        Self {
            source,
            sink,
            thresholds,
            last_ram: None,
            last_swap: None,
        }
    }

    pub fn tick(&mut self) -> Frame {
        let _tick_span = tracing::debug_span!("sampler.tick").entered();

        let stats = self.source.sample();
        let ram_ratio = memory_utilization(&stats);
        let swap_ratio = swap_utilization(&stats);
        let ram_status = self.thresholds.classify_memory(ram_ratio);
        let swap_status = self.thresholds.classify_swap(swap_ratio);

        let restyle = self.last_ram != Some(ram_status) || self.last_swap != Some(swap_status);
        if restyle {
            tracing::info!(
                ram = ram_status.label(),
                swap = swap_status.label(),
                "status changed"
            );
            self.last_ram = Some(ram_status);
            self.last_swap = Some(swap_status);
        }

        let frame = Frame {
            ram: Reading {
                status: ram_status,
                percent: percent_text(ram_ratio),
            },
            swap: Reading {
                status: swap_status,
                percent: percent_text(swap_ratio),
            },
            restyle,
        };
        self.sink.update(&frame);
        frame
    }

    /// Pushes the pre-sample placeholder. Leaves change detection untouched.
    pub fn show_placeholder(&mut self) {
        self.sink.update(&Frame::placeholder());
    }

    pub fn last_statuses(&self) -> (Option<StatusLevel>, Option<StatusLevel>) {
        (self.last_ram, self.last_swap)
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }
}

/// Owns the timer task driving a [`Sampler`]. Built by `start`, torn down by `stop`.
pub struct SamplerLoop {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl SamplerLoop {
    /// Shows the placeholder, then ticks every `period`, starting one period from now.
    pub fn start<S, D>(mut sampler: Sampler<S, D>, period: Duration) -> Self
    where
        S: StatsSource + Send + 'static,
        D: DisplaySink + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        sampler.show_placeholder();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => break,
                    _ = interval.tick() => {
                        sampler.tick();
                    }
                }
            }
            tracing::debug!("sampler loop stopped");
        });

        tracing::debug!(period_ms = period.as_millis() as u64, "sampler loop started");
        Self {
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Cancels the pending tick and waits for the task to finish. Once this
    /// returns the sink receives no more frames. A second call does nothing.
    pub async fn stop(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Err(err) = task.await
            && err.is_panic()
        {
            tracing::error!(error = %err, "sampler task panicked");
        }
    }
}

impl Drop for SamplerLoop {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
