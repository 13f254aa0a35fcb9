//! Frame and chunk-build timing.
//!
//! Feature-gated (`metrics`) and runtime-toggled through
//! [`COLLECT_METRICS`]. With the feature off every `record_*` call is a
//! no-op.
//!
//! ```ignore
//! use terrain_core::metrics::{FrameMetrics, COLLECT_METRICS};
//!
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//! metrics.record_tick(elapsed_us, draw_calls);
//! ```

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;

/// Runtime toggle for metrics collection.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Rolling window over the most recent values.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity: capacity.max(1),
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: T) {
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub fn last(&self) -> Option<&T> {
    self.buffer.back()
  }
}

impl RollingWindow<u64> {
  pub fn sum(&self) -> u64 {
    self.buffer.iter().sum()
  }

  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.sum() as f64 / self.buffer.len() as f64
    }
  }

  pub fn min_max(&self) -> Option<(u64, u64)> {
    let min = *self.buffer.iter().min()?;
    let max = *self.buffer.iter().max()?;
    Some((min, max))
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    Self::new(128) // ~2 seconds at 60 Hz
  }
}

/// Simulation statistics.
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
  /// Tick durations in microseconds.
  pub tick_timings: RollingWindow<u64>,
  /// Chunk build durations in microseconds.
  pub chunk_timings: RollingWindow<u64>,

  pub last_tick_us: u64,
  pub frames: u64,

  pub chunks_built: u32,
  pub terrain_vertices: u64,
  pub terrain_indices: u64,
  /// Draw calls issued by the last tick.
  pub last_draw_calls: u32,
}

impl FrameMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record_tick(&mut self, timing_us: u64, draw_calls: u32) {
    if is_enabled() {
      self.tick_timings.push(timing_us);
      self.last_tick_us = timing_us;
      self.frames += 1;
      self.last_draw_calls = draw_calls;
    }
  }

  pub fn record_chunk(&mut self, timing_us: u64, vertex_count: usize, index_count: usize) {
    if !is_enabled() {
      return;
    }
    self.chunk_timings.push(timing_us);
    self.chunks_built += 1;
    self.terrain_vertices += vertex_count as u64;
    self.terrain_indices += index_count as u64;
  }

  pub fn avg_tick_us(&self) -> f64 {
    self.tick_timings.average()
  }

  pub fn avg_chunk_us(&self) -> f64 {
    self.chunk_timings.average()
  }

  /// Approximate terrain mesh memory: 36 bytes per vertex, 4 per index.
  pub fn terrain_memory_mb(&self) -> f64 {
    (self.terrain_vertices * 36 + self.terrain_indices * 4) as f64 / 1_048_576.0
  }
}

#[cfg(all(test, feature = "metrics"))]
#[path = "metrics_test.rs"]
mod metrics_test;
