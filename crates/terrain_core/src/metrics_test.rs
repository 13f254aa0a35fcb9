use super::*;

#[test]
fn test_rolling_window() {
  let mut window = RollingWindow::new(3);
  assert!(window.is_empty());
  assert_eq!(window.min_max(), None);

  window.push(10u64);
  window.push(20);
  window.push(30);
  assert_eq!(window.len(), 3);
  assert_eq!(window.sum(), 60);
  assert_eq!(window.average(), 20.0);

  // Oldest is evicted
  window.push(40);
  assert_eq!(window.len(), 3);
  assert_eq!(window.sum(), 90);
  assert_eq!(window.min_max(), Some((20, 40)));
  assert_eq!(window.last(), Some(&40));
}

#[test]
fn test_frame_metrics_recording() {
  let mut metrics = FrameMetrics::new();
  metrics.record_tick(1000, 6);
  metrics.record_tick(3000, 6);
  metrics.record_chunk(500, 400, 600);
  metrics.record_chunk(700, 400, 600);

  assert_eq!(metrics.frames, 2);
  assert_eq!(metrics.last_tick_us, 3000);
  assert_eq!(metrics.avg_tick_us(), 2000.0);
  assert_eq!(metrics.last_draw_calls, 6);
  assert_eq!(metrics.chunks_built, 2);
  assert_eq!(metrics.terrain_vertices, 800);
  assert_eq!(metrics.avg_chunk_us(), 600.0);
  assert!(metrics.terrain_memory_mb() > 0.0);
}
