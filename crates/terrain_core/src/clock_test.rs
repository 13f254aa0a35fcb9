use super::*;

#[test]
fn test_first_tick_is_due_immediately() {
  let clock = FrameClock::default();
  let now = Instant::now();
  assert!(clock.due(now));
  assert_eq!(clock.time_until_due(now), Duration::ZERO);
  assert_eq!(clock.frame(), 0);
}

#[test]
fn test_interval_from_rate() {
  assert_eq!(FrameClock::new(50.0).interval(), Duration::from_millis(20));
  assert_eq!(FrameClock::new(0.0).interval(), FrameClock::default().interval());
  assert_eq!(FrameClock::new(f64::NAN).interval(), FrameClock::default().interval());
}

#[test]
fn test_advance_schedules_next_tick() {
  let mut clock = FrameClock::new(50.0);
  let start = Instant::now();

  assert_eq!(clock.advance(start), 1);
  assert!(!clock.due(start));
  assert!(!clock.due(start + Duration::from_millis(19)));
  assert!(clock.due(start + Duration::from_millis(20)));
  assert_eq!(clock.time_until_due(start + Duration::from_millis(5)), Duration::from_millis(15));

  // Late by a few ms: the next deadline keeps the same cadence
  assert_eq!(clock.advance(start + Duration::from_millis(23)), 2);
  assert!(clock.due(start + Duration::from_millis(40)));
  assert!(!clock.due(start + Duration::from_millis(39)));
}

#[test]
fn test_far_behind_resynchronises() {
  let mut clock = FrameClock::new(50.0);
  let start = Instant::now();
  clock.advance(start);

  let late = start + Duration::from_secs(2);
  clock.advance(late);
  assert!(!clock.due(late));
  assert!(clock.due(late + Duration::from_millis(20)));
}
