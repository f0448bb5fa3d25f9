// The gift reveal is gated by a pure exceeding-timestamp comparison.

use card_core::gate;

#[test]
fn locked_strictly_before_cutoff() {
    assert!(!gate::is_unlocked(999.0, 1000.0));
    assert!(!gate::is_unlocked(0.0, 1000.0));
}

#[test]
fn unlocks_at_and_after_cutoff() {
    assert!(gate::is_unlocked(1000.0, 1000.0));
    assert!(gate::is_unlocked(1000.5, 1000.0));
    assert!(gate::is_unlocked(f64::MAX, 1000.0));
}

#[test]
fn cutoff_components_are_a_real_date() {
    let (year, month, day, hour) = gate::GIFT_CUTOFF_LOCAL;
    assert_eq!(year, 2025);
    assert!((1..=12).contains(&month));
    assert!((1..=31).contains(&day));
    assert!(hour < 24);
}
