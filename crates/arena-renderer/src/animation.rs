use arena_core::Point;

/// Move `current` toward `target` by at most `max_step`.
///
/// Lands exactly on `target` once it is within one step, so a token always
/// settles with a remaining distance of exactly zero.
pub fn step_axis(current: f64, target: f64, max_step: f64) -> f64 {
    let max_step = max_step.max(0.0);
    let remaining = target - current;
    if remaining.abs() <= max_step {
        target
    } else {
        current + max_step.copysign(remaining)
    }
}

/// Per-axis step: each axis moves independently at the same speed.
pub fn step_towards(current: Point, target: Point, max_step: f64) -> Point {
    Point::new(
        step_axis(current.x, target.x, max_step),
        step_axis(current.y, target.y, max_step),
    )
}

/// Exact arrival check. Float equality is sound here because `step_axis`
/// snaps onto the target.
pub fn is_settled(current: Point, target: Point) -> bool {
    target.x - current.x == 0.0 && target.y - current.y == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_step_moves_by_max_step() {
        assert!((step_axis(0.0, 100.0, 5.0) - 5.0).abs() < 1e-10);
        assert!((step_axis(100.0, 0.0, 5.0) - 95.0).abs() < 1e-10);
    }

    #[test]
    fn test_step_snaps_to_target() {
        assert_eq!(step_axis(0.1, 0.3, 5.0), 0.3);
        assert_eq!(step_axis(99.0, 100.0, 5.0), 100.0);
    }

    #[test]
    fn test_negative_or_nan_step_does_not_move() {
        assert_eq!(step_axis(10.0, 20.0, -3.0), 10.0);
        assert_eq!(step_axis(10.0, 20.0, f64::NAN), 10.0);
    }

    #[test]
    fn test_axes_are_independent() {
        let next = step_towards(Point::new(0.0, 0.0), Point::new(100.0, 2.0), 5.0);
        assert!((next.x - 5.0).abs() < 1e-10);
        assert_eq!(next.y, 2.0);
        assert!(!is_settled(next, Point::new(100.0, 2.0)));
    }

    #[test]
    fn test_settles_in_finite_steps() {
        let target = Point::new(123.456, -7.89);
        let mut p = Point::new(-0.1, 0.7);
        let mut frames = 0;
        while !is_settled(p, target) {
            p = step_towards(p, target, 300.0 / 60.0);
            frames += 1;
            assert!(frames < 1000);
        }
        assert_eq!(p, target);
    }

    proptest! {
        #[test]
        fn prop_step_never_overshoots(
            current in -10_000.0f64..10_000.0,
            target in -10_000.0f64..10_000.0,
            max_step in 0.0f64..500.0,
        ) {
            let next = step_axis(current, target, max_step);
            prop_assert!((next - target).abs() <= (current - target).abs());
            prop_assert!((next - current).abs() <= max_step + 1e-9);
            if (target - current).abs() <= max_step {
                prop_assert_eq!(next, target);
            }
        }
    }
}
