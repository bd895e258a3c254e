/// Moves `current` toward `target` by at most `rate * dt`, landing exactly on
/// `target` instead of overshooting it.
pub fn step(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let max_delta = rate * dt;
    if current < target {
        (current + max_delta).min(target)
    } else if current > target {
        (current - max_delta).max(target)
    } else {
        current
    }
}

/// A normalized progress value that approaches its target at a fixed rate
/// (in progress units per second).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween {
    value: f32,
    rate: f32,
}

impl Tween {
    pub fn new(rate: f32) -> Tween {
        Tween { value: 0.0, rate }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }

    /// Returns true if the value moved.
    pub fn advance(&mut self, target: f32, dt: f32) -> bool {
        let next = step(self.value, target, self.rate, dt);
        let moved = next != self.value;
        self.value = next;
        moved
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stays_between_current_and_target() {
        let samples = [0.0, 0.1, 0.25, 0.5, 0.7, 1.0];
        for &current in &samples {
            for &target in &samples {
                for &dt in &[0.0, 0.001, 0.016, 0.1, 1.0] {
                    let next = step(current, target, 4.0, dt);
                    assert!(next >= current.min(target) && next <= current.max(target),
                        "step({current}, {target}, 4.0, {dt}) = {next}");
                    if (current - target).abs() <= 4.0 * dt {
                        assert_eq!(next, target);
                    }
                }
            }
        }
    }

    #[test]
    fn step_is_idempotent_at_target() {
        assert_eq!(step(0.5, 0.5, 8.0, 0.25), 0.5);
        assert_eq!(step(1.0, 1.0, 8.0, 10.0), 1.0);
    }

    #[test]
    fn step_moves_linearly() {
        assert!((step(0.0, 1.0, 8.0, 0.05) - 0.4).abs() < 1e-6);
        assert!((step(1.0, 0.0, 4.0, 0.05) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn tween_reports_movement() {
        let mut tween = Tween::new(8.0);
        assert!(tween.advance(0.5, 0.025));
        assert!((tween.value() - 0.2).abs() < 1e-6);
        assert!(tween.advance(0.5, 1.0));
        assert_eq!(tween.value(), 0.5);
        assert!(!tween.advance(0.5, 1.0));
    }

    #[test]
    fn tween_set_clamps() {
        let mut tween = Tween::new(4.0);
        tween.set(1.7);
        assert_eq!(tween.value(), 1.0);
        tween.set(-0.3);
        assert_eq!(tween.value(), 0.0);
    }
}
