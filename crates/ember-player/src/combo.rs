//! Attack combo timing

/// Position in the three-hit attack combo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboStep {
    First,
    Second,
    Third,
}

impl ComboStep {
    /// 1-based index of the step
    pub fn index(&self) -> u8 {
        match self {
            ComboStep::First => 1,
            ComboStep::Second => 2,
            ComboStep::Third => 3,
        }
    }

    /// The step after this one; the third step wraps to the first
    pub fn next(self) -> Self {
        match self {
            ComboStep::First => ComboStep::Second,
            ComboStep::Second => ComboStep::Third,
            ComboStep::Third => ComboStep::First,
        }
    }
}

/// Classifies attack inputs against the time of the last *accepted* attack.
///
/// With `dt` the time since that attack:
/// - `dt < min_delay`: dropped, nothing changes
/// - `min_delay <= dt <= max_delay`: the combo advances
/// - `dt > max_delay`: the combo restarts at the first step
///
/// The first attack ever is always accepted as `ComboStep::First`.
#[derive(Debug, Clone)]
pub struct ComboTimer {
    min_delay: f64,
    max_delay: f64,
    last_attack_time: Option<f64>,
    step: Option<ComboStep>,
}

impl ComboTimer {
    pub fn new(min_delay: f64, max_delay: f64) -> Self {
        Self {
            min_delay,
            max_delay,
            last_attack_time: None,
            step: None,
        }
    }

    /// Register an attack input at time `now`. Returns the step to play, or
    /// `None` when the input was dropped by the spam guard.
    pub fn register(&mut self, now: f64) -> Option<ComboStep> {
        let step = match (self.last_attack_time, self.step) {
            (Some(last), Some(current)) => {
                let dt = now - last;
                if dt < self.min_delay {
                    return None;
                }
                if dt <= self.max_delay {
                    current.next()
                } else {
                    ComboStep::First
                }
            }
            _ => ComboStep::First,
        };

        self.last_attack_time = Some(now);
        self.step = Some(step);
        Some(step)
    }

    /// Step of the last accepted attack
    pub fn current(&self) -> Option<ComboStep> {
        self.step
    }

    pub fn last_attack_time(&self) -> Option<f64> {
        self.last_attack_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(timer: &mut ComboTimer, times: &[f64]) -> Vec<Option<u8>> {
        times
            .iter()
            .map(|&t| timer.register(t).map(|s| s.index()))
            .collect()
    }

    #[test]
    fn test_reference_scenario() {
        let mut timer = ComboTimer::new(0.25, 0.5);
        assert_eq!(timer.register(0.0), Some(ComboStep::First));
        assert_eq!(timer.register(0.3), Some(ComboStep::Second));
        // 0.05s after the last accepted attack: dropped
        assert_eq!(timer.register(0.35), None);
        assert_eq!(timer.current(), Some(ComboStep::Second));
        assert_eq!(timer.last_attack_time(), Some(0.3));
        // 0.7s gap is past the window
        assert_eq!(timer.register(1.0), Some(ComboStep::First));
    }

    #[test]
    fn test_cycles_within_window() {
        let mut timer = ComboTimer::new(0.25, 0.5);
        let times: Vec<f64> = (0..7).map(|i| i as f64 * 0.4).collect();
        assert_eq!(
            indices(&mut timer, &times),
            vec![Some(1), Some(2), Some(3), Some(1), Some(2), Some(3), Some(1)]
        );
    }

    #[test]
    fn test_spam_does_not_shift_timing() {
        let mut timer = ComboTimer::new(0.25, 0.5);
        timer.register(0.0);
        // Rapid fire below the min delay, all dropped
        for t in [0.05, 0.1, 0.15, 0.2, 0.24] {
            assert_eq!(timer.register(t), None);
        }
        assert_eq!(timer.last_attack_time(), Some(0.0));
        // Measured from 0.0, not from the last attempt at 0.24
        assert_eq!(timer.register(0.26), Some(ComboStep::Second));
    }

    #[test]
    fn test_window_edges_are_inclusive() {
        let mut timer = ComboTimer::new(0.25, 0.5);
        timer.register(1.0);
        assert_eq!(timer.register(1.25), Some(ComboStep::Second));
        assert_eq!(timer.register(1.75), Some(ComboStep::Third));
    }

    #[test]
    fn test_long_gap_resets_from_any_step() {
        for advances in 0..3 {
            let mut timer = ComboTimer::new(0.25, 0.5);
            let mut t = 0.0;
            timer.register(t);
            for _ in 0..advances {
                t += 0.3;
                timer.register(t);
            }
            assert_eq!(timer.register(t + 0.51), Some(ComboStep::First));
        }
    }

    #[test]
    fn test_first_attack_always_accepted() {
        let mut timer = ComboTimer::new(0.25, 0.5);
        assert_eq!(timer.current(), None);
        assert_eq!(timer.register(0.0), Some(ComboStep::First));
    }

    #[test]
    fn test_step_wraps() {
        assert_eq!(ComboStep::Third.next(), ComboStep::First);
        assert_eq!(ComboStep::First.next().index(), 2);
    }
}
