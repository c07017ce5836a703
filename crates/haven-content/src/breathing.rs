use serde::Serialize;

use crate::library::BreathingExercise;

/// Phase of a breathing cycle, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
    Rest,
}

impl BreathPhase {
    const ORDER: [BreathPhase; 4] = [
        BreathPhase::Inhale,
        BreathPhase::Hold,
        BreathPhase::Exhale,
        BreathPhase::Rest,
    ];

    fn index(self) -> usize {
        match self {
            BreathPhase::Inhale => 0,
            BreathPhase::Hold => 1,
            BreathPhase::Exhale => 2,
            BreathPhase::Rest => 3,
        }
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Inhale",
            BreathPhase::Hold | BreathPhase::Rest => "Hold",
            BreathPhase::Exhale => "Exhale",
        }
    }
}

/// Countdown state for guiding a user through an exercise.
///
/// Each [`tick`](Self::tick) is one time unit. Zero-length phases are passed
/// over without consuming a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreathingSession {
    pattern: [u32; 4],
    phase: BreathPhase,
    remaining: u32,
    cycle: u32,
    active: bool,
}

impl BreathingSession {
    pub fn new(pattern: [u32; 4]) -> Self {
        Self {
            pattern,
            phase: BreathPhase::Inhale,
            remaining: pattern[0],
            cycle: 0,
            active: false,
        }
    }

    pub fn for_exercise(exercise: &BreathingExercise) -> Self {
        Self::new(exercise.pattern)
    }

    pub fn start(&mut self) {
        self.active = true;
        self.settle();
    }

    pub fn pause(&mut self) {
        self.active = false;
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.phase = BreathPhase::Inhale;
        self.remaining = self.pattern[0];
        self.cycle = 0;
    }

    /// Advance the countdown by one time unit. Does nothing while paused.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.settle();
    }

    fn settle(&mut self) {
        // Bounded so an all-zero pattern cannot spin forever.
        for _ in 0..BreathPhase::ORDER.len() {
            if self.remaining > 0 {
                return;
            }
            self.phase = self.phase.next();
            self.remaining = self.pattern[self.phase.index()];
            if self.phase == BreathPhase::Inhale {
                self.cycle += 1;
            }
        }
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Fraction of the current phase already elapsed, in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        let total = self.pattern[self.phase.index()];
        if total == 0 {
            return 1.0;
        }
        (total - self.remaining.min(total)) as f32 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut BreathingSession, ticks: u32) {
        for _ in 0..ticks {
            session.tick();
        }
    }

    #[test]
    fn test_initial_state() {
        let session = BreathingSession::new([4, 4, 4, 4]);
        assert_eq!(session.phase(), BreathPhase::Inhale);
        assert_eq!(session.remaining(), 4);
        assert_eq!(session.cycle(), 0);
        assert!(!session.is_active());
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut session = BreathingSession::new([4, 4, 4, 4]);
        run(&mut session, 3);
        assert_eq!(session.remaining(), 4);

        session.start();
        run(&mut session, 2);
        session.pause();
        run(&mut session, 5);
        assert_eq!(session.remaining(), 2);
    }

    #[test]
    fn test_phases_advance_and_wrap() {
        let mut session = BreathingSession::new([2, 1, 2, 1]);
        session.start();

        run(&mut session, 2);
        assert_eq!(session.phase(), BreathPhase::Hold);
        assert_eq!(session.remaining(), 1);

        run(&mut session, 1);
        assert_eq!(session.phase(), BreathPhase::Exhale);

        run(&mut session, 3);
        assert_eq!(session.phase(), BreathPhase::Inhale);
        assert_eq!(session.remaining(), 2);
        assert_eq!(session.cycle(), 1);
    }

    #[test]
    fn test_zero_length_rest_is_skipped() {
        // 4-7-8 has no rest phase
        let mut session = BreathingSession::new([4, 7, 8, 0]);
        session.start();
        run(&mut session, 4 + 7 + 8);
        assert_eq!(session.phase(), BreathPhase::Inhale);
        assert_eq!(session.remaining(), 4);
        assert_eq!(session.cycle(), 1);
    }

    #[test]
    fn test_all_zero_pattern_does_not_spin() {
        let mut session = BreathingSession::new([0, 0, 0, 0]);
        session.start();
        session.tick();
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn test_reset() {
        let mut session = BreathingSession::new([1, 1, 1, 1]);
        session.start();
        run(&mut session, 6);
        assert!(session.cycle() >= 1);

        session.reset();
        assert_eq!(session, BreathingSession::new([1, 1, 1, 1]));
    }

    #[test]
    fn test_progress() {
        let mut session = BreathingSession::new([4, 4, 4, 4]);
        assert_eq!(session.progress(), 0.0);
        session.start();
        run(&mut session, 2);
        assert!((session.progress() - 0.5).abs() < f32::EPSILON);
    }
}
