//! Cyclic step animator for the recursion-trace visualization.

use std::time::{Duration, Instant};

pub const BASE_INTERVAL: Duration = Duration::from_millis(1000);

/// Playback speed multiplier. The advance interval is
/// `BASE_INTERVAL / multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    Half,
    #[default]
    Normal,
    Double,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Half, Speed::Normal, Speed::Double];

    pub fn multiplier(&self) -> f64 {
        match self {
            Speed::Half => 0.5,
            Speed::Normal => 1.0,
            Speed::Double => 2.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Speed::Half => "0.5x",
            Speed::Normal => "1x",
            Speed::Double => "2x",
        }
    }
}

/// A ring over a fixed-length step sequence: `next`/`prev` wrap in both
/// directions and there is no terminal state. While playing, `tick`
/// advances the index once per elapsed interval.
#[derive(Debug)]
pub struct StepAnimator {
    len: usize,
    index: usize,
    playing: bool,
    speed: Speed,
    /// Instant of the last automatic or manual advance; the next
    /// deadline is re-derived from it so speed changes keep the
    /// accumulated phase up to the next tick boundary.
    last_advance: Instant,
}

impl StepAnimator {
    pub fn new(len: usize, now: Instant) -> Self {
        assert!(len > 0, "animation needs at least one step");
        Self {
            len,
            index: 0,
            playing: true,
            speed: Speed::Normal,
            last_advance: now,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn play(&mut self, now: Instant) {
        if !self.playing {
            self.playing = true;
            self.last_advance = now;
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.playing {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Valid in either state; resets the phase of the automatic advance.
    pub fn next(&mut self, now: Instant) {
        self.index = (self.index + 1) % self.len;
        self.last_advance = now;
    }

    /// Valid in either state; wraps below zero.
    pub fn prev(&mut self, now: Instant) {
        self.index = (self.index + self.len - 1) % self.len;
        self.last_advance = now;
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    fn interval(&self) -> Duration {
        BASE_INTERVAL.div_f64(self.speed.multiplier())
    }

    /// Advance zero or more steps depending on how much time elapsed
    /// since the last advance. Monotonic modulo wraparound; steps are
    /// never skipped or duplicated under normal scheduling.
    pub fn tick(&mut self, now: Instant) {
        if !self.playing {
            return;
        }
        let interval = self.interval();
        while now.duration_since(self.last_advance) >= interval {
            self.index = (self.index + 1) % self.len;
            self.last_advance += interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};

    #[test]
    fn next_n_times_closes_the_ring() {
        let clock = ManualClock::new();
        let mut anim = StepAnimator::new(22, clock.now());
        for _ in 0..22 {
            anim.next(clock.now());
        }
        assert_eq!(anim.index(), 0);
    }

    #[test]
    fn prev_after_next_is_identity() {
        let clock = ManualClock::new();
        let mut anim = StepAnimator::new(22, clock.now());
        anim.next(clock.now());
        anim.prev(clock.now());
        assert_eq!(anim.index(), 0);
    }

    #[test]
    fn prev_wraps_below_zero() {
        let clock = ManualClock::new();
        let mut anim = StepAnimator::new(5, clock.now());
        anim.prev(clock.now());
        assert_eq!(anim.index(), 4);
    }

    #[test]
    fn paused_animator_does_not_advance() {
        let clock = ManualClock::new();
        let mut anim = StepAnimator::new(5, clock.now());
        anim.pause();
        clock.advance(Duration::from_secs(30));
        anim.tick(clock.now());
        assert_eq!(anim.index(), 0);
    }

    #[test]
    fn double_speed_halves_the_advance_interval() {
        let clock = ManualClock::new();
        let mut normal = StepAnimator::new(100, clock.now());
        let mut double = StepAnimator::new(100, clock.now());
        double.set_speed(Speed::Double);

        clock.advance(Duration::from_millis(4000));
        normal.tick(clock.now());
        double.tick(clock.now());

        assert_eq!(normal.index(), 4);
        assert_eq!(double.index(), 8);
    }

    #[test]
    fn half_speed_doubles_the_advance_interval() {
        let clock = ManualClock::new();
        let mut anim = StepAnimator::new(100, clock.now());
        anim.set_speed(Speed::Half);
        clock.advance(Duration::from_millis(4000));
        anim.tick(clock.now());
        assert_eq!(anim.index(), 2);
    }

    #[test]
    fn speed_change_mid_playback_keeps_index_and_phase() {
        let clock = ManualClock::new();
        let mut anim = StepAnimator::new(100, clock.now());

        clock.advance(Duration::from_millis(1500));
        anim.tick(clock.now());
        assert_eq!(anim.index(), 1);

        // 500 ms of phase is already accumulated; at 2x the next
        // boundary is 500 ms after the last advance, so it fires now.
        anim.set_speed(Speed::Double);
        anim.tick(clock.now());
        assert_eq!(anim.index(), 2);
    }
}
