// Timed slowdown of boosted stars.
// A Slowdown is one run that pulls every speed multiplier back towards 1
// over a fixed duration, one frame at a time. Runs are started by the
// inactivity timer and are never cancelled: a run started while an older one
// is still going simply overlaps it, and both write the same multipliers.
// Decay keeps the runs that are still in progress.

use crate::starfield::Starfield;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlowdownState {
    Running,
    Finished,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slowdown {
    started_at: f64,
    duration: f64,
}

impl Slowdown {
    // Times are in milliseconds on the same clock as animation frame
    // timestamps.
    pub fn new(started_at: f64, duration: f64) -> Slowdown {
        Slowdown {
            started_at,
            duration,
        }
    }

    // Fraction of the run elapsed at `now`, never below 0. A run with no
    // duration is complete immediately.
    pub fn progress(&self, now: f64) -> f64 {
        if !(self.duration > 0.0) {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).max(0.0)
    }

    // Applies one frame of the run. While in progress each multiplier keeps
    // `1 - progress` of its excess over 1; once complete every multiplier is
    // reset to exactly 1.
    pub fn apply(&self, starfield: &mut Starfield, now: f64) -> SlowdownState {
        let progress = self.progress(now);
        if progress < 1.0 {
            for particle in starfield.particles_mut() {
                particle.speed_multiplier =
                    1.0 + (1.0 - progress) * (particle.speed_multiplier - 1.0);
            }
            SlowdownState::Running
        } else {
            for particle in starfield.particles_mut() {
                particle.speed_multiplier = 1.0;
            }
            SlowdownState::Finished
        }
    }
}

// The slowdown runs still in progress, advanced once per frame
#[derive(Clone, Debug, Default)]
pub struct Decay {
    duration: f64,
    runs: Vec<Slowdown>,
}

impl Decay {
    pub fn new(duration: f64) -> Decay {
        Decay {
            duration,
            runs: Vec::new(),
        }
    }

    pub fn start(&mut self, now: f64) {
        self.runs.push(Slowdown::new(now, self.duration));
    }

    pub fn advance(&mut self, starfield: &mut Starfield, now: f64) {
        self.runs
            .retain(|run| run.apply(starfield, now) == SlowdownState::Running);
    }

    pub fn active_runs(&self) -> usize {
        self.runs.len()
    }
}
