use log::trace;
use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate by sleeping away whatever is left of each frame.
pub struct FramePacer {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FramePacer {
    pub fn new(max_fps: f64) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1.0 / max_fps),
            frame_timer: Instant::now(),
            frametime_smoothed: 1.0 / max_fps,
        }
    }

    pub fn target_frametime(&self) -> Duration {
        self.target_frametime
    }

    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Time left in the frame budget, or `None` if the frame overran.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.target_frametime
            .checked_sub(elapsed)
            .filter(|left| !left.is_zero())
    }

    /// Ends the current frame: sleeps out the budget and starts the next one.
    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();

        match self.remaining(before_wait) {
            Some(left) => sleep(left),
            None => trace!("frame overran by {:?}", before_wait - self.target_frametime),
        }

        self.record(self.frame_timer.elapsed());
        self.frame_timer = Instant::now();
    }

    fn record(&mut self, frametime: Duration) {
        self.frametime_smoothed += (frametime.as_secs_f64() - self.frametime_smoothed) * 0.1;
    }
}
