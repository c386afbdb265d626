use std::time::{Duration, Instant};

const FPS_WINDOW: Duration = Duration::from_secs(1);

pub struct FrameTimer {
    frame_started: Instant,
    accumulated: Duration,
    frames: u32,
    last_frame: Duration,
}

impl Default for FrameTimer {
    fn default() -> Self {
        FrameTimer {
            frame_started: Instant::now(),
            accumulated: Duration::ZERO,
            frames: 0,
            last_frame: Duration::ZERO,
        }
    }
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_start(&mut self) {
        self.frame_started = Instant::now();
    }

    pub fn frame_end(&mut self) -> Option<u32> {
        let dt = self.frame_started.elapsed();
        self.tick(dt)
    }

    /// Duration of the most recently finished frame.
    pub fn last_frame(&self) -> Duration {
        self.last_frame
    }

    /// Counts one frame of length `dt`; yields the frame count once a full second has passed.
    pub fn tick(&mut self, dt: Duration) -> Option<u32> {
        self.last_frame = dt;
        self.accumulated += dt;
        self.frames += 1;

        if self.accumulated > FPS_WINDOW {
            let fps = self.frames;
            log::debug!("[FPS] {}", fps);
            self.accumulated = Duration::ZERO;
            self.frames = 0;
            Some(fps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_after_one_second() {
        let mut timer = FrameTimer::new();
        let frame = Duration::from_millis(16);

        let mut reported = None;
        for _ in 0..100 {
            if let Some(fps) = timer.tick(frame) {
                reported = Some(fps);
                break;
            }
        }

        // 63 * 16ms = 1008ms is the first total over a second
        assert_eq!(reported, Some(63));
    }

    #[test]
    fn resets_after_report() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.tick(Duration::from_millis(1500)), Some(1));
        assert_eq!(timer.tick(Duration::from_millis(10)), None);
        assert_eq!(timer.last_frame(), Duration::from_millis(10));
    }
}
