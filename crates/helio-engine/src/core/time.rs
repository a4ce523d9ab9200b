/// Timing info for one animation frame.
///
/// `now` is absolute wall-clock seconds from the host; orbital positions
/// are functions of it. `frame` is the frame ordinal. Spin increments are
/// applied per frame, not per elapsed second, so self-rotation rate tracks
/// the display refresh rate.
#[derive(Debug, Clone, Copy)]
pub struct FrameTime {
    /// Wall-clock time in seconds.
    pub now: f64,
    /// Seconds since the previous frame (0.0 on the first frame).
    pub dt: f32,
    /// Frame ordinal, starting at 0.
    pub frame: u64,
}

/// Tracks wall-clock time across animation frames.
pub struct FrameClock {
    last: Option<f64>,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: None,
            frame: 0,
        }
    }

    /// Record one frame at the given wall-clock time (seconds).
    pub fn tick(&mut self, now: f64) -> FrameTime {
        let dt = match self.last {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        let frame = self.frame;
        self.last = Some(now);
        self.frame += 1;
        FrameTime { now, dt, frame }
    }

    /// Number of frames recorded so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
