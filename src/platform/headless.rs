//! Native stand-ins for the browser collaborators

use std::time::{Duration, Instant};

use super::{DisplaySink, Scheduler};
use crate::consts::FRAME_MS;
use crate::renderer::{Color, DrawingSurface};

/// Surface that discards drawing and only counts calls
#[derive(Debug, Default)]
pub struct NullSurface {
    pub clears: u64,
    pub fills: u64,
}

impl DrawingSurface for NullSurface {
    fn clear(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {
        self.clears += 1;
    }

    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, _color: Color) {
        self.fills += 1;
    }
}

/// Display that logs every update and remembers the latest values
#[derive(Debug, Default)]
pub struct LogDisplay {
    pub score: u64,
    pub lives: u8,
    pub final_score: Option<u64>,
}

impl DisplaySink for LogDisplay {
    fn set_score(&mut self, score: u64) {
        if score != self.score {
            log::debug!("Score: {score}");
        }
        self.score = score;
    }

    fn set_lives(&mut self, lives: u8) {
        if lives != self.lives {
            log::debug!("Lives: {lives}");
        }
        self.lives = lives;
    }

    fn show_game_over(&mut self, final_score: u64) {
        log::info!("GAME OVER - final score {final_score}");
        self.final_score = Some(final_score);
    }

    fn hide_game_over(&mut self) {
        self.final_score = None;
    }
}

/// Fixed-rate clock producing display-refresh timestamps.
///
/// Without `realtime` the timestamps are synthetic and frames run back to
/// back; with it each frame is paced to the wall clock.
#[derive(Debug)]
pub struct FixedClock {
    interval_ms: f64,
    now_ms: f64,
    frames_left: Option<u64>,
    realtime: bool,
    last_wake: Option<Instant>,
}

impl FixedClock {
    /// 60 Hz clock that stops after `max_frames` frames (or never)
    pub fn new(max_frames: Option<u64>, realtime: bool) -> Self {
        Self {
            interval_ms: FRAME_MS,
            now_ms: 0.0,
            frames_left: max_frames,
            realtime,
            last_wake: None,
        }
    }
}

impl Scheduler for FixedClock {
    fn next_frame(&mut self) -> Option<f64> {
        if let Some(left) = self.frames_left.as_mut() {
            if *left == 0 {
                return None;
            }
            *left -= 1;
        }

        if self.realtime {
            let interval = Duration::from_secs_f64(self.interval_ms / 1000.0);
            if let Some(last) = self.last_wake {
                let elapsed = last.elapsed();
                if elapsed < interval {
                    std::thread::sleep(interval - elapsed);
                }
            }
            self.last_wake = Some(Instant::now());
        }

        self.now_ms += self.interval_ms;
        Some(self.now_ms)
    }
}
