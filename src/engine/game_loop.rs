/// Fixed-rate tick scheduler
///
/// Game logic runs in whole ticks at a fixed rate while frames are drawn as
/// often as the window asks. Each frame reports how many ticks have come due.
use std::time::{Duration, Instant};

/// Default logic rate
pub const DEFAULT_TICK_RATE: u32 = 60;

/// Ticks allowed per frame before the backlog is dropped
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Game loop timing state
#[derive(Debug)]
pub struct GameLoop {
    tick_duration: Duration,
    accumulator: Duration,
    last_frame_time: Instant,
    paused: bool,
    frame_count: u64,
    tick_count: u64,
}

impl GameLoop {
    /// Create a loop ticking `tick_rate` times per second (at least once)
    pub fn new(tick_rate: u32) -> Self {
        let tick_rate = tick_rate.max(1);
        Self {
            tick_duration: Duration::from_secs(1) / tick_rate,
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `elapsed` wall time and return the ticks now due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.tick_duration && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.tick_duration;
            ticks += 1;
        }

        // A stalled frame must not snowball into ever longer catch-up frames
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= self.tick_duration {
            log::warn!(
                "Dropping {:?} of tick backlog",
                self.accumulator - self.accumulator.min(self.tick_duration)
            );
            self.accumulator = self.accumulator.min(self.tick_duration);
        }

        self.tick_count += ticks as u64;
        ticks
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks handed out
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a tick burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::default();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.tick_count(), 0);
        assert!(!game_loop.is_paused());
        assert_relative_eq!(
            game_loop.tick_duration().as_secs_f32(),
            1.0 / 60.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_zero_rate_clamped() {
        let game_loop = GameLoop::new(0);
        assert_eq!(game_loop.tick_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_ticks_accumulate_across_frames() {
        let mut game_loop = GameLoop::new(100);
        assert_eq!(game_loop.advance(ms(5)), 0);
        assert_eq!(game_loop.advance(ms(5)), 1);
        assert_eq!(game_loop.advance(ms(25)), 2);
        assert_eq!(game_loop.tick_count(), 3);
        assert_eq!(game_loop.frame_count(), 3);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut game_loop = GameLoop::new(100);
        assert_eq!(game_loop.advance(ms(300)), MAX_TICKS_PER_FRAME);
        // Backlog was dropped, so the next short frame does not catch up
        assert!(game_loop.advance(ms(1)) <= 1);
    }

    #[test]
    fn test_pause_resume() {
        let mut game_loop = GameLoop::new(100);
        game_loop.pause();
        assert!(game_loop.is_paused());
        assert_eq!(game_loop.advance(ms(100)), 0);

        game_loop.resume();
        assert!(!game_loop.is_paused());
        assert_eq!(game_loop.advance(ms(10)), 1);
    }

    #[test]
    fn test_begin_frame_counts_frames() {
        let mut game_loop = GameLoop::default();
        game_loop.begin_frame();
        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 2);
    }
}
