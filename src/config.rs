// Command-line configuration

use std::path::PathBuf;

use clap::Parser;
use glam::IVec2;

use crate::engine::game_loop::DEFAULT_TICK_RATE;
use crate::game::level::{VIEW_HEIGHT, VIEW_WIDTH};

/// Royale 2D
#[derive(Debug, Clone, Parser)]
#[command(version, about = "Top-down sprite and tile-map runtime")]
pub struct GameConfig {
    /// Asset root holding spritesheets/, sprites/ and maps/
    #[arg(long, value_name = "PATH", default_value = "assets")]
    pub assets: PathBuf,

    /// Map directory under maps/ to load
    #[arg(long, value_name = "NAME", default_value = "sample_map")]
    pub map: String,

    /// Window pixels per world pixel
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=16))]
    pub scale: u32,

    /// Logic ticks per second
    #[arg(long, default_value_t = DEFAULT_TICK_RATE, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub tick_rate: u32,

    /// Player start position in world pixels
    #[arg(long, default_value_t = 500, allow_negative_numbers = true)]
    pub spawn_x: i32,

    #[arg(long, default_value_t = 500, allow_negative_numbers = true)]
    pub spawn_y: i32,
}

impl GameConfig {
    /// Window size in logical pixels
    pub fn window_size(&self) -> (u32, u32) {
        (
            VIEW_WIDTH as u32 * self.scale,
            VIEW_HEIGHT as u32 * self.scale,
        )
    }

    pub fn spawn(&self) -> IVec2 {
        IVec2::new(self.spawn_x, self.spawn_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::parse_from(["royale-2d"]);
        assert_eq!(config.assets, PathBuf::from("assets"));
        assert_eq!(config.map, "sample_map");
        assert_eq!(config.scale, 4);
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.spawn(), IVec2::new(500, 500));
        assert_eq!(config.window_size(), (1024, 896));
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::parse_from([
            "royale-2d",
            "--assets",
            "/data/game",
            "--map",
            "castle",
            "--scale",
            "2",
            "--tick-rate",
            "30",
            "--spawn-x=-8",
            "--spawn-y",
            "12",
        ]);
        assert_eq!(config.assets, PathBuf::from("/data/game"));
        assert_eq!(config.map, "castle");
        assert_eq!(config.window_size(), (512, 448));
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.spawn(), IVec2::new(-8, 12));
    }

    #[test]
    fn test_rejects_zero_scale() {
        assert!(GameConfig::try_parse_from(["royale-2d", "--scale", "0"]).is_err());
        assert!(GameConfig::try_parse_from(["royale-2d", "--tick-rate", "0"]).is_err());
    }
}
