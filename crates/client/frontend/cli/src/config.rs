//! CLI configuration structures and loaders.
use std::env;

/// Configuration for the terminal client.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Input poll interval in milliseconds.
    pub frame_interval_ms: u64,
    /// Points awarded per pellet.
    pub pellet_points: i64,
    /// Points awarded per ghost.
    pub ghost_points: i64,
    /// Activity feed capacity.
    pub activity_capacity: usize,
    /// Name the running score is saved under.
    pub player_name: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 33,
            pellet_points: 10,
            ghost_points: 200,
            activity_capacity: 32,
            player_name: "Pacman".to_string(),
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PACMAN_FRAME_INTERVAL_MS` - Input poll interval (default: 33)
    /// - `PACMAN_PELLET_POINTS` - Points per pellet (default: 10)
    /// - `PACMAN_GHOST_POINTS` - Points per ghost (default: 200)
    /// - `PACMAN_ACTIVITY_CAPACITY` - Activity feed capacity (default: 32)
    /// - `PACMAN_PLAYER` - Player name for saved runs (default: "Pacman")
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("PACMAN_FRAME_INTERVAL_MS") {
            config.frame_interval_ms = interval.max(1);
        }

        // Point values are clamped to zero: the board rejects negative awards
        if let Some(points) = read_env::<i64>("PACMAN_PELLET_POINTS") {
            config.pellet_points = points.max(0);
        }
        if let Some(points) = read_env::<i64>("PACMAN_GHOST_POINTS") {
            config.ghost_points = points.max(0);
        }

        if let Some(capacity) = read_env::<usize>("PACMAN_ACTIVITY_CAPACITY") {
            config.activity_capacity = capacity.max(1);
        }

        if let Ok(name) = env::var("PACMAN_PLAYER") {
            if !name.is_empty() {
                config.player_name = name;
            }
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
