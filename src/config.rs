// config.rs - Startup configuration and validation

use egui::Color32;
use std::time::Duration;
use thiserror::Error;

use crate::render::CellShape;
use crate::sim::EdgePolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {rows} rows x {cols} cols")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell size must be positive")]
    InvalidCellSize,
    #[error("max fps must be positive")]
    InvalidFrameRate,
}

/// Startup options. Every field has a default matching the classic setup:
/// a 600x500 surface of 10px cells stepped at 10 fps.
#[derive(Debug, Clone)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub alive_color: Color32,
    pub dead_color: Color32,
    pub max_fps: u32,
    pub cell_shape: CellShape,
    pub edge_policy: EdgePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 600,
            height: 500,
            cell_size: 10,
            alive_color: Color32::from_rgb(69, 252, 3),
            dead_color: Color32::BLACK,
            max_fps: 10,
            cell_shape: CellShape::Circle,
            edge_policy: EdgePolicy::SkipLast,
        }
    }
}

impl Config {
    /// Grid dimensions derived from the pixel surface, truncating.
    /// Fixed for the lifetime of the simulation.
    pub fn grid_dims(&self) -> Result<(usize, usize), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::InvalidCellSize);
        }
        let rows = (self.height / self.cell_size) as usize;
        let cols = (self.width / self.cell_size) as usize;
        if rows == 0 || cols == 0 {
            return Err(ConfigError::InvalidDimensions { rows, cols });
        }
        Ok((rows, cols))
    }

    /// Minimum duration of one frame-loop tick.
    pub fn tick_interval(&self) -> Result<Duration, ConfigError> {
        if self.max_fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        Ok(Duration::from_secs_f64(1.0 / self.max_fps as f64))
    }
}
