use crate::error::Error;
use crate::life::Rule;

pub const TITLE: &str = "sdlgol";

/// RGBA colors used when drawing the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: [u8; 4],
    pub alive: [u8; 4],
    pub dead_even: [u8; 4],
    pub dead_odd: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0, 0, 0, 0xff],
            alive: [0xff, 0xff, 0xff, 0xff],
            dead_even: [4, 4, 4, 0xff],
            dead_odd: [6, 6, 6, 0xff],
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub cell_scale: u32,  // Side of one cell in buffer pixels.
    pub window_zoom: f64, // Initial window size relative to the buffer.
    pub frame_rate: f64,
    pub palette: Palette,
    pub rule: Rule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_scale: 20,
            window_zoom: 2.,
            frame_rate: 60.,
            palette: Palette::default(),
            rule: Rule::default(),
        }
    }
}

impl Config {
    /// Rejects values the window and frame pacer cannot work with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.cell_scale == 0 {
            return Err(Error::CellScale);
        }
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.) {
            return Err(Error::FrameRate(self.frame_rate));
        }
        if !(self.window_zoom.is_finite() && self.window_zoom > 0.) {
            return Err(Error::WindowZoom(self.window_zoom));
        }
        Ok(())
    }
}
