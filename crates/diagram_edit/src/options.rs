//! Editor options with TOML persistence.

use std::fs;
use std::path::Path;

use anyhow::Context;
use diagram_engine::{EngineResult, Size, Vec2, limits};
use serde::{Deserialize, Serialize};

use crate::tools::DEFAULT_FREEFORM_CHAR;

/// Persisted editor configuration: grid dimensions, cell pixel size,
/// zoom range and the default freeform character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub grid_width: i32,
    pub grid_height: i32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub freeform_char: char,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            grid_width: 500,
            grid_height: 300,
            cell_width: limits::DEFAULT_CELL_WIDTH,
            cell_height: limits::DEFAULT_CELL_HEIGHT,
            min_zoom: limits::MIN_ZOOM,
            max_zoom: limits::MAX_ZOOM,
            freeform_char: DEFAULT_FREEFORM_CHAR,
        }
    }
}

impl Options {
    pub const FILE_NAME: &'static str = "options.toml";

    pub fn grid_size(&self) -> Size {
        Size::new(self.grid_width, self.grid_height)
    }

    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(self.cell_width, self.cell_height)
    }

    /// Load options from `path`, clamping grid dimensions to the
    /// engine limits. A missing file yields the defaults.
    pub fn load(path: &Path) -> EngineResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let txt = fs::read_to_string(path).with_context(|| format!("Error reading options file {}", path.display()))?;
        let mut options: Options = toml::from_str(&txt).with_context(|| format!("Error parsing options file {}", path.display()))?;

        let (width, height) = limits::clamp_dimensions(options.grid_width, options.grid_height);
        if (width, height) != (options.grid_width, options.grid_height) {
            log::warn!(
                "options: grid size {}x{} outside limits, clamped to {}x{}",
                options.grid_width,
                options.grid_height,
                width,
                height
            );
            options.grid_width = width;
            options.grid_height = height;
        }
        Ok(options)
    }

    pub fn store(&self, path: &Path) -> EngineResult<()> {
        let text = toml::to_string_pretty(self).context("Error serializing options")?;
        fs::write(path, text).with_context(|| format!("Error writing options file {}", path.display()))?;
        Ok(())
    }
}
