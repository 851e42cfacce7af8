//! Viewer configuration
//!
//! Sectioned settings for the 2D viewer, stored as JSON or TOML depending on
//! the file extension.

use std::path::{Path, PathBuf};

use floorplan2d_core::constants::{DEFAULT_ZOOM_STEP, RULER_UNIT_PIXEL_SIZE};
use floorplan2d_core::SnapMask;
use floorplan2d_viewer::{AlignX, AlignY, ViewerOptions};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};

const CONFIG_DIR_NAME: &str = "floorplan2d";
const CONFIG_FILE_NAME: &str = "viewer.toml";

/// Camera fit and zoom bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Smallest allowed scale factor (unbounded when unset)
    pub scale_factor_min: Option<f64>,
    /// Largest allowed scale factor (unbounded when unset)
    pub scale_factor_max: Option<f64>,
    pub align_x: AlignX,
    pub align_y: AlignY,
    /// Scene units kept on screen while panning
    pub pan_limit: Option<f64>,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            scale_factor_min: None,
            scale_factor_max: None,
            align_x: AlignX::Cover,
            align_y: AlignY::Cover,
            pan_limit: None,
        }
    }
}

/// Pointer interaction preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Multiplier of one zoom-tool click
    pub zoom_step: f64,
    pub view_only: bool,
    /// Snap mask a new project starts with
    pub default_snap_mask: SnapMask,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
            view_only: false,
            default_snap_mask: SnapMask::ALL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerSettings {
    /// Pixels per ruler unit at zoom 1
    pub unit_pixel_size: f64,
}

impl Default for RulerSettings {
    fn default() -> Self {
        Self {
            unit_pixel_size: RULER_UNIT_PIXEL_SIZE,
        }
    }
}

/// Complete viewer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewerSettings {
    pub viewport: ViewportSettings,
    pub interaction: InteractionSettings,
    pub rulers: RulerSettings,
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl ViewerSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings file under the user's config directory
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no config directory on this platform".to_string())
        })?;
        Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        debug!(path = %path.display(), "viewer settings loaded");
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save settings to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::of(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "viewer settings saved");
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let viewport = &self.viewport;

        if let Some(min) = viewport.scale_factor_min {
            if !positive(min) {
                return Err(SettingsError::invalid("viewport.scale_factor_min", "must be > 0"));
            }
        }
        if let Some(max) = viewport.scale_factor_max {
            if !positive(max) {
                return Err(SettingsError::invalid("viewport.scale_factor_max", "must be > 0"));
            }
        }
        if let (Some(min), Some(max)) = (viewport.scale_factor_min, viewport.scale_factor_max) {
            if min > max {
                return Err(SettingsError::invalid(
                    "viewport.scale_factor_min",
                    format!("{min} exceeds scale_factor_max {max}"),
                ));
            }
        }
        if let Some(limit) = viewport.pan_limit {
            if !limit.is_finite() || limit < 0.0 {
                return Err(SettingsError::invalid("viewport.pan_limit", "must be >= 0"));
            }
        }

        let zoom_step = self.interaction.zoom_step;
        if !zoom_step.is_finite() || zoom_step <= 1.0 {
            return Err(SettingsError::invalid("interaction.zoom_step", "must be > 1"));
        }
        if !SnapMask::ALL.contains(self.interaction.default_snap_mask) {
            return Err(SettingsError::invalid(
                "interaction.default_snap_mask",
                format!("unknown bits in {:#b}", self.interaction.default_snap_mask.bits()),
            ));
        }

        if !positive(self.rulers.unit_pixel_size) {
            return Err(SettingsError::invalid("rulers.unit_pixel_size", "must be > 0"));
        }

        Ok(())
    }

    /// Viewer options described by these settings
    pub fn to_options(&self) -> ViewerOptions {
        ViewerOptions {
            view_only: self.interaction.view_only,
            zoom_step: self.interaction.zoom_step,
            pan_limit: self.viewport.pan_limit,
            align_x: self.viewport.align_x,
            align_y: self.viewport.align_y,
            scale_factor_min: self.viewport.scale_factor_min,
            scale_factor_max: self.viewport.scale_factor_max,
            ruler_unit_pixel_size: self.rulers.unit_pixel_size,
        }
    }
}
