use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Base parameter used when none is configured or the configured value is
/// unusable.
pub const DEFAULT_BASE: u32 = 5;

/// Largest accepted base parameter.
///
/// Sweeps reach `2n` servers and each evaluation is O(m), so the blocking
/// server sweep alone costs about `2n^2` steps.
pub const MAX_BASE: u32 = 10_000;

/// Environment variable the report binary reads the base parameter from.
pub const BASE_ENV_VAR: &str = "N";

/// Report bootstrap configuration.
///
/// `base` drives every sweep range of the report. It is passed explicitly so
/// figure building stays deterministic; only the binary consults the
/// environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub base: u32,
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl ReportConfig {
    pub fn new(base: u32) -> ChartResult<Self> {
        validate_base(base)?;

        Ok(Self {
            base,
            viewport: default_viewport(),
            output_dir: default_output_dir(),
        })
    }

    /// Sets the pixel size of single-panel figures. Two-panel figures double
    /// the width.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_base(self.base)?;
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok(())
    }
}

/// Resolves the base parameter from a raw configured value.
///
/// A missing value silently falls back to [`DEFAULT_BASE`]; a present but
/// unparsable or zero value falls back with a warning.
#[must_use]
pub fn parse_base(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_BASE;
    };

    match raw.trim().parse::<u32>() {
        Ok(base) if base > 0 => base,
        Ok(_) => {
            warn!(
                value = raw,
                fallback = DEFAULT_BASE,
                "base parameter must be >= 1"
            );
            DEFAULT_BASE
        }
        Err(err) => {
            warn!(
                value = raw,
                fallback = DEFAULT_BASE,
                error = %err,
                "ignoring unparsable base parameter"
            );
            DEFAULT_BASE
        }
    }
}

fn validate_base(base: u32) -> ChartResult<()> {
    if base == 0 || base > MAX_BASE {
        return Err(ChartError::InvalidData(format!(
            "report base parameter must be in 1..={MAX_BASE}, got {base}"
        )));
    }
    Ok(())
}

/// 10x5 inch figure at 100 dpi; fonts and margins of `RenderStyle` are
/// sized for this resolution.
fn default_viewport() -> Viewport {
    Viewport::new(1000, 500)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
