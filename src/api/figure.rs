use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DataPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One labeled polyline inside a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub color: Color,
    pub points: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color, points: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            color,
            points,
        }
    }

    pub fn finite_points(&self) -> impl Iterator<Item = DataPoint> + '_ {
        self.points.iter().copied().filter(|point| point.is_finite())
    }
}

/// One set of axes with its own title, axis labels and series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Forces the value axis to include zero.
    #[serde(default)]
    pub y_from_zero: bool,
    pub series: Vec<Series>,
}

impl Panel {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            y_from_zero: false,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_y_from_zero(mut self, y_from_zero: bool) -> Self {
        self.y_from_zero = y_from_zero;
        self
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }
}

/// A complete image: one or more panels laid out side by side.
///
/// `stem` names the output artifacts (`<stem>.png`, `<stem>.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub stem: String,
    pub title: Option<String>,
    pub viewport: Viewport,
    pub panels: SmallVec<[Panel; 2]>,
}

impl Figure {
    #[must_use]
    pub fn new(stem: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            stem: stem.into(),
            title: None,
            viewport,
            panels: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.stem.is_empty() {
            return Err(ChartError::InvalidData(
                "figure stem must not be empty".to_owned(),
            ));
        }
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.panels.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "figure `{}` has no panels",
                self.stem
            )));
        }
        for panel in &self.panels {
            for series in &panel.series {
                series.color.validate()?;
            }
        }
        Ok(())
    }
}
