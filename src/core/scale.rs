use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel interval a scale projects onto.
///
/// `start` is where `domain_start` lands, so a Y axis growing upwards uses
/// `PixelRange::new(bottom, top)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start != self.end
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }
}

/// Tuning controls for data-driven domain fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTuning {
    pub padding_ratio: f64,
    pub min_span_absolute: f64,
    pub include_zero: bool,
}

impl Default for ScaleTuning {
    fn default() -> Self {
        Self {
            padding_ratio: 0.05,
            min_span_absolute: 1.0,
            include_zero: false,
        }
    }
}

impl ScaleTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "scale padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale min span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Fits a padded domain around the finite values of `values`.
    ///
    /// Non-finite values are ignored. An input without finite values yields
    /// the unit domain `[0, 1]`.
    pub fn from_values<I>(values: I, tuning: ScaleTuning) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let tuning = tuning.validate()?;
        let mut bounds: Option<(f64, f64)> = None;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }

        let Some((mut min, mut max)) = bounds else {
            return Self::new(0.0, 1.0);
        };
        if tuning.include_zero {
            min = min.min(0.0);
            max = max.max(0.0);
        }

        let (base_min, base_max) = normalize_range(min, max, tuning.min_span_absolute);
        let padding = (base_max - base_min) * tuning.padding_ratio;
        Self::new(base_min - padding, base_max + padding)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, range: PixelRange) -> ChartResult<f64> {
        validate_range(range)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(range.start + normalized * range.span())
    }

    pub fn pixel_to_domain(self, pixel: f64, range: PixelRange) -> ChartResult<f64> {
        validate_range(range)?;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (pixel - range.start) / range.span();
        Ok(self.domain_start + normalized * span)
    }

    /// Returns round tick values inside the domain, roughly `target_count` of
    /// them, together with the tick step.
    #[must_use]
    pub fn ticks(self, target_count: usize) -> (Vec<f64>, f64) {
        let min = self.domain_start.min(self.domain_end);
        let max = self.domain_start.max(self.domain_end);
        let intervals = target_count.saturating_sub(1).max(1);
        let step = nice_step((max - min) / intervals as f64);

        let first = (min / step).ceil() as i64;
        let last = (max / step).floor() as i64;
        let ticks = (first..=last)
            .map(|index| {
                let value = index as f64 * step;
                // avoid printing "-0"
                if value == 0.0 { 0.0 } else { value }
            })
            .collect();
        (ticks, step)
    }
}

/// Rounds a raw step to the closest 1-2-5 multiple of a power of ten.
#[must_use]
pub fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }

    let magnitude = 10.0_f64.powf(raw_step.log10().floor());
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return raw_step;
    }

    let normalized = raw_step / magnitude;
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn validate_range(range: PixelRange) -> ChartResult<()> {
    if !range.is_valid() {
        return Err(ChartError::InvalidData(
            "pixel range must be finite and non-empty".to_owned(),
        ));
    }
    Ok(())
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> (f64, f64) {
    if start == end {
        let half = min_span / 2.0;
        return (start - half, end + half);
    }

    (start.min(end), start.max(end))
}
