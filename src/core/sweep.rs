use serde::{Deserialize, Serialize};
use tracing::trace;

#[cfg(feature = "parallel-sweep")]
use rayon::prelude::*;

use crate::core::DataPoint;
use crate::core::erlang::{avg_queue_length, erlang_b, erlang_c};
use crate::error::{ChartError, ChartResult};

/// Metric evaluated by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Erlang B blocking probability.
    Blocking,
    /// Erlang C waiting probability.
    Waiting,
    /// Mean queue length of the delay system.
    QueueLength,
}

impl Metric {
    pub fn evaluate(self, load: f64, servers: u32) -> ChartResult<f64> {
        match self {
            Self::Blocking => erlang_b(load, servers),
            Self::Waiting => erlang_c(load, servers),
            Self::QueueLength => avg_queue_length(load, servers),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Blocking => "Blocking probability",
            Self::Waiting => "Waiting probability",
            Self::QueueLength => "Mean queue length",
        }
    }

    /// Whether values are probabilities bounded to `[0, 1]`.
    #[must_use]
    pub fn is_probability(self) -> bool {
        matches!(self, Self::Blocking | Self::Waiting)
    }
}

/// Integer offered loads `start, start + 1, ..` below `end_exclusive`.
#[must_use]
pub fn integer_loads(start: u32, end_exclusive: u32) -> Vec<f64> {
    (start..end_exclusive).map(f64::from).collect()
}

/// `intervals + 1` evenly spaced loads from `min` to `max` inclusive.
pub fn uniform_loads(min: f64, max: f64, intervals: u32) -> ChartResult<Vec<f64>> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(ChartError::InvalidData(
            "load grid bounds must be finite with min <= max".to_owned(),
        ));
    }
    if intervals == 0 {
        return Err(ChartError::InvalidData(
            "load grid needs at least one interval".to_owned(),
        ));
    }

    let step = (max - min) / f64::from(intervals);
    Ok((0..=intervals)
        .map(|index| min + f64::from(index) * step)
        .collect())
}

/// Server counts `start..=end_inclusive`; empty when `start > end_inclusive`.
#[must_use]
pub fn server_range(start: u32, end_inclusive: u32) -> Vec<u32> {
    (start..=end_inclusive).collect()
}

/// Evaluates `metric` for each offered load at a fixed server count.
///
/// Points use the load as `x`.
pub fn sweep_load(metric: Metric, loads: &[f64], servers: u32) -> ChartResult<Vec<DataPoint>> {
    trace!(?metric, count = loads.len(), servers, "sweep offered load");

    #[cfg(feature = "parallel-sweep")]
    {
        loads
            .par_iter()
            .map(|&load| metric.evaluate(load, servers).map(|y| DataPoint::new(load, y)))
            .collect()
    }

    #[cfg(not(feature = "parallel-sweep"))]
    {
        loads
            .iter()
            .map(|&load| metric.evaluate(load, servers).map(|y| DataPoint::new(load, y)))
            .collect()
    }
}

/// Evaluates `metric` for each server count at a fixed offered load.
///
/// Points use the server count as `x`.
pub fn sweep_servers(metric: Metric, load: f64, servers: &[u32]) -> ChartResult<Vec<DataPoint>> {
    trace!(?metric, load, count = servers.len(), "sweep server count");

    #[cfg(feature = "parallel-sweep")]
    {
        servers
            .par_iter()
            .map(|&m| metric.evaluate(load, m).map(|y| DataPoint::new(f64::from(m), y)))
            .collect()
    }

    #[cfg(not(feature = "parallel-sweep"))]
    {
        servers
            .iter()
            .map(|&m| metric.evaluate(load, m).map(|y| DataPoint::new(f64::from(m), y)))
            .collect()
    }
}
