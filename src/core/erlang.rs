use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// All metrics of one (offered load, server count) operating point.
///
/// `queue_length` is `f64::INFINITY` for saturated points, which serializes
/// as `null` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficMetrics {
    pub load: f64,
    pub servers: u32,
    pub blocking: f64,
    pub waiting: f64,
    pub queue_length: f64,
}

impl TrafficMetrics {
    pub fn evaluate(load: f64, servers: u32) -> ChartResult<Self> {
        Ok(Self {
            load,
            servers,
            blocking: erlang_b(load, servers)?,
            waiting: erlang_c(load, servers)?,
            queue_length: avg_queue_length(load, servers)?,
        })
    }

    #[must_use]
    pub fn is_stable(self) -> bool {
        is_stable(self.load, self.servers)
    }
}

/// Returns `true` when a delay system with `servers` lines keeps up with
/// `load` Erlangs, i.e. `load < servers`.
#[must_use]
pub fn is_stable(load: f64, servers: u32) -> bool {
    load < f64::from(servers)
}

/// Erlang B blocking probability of a loss system (M/M/m/m).
///
/// Evaluates the inverted recurrence `inv(k) = 1 + (k / A) * inv(k - 1)` with
/// `inv(0) = 1` and returns `1 / inv(m)`. This is O(m) with a single running
/// scalar. For large `m` the running value may overflow to `+inf`, which maps
/// to the correct limit of `0.0`.
///
/// - `servers == 0` always blocks: `1.0`.
/// - `load == 0` never blocks when `servers > 0`: `0.0`.
pub fn erlang_b(load: f64, servers: u32) -> ChartResult<f64> {
    let load = validate_load(load)?;
    if servers == 0 {
        return Ok(1.0);
    }
    if load == 0.0 {
        return Ok(0.0);
    }

    let mut inverse = 1.0_f64;
    for k in 1..=servers {
        inverse = 1.0 + (f64::from(k) / load) * inverse;
    }
    Ok(1.0 / inverse)
}

/// Erlang C probability that an arriving request has to wait (M/M/m).
///
/// Saturated systems (`load >= servers`) return `1.0`.
pub fn erlang_c(load: f64, servers: u32) -> ChartResult<f64> {
    let load = validate_load(load)?;
    if !is_stable(load, servers) {
        return Ok(1.0);
    }

    let blocking = erlang_b(load, servers)?;
    let utilization = load / f64::from(servers);
    let waiting = blocking / (1.0 - utilization * (1.0 - blocking));
    Ok(waiting.min(1.0))
}

/// Mean number of requests waiting in the queue of an M/M/m system.
///
/// Saturated systems (`load >= servers`) return `f64::INFINITY`.
pub fn avg_queue_length(load: f64, servers: u32) -> ChartResult<f64> {
    let load = validate_load(load)?;
    if !is_stable(load, servers) {
        return Ok(f64::INFINITY);
    }

    let waiting = erlang_c(load, servers)?;
    Ok(load * waiting / (f64::from(servers) - load))
}

fn validate_load(load: f64) -> ChartResult<f64> {
    if !load.is_finite() || load < 0.0 {
        return Err(ChartError::InvalidLoad { load });
    }
    Ok(load)
}

#[cfg(test)]
mod tests {
    use super::{TrafficMetrics, avg_queue_length, erlang_b, erlang_c};
    use crate::error::ChartError;

    #[test]
    fn zero_load_with_capacity_never_blocks_or_waits() {
        assert_eq!(erlang_b(0.0, 4).expect("erlang b"), 0.0);
        assert_eq!(erlang_c(0.0, 4).expect("erlang c"), 0.0);
        assert_eq!(avg_queue_length(0.0, 4).expect("queue"), 0.0);
    }

    #[test]
    fn zero_load_without_capacity_is_saturated() {
        assert_eq!(erlang_b(0.0, 0).expect("erlang b"), 1.0);
        assert_eq!(erlang_c(0.0, 0).expect("erlang c"), 1.0);
        assert!(avg_queue_length(0.0, 0).expect("queue").is_infinite());
    }

    #[test]
    fn non_finite_load_is_rejected() {
        for load in [f64::NAN, f64::INFINITY, -1.0] {
            let err = erlang_b(load, 3).expect_err("load must be rejected");
            assert!(matches!(err, ChartError::InvalidLoad { .. }));
        }
    }

    #[test]
    fn metrics_bundle_matches_individual_functions() {
        let metrics = TrafficMetrics::evaluate(3.0, 5).expect("metrics");
        assert!(metrics.is_stable());
        assert_eq!(metrics.blocking, erlang_b(3.0, 5).expect("b"));
        assert_eq!(metrics.waiting, erlang_c(3.0, 5).expect("c"));
        assert_eq!(metrics.queue_length, avg_queue_length(3.0, 5).expect("l"));
    }
}
