use tracing::{debug, info};

use crate::core::{
    DataPoint, Metric, Viewport, integer_loads, server_range, sweep_load, sweep_servers, uniform_loads,
};
use crate::error::ChartResult;
use crate::render::Color;

use super::{Figure, Panel, ReportConfig, Series};

pub const BLOCKING_VS_LOAD_STEM: &str = "erlang_b_vs_intensity";
pub const BLOCKING_VS_SERVERS_STEM: &str = "erlang_b_vs_servers";
pub const WAITING_VS_LOAD_STEM: &str = "erlang_c_vs_intensity";
pub const WAITING_VS_SERVERS_STEM: &str = "erlang_c_vs_servers";

/// Smallest upper bound of the server sweep in the blocking-vs-servers figure.
const MIN_SERVER_SWEEP_END: u32 = 21;
/// Upper bound on the number of intervals of the waiting-vs-load grid.
const MAX_LOAD_GRID_INTERVALS: u32 = 200;

const LOAD_AXIS_LABEL: &str = "Offered load A, Erl";
const SERVERS_AXIS_LABEL: &str = "Servers m";

/// Sweep ranges derived from the base parameter `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRanges {
    /// Server count of the load sweeps (`2n`).
    pub servers_for_load_sweep: u32,
    /// Offered load of the server sweeps (`n`).
    pub load_for_server_sweep: u32,
    /// Inclusive upper server bound of the blocking sweep (`max(2n, 21)`).
    pub blocking_servers_end: u32,
    /// Inclusive server bounds of the waiting sweep (`n + 1 ..= 2n`).
    pub waiting_servers: (u32, u32),
    /// Intervals of the uniform waiting load grid (`min(200, 2n)`).
    pub waiting_load_intervals: u32,
}

impl ReportRanges {
    #[must_use]
    pub fn from_base(base: u32) -> Self {
        let double = base.saturating_mul(2);
        Self {
            servers_for_load_sweep: double,
            load_for_server_sweep: base,
            blocking_servers_end: double.max(MIN_SERVER_SWEEP_END),
            waiting_servers: (base.saturating_add(1), double),
            waiting_load_intervals: double.min(MAX_LOAD_GRID_INTERVALS),
        }
    }
}

/// Builds the four report figures in their canonical order.
pub fn build_report(config: &ReportConfig) -> ChartResult<Vec<Figure>> {
    config.validate()?;
    let ranges = ReportRanges::from_base(config.base);
    info!(
        base = config.base,
        servers_for_load_sweep = ranges.servers_for_load_sweep,
        blocking_servers_end = ranges.blocking_servers_end,
        waiting_servers_start = ranges.waiting_servers.0,
        waiting_servers_end = ranges.waiting_servers.1,
        "building erlang report"
    );

    Ok(vec![
        blocking_vs_load_figure(config)?,
        blocking_vs_servers_figure(config)?,
        waiting_vs_load_figure(config)?,
        waiting_vs_servers_figure(config)?,
    ])
}

/// Erlang B over integer loads `1..n` at `2n` servers.
pub fn blocking_vs_load_figure(config: &ReportConfig) -> ChartResult<Figure> {
    let ranges = ReportRanges::from_base(config.base);
    let servers = ranges.servers_for_load_sweep;
    let loads = integer_loads(1, config.base);
    let points = sweep_load(Metric::Blocking, &loads, servers)?;
    debug!(count = points.len(), servers, "blocking vs load series");

    let panel = Panel::new(
        "Blocking probability vs offered load",
        LOAD_AXIS_LABEL,
        Metric::Blocking.label(),
    )
    .with_y_from_zero(true)
    .with_series(Series::new(format!("m = {servers}"), Color::BLUE, points));

    Ok(Figure::new(BLOCKING_VS_LOAD_STEM, config.viewport).with_panel(panel))
}

/// Erlang B over servers `1..=max(2n, 21)` at load `n`.
pub fn blocking_vs_servers_figure(config: &ReportConfig) -> ChartResult<Figure> {
    let ranges = ReportRanges::from_base(config.base);
    let load = ranges.load_for_server_sweep;
    let servers = server_range(1, ranges.blocking_servers_end);
    let points = sweep_servers(Metric::Blocking, f64::from(load), &servers)?;
    debug!(count = points.len(), load, "blocking vs servers series");

    let panel = Panel::new(
        format!("Blocking probability vs servers (n = {})", config.base),
        SERVERS_AXIS_LABEL,
        Metric::Blocking.label(),
    )
    .with_y_from_zero(true)
    .with_series(Series::new(format!("A = {load}"), Color::BLUE, points));

    Ok(Figure::new(BLOCKING_VS_SERVERS_STEM, config.viewport).with_panel(panel))
}

/// Erlang C and mean queue length over a uniform load grid in `(0, n]` at
/// `2n` servers.
pub fn waiting_vs_load_figure(config: &ReportConfig) -> ChartResult<Figure> {
    let ranges = ReportRanges::from_base(config.base);
    let servers = ranges.servers_for_load_sweep;
    let loads: Vec<f64> = uniform_loads(
        0.0,
        f64::from(config.base),
        ranges.waiting_load_intervals,
    )?
    .into_iter()
    .filter(|load| *load > 0.0)
    .collect();

    let waiting = sweep_load(Metric::Waiting, &loads, servers)?;
    let queue = sweep_load(Metric::QueueLength, &loads, servers)?;
    debug!(count = loads.len(), servers, "waiting vs load series");

    Ok(
        Figure::new(WAITING_VS_LOAD_STEM, wide_viewport(config.viewport))
            .with_title(format!("Erlang C: m = {servers}, A = 0..{}", config.base))
            .with_panel(metric_panel(
                Metric::Waiting,
                "Waiting probability vs offered load",
                LOAD_AXIS_LABEL,
                Color::BLUE,
                waiting,
            ))
            .with_panel(metric_panel(
                Metric::QueueLength,
                "Mean queue length vs offered load",
                LOAD_AXIS_LABEL,
                Color::RED,
                queue,
            )),
    )
}

/// Erlang C and mean queue length over servers `n+1..=2n` at load `n`.
pub fn waiting_vs_servers_figure(config: &ReportConfig) -> ChartResult<Figure> {
    let ranges = ReportRanges::from_base(config.base);
    let load = f64::from(ranges.load_for_server_sweep);
    let (start, end) = ranges.waiting_servers;
    let servers = server_range(start, end);
    info!(start, end, "waiting sweep server range");

    let waiting = sweep_servers(Metric::Waiting, load, &servers)?;
    let queue = sweep_servers(Metric::QueueLength, load, &servers)?;

    Ok(
        Figure::new(WAITING_VS_SERVERS_STEM, wide_viewport(config.viewport))
            .with_title(format!("Erlang C: A = {}, m = {start}..{end}", config.base))
            .with_panel(metric_panel(
                Metric::Waiting,
                "Waiting probability vs servers",
                SERVERS_AXIS_LABEL,
                Color::BLUE,
                waiting,
            ))
            .with_panel(metric_panel(
                Metric::QueueLength,
                "Mean queue length vs servers",
                SERVERS_AXIS_LABEL,
                Color::RED,
                queue,
            )),
    )
}

fn metric_panel(
    metric: Metric,
    title: &str,
    x_label: &str,
    color: Color,
    points: Vec<DataPoint>,
) -> Panel {
    Panel::new(title, x_label, metric.label())
        .with_y_from_zero(true)
        .with_series(Series::new(metric.label(), color, points))
}

/// Two-panel figures are 1.5 times as wide as single-panel ones.
fn wide_viewport(viewport: Viewport) -> Viewport {
    Viewport::new(viewport.width.saturating_mul(3) / 2, viewport.height)
}
