pub mod erlang;
pub mod line_series;
pub mod scale;
pub mod sweep;
pub mod types;

pub use erlang::{TrafficMetrics, avg_queue_length, erlang_b, erlang_c, is_stable};
pub use line_series::{LineSegment, PlotProjection, project_line_segments};
pub use scale::{LinearScale, PixelRange, ScaleTuning, nice_step};
pub use sweep::{Metric, integer_loads, server_range, sweep_load, sweep_servers, uniform_loads};
pub use types::{DataPoint, Viewport};
