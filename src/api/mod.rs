mod axis_label_format;
mod axis_ticks;
mod figure;
mod figure_frame_builder;
mod render_style;
mod report;
mod report_config;
mod report_output;

pub use figure::{Figure, Panel, Series};
pub use figure_frame_builder::{PlotArea, build_figure_frame, layout_plot_areas};
pub use render_style::RenderStyle;
pub use report::{
    BLOCKING_VS_LOAD_STEM, BLOCKING_VS_SERVERS_STEM, ReportRanges, WAITING_VS_LOAD_STEM,
    WAITING_VS_SERVERS_STEM, blocking_vs_load_figure, blocking_vs_servers_figure, build_report,
    waiting_vs_load_figure, waiting_vs_servers_figure,
};
pub use report_config::{BASE_ENV_VAR, DEFAULT_BASE, MAX_BASE, ReportConfig, parse_base};
pub use report_output::{figure_artifact_path, render_figure, write_figure_json};

#[cfg(feature = "cairo-backend")]
pub use report_output::write_figure_png;
