use erlang_charts::api::{
    BLOCKING_VS_LOAD_STEM, BLOCKING_VS_SERVERS_STEM, ReportConfig, ReportRanges,
    WAITING_VS_LOAD_STEM, WAITING_VS_SERVERS_STEM, blocking_vs_load_figure,
    blocking_vs_servers_figure, build_report, waiting_vs_load_figure, waiting_vs_servers_figure,
};
use erlang_charts::core::{Viewport, erlang_b, erlang_c};

fn config(base: u32) -> ReportConfig {
    ReportConfig::new(base).expect("config")
}

#[test]
fn ranges_follow_base_parameter() {
    let ranges = ReportRanges::from_base(5);
    assert_eq!(ranges.servers_for_load_sweep, 10);
    assert_eq!(ranges.load_for_server_sweep, 5);
    assert_eq!(ranges.blocking_servers_end, 21);
    assert_eq!(ranges.waiting_servers, (6, 10));
    assert_eq!(ranges.waiting_load_intervals, 10);

    let ranges = ReportRanges::from_base(150);
    assert_eq!(ranges.blocking_servers_end, 300);
    assert_eq!(ranges.waiting_load_intervals, 200);
}

#[test]
fn report_contains_four_figures_in_order() {
    let figures = build_report(&config(5)).expect("report");
    let stems: Vec<&str> = figures.iter().map(|figure| figure.stem.as_str()).collect();
    assert_eq!(
        stems,
        vec![
            BLOCKING_VS_LOAD_STEM,
            BLOCKING_VS_SERVERS_STEM,
            WAITING_VS_LOAD_STEM,
            WAITING_VS_SERVERS_STEM,
        ]
    );
}

#[test]
fn blocking_vs_load_sweeps_integer_loads_below_base() {
    let figure = blocking_vs_load_figure(&config(5)).expect("figure");
    assert_eq!(figure.panels.len(), 1);
    let series = &figure.panels[0].series[0];
    assert_eq!(series.label, "m = 10");

    let xs: Vec<f64> = series.points.iter().map(|point| point.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0]);
    for point in &series.points {
        assert_eq!(point.y, erlang_b(point.x, 10).expect("erlang b"));
    }
}

#[test]
fn blocking_vs_load_is_empty_for_unit_base() {
    let figure = blocking_vs_load_figure(&config(1)).expect("figure");
    assert!(figure.panels[0].series[0].points.is_empty());
}

#[test]
fn blocking_vs_servers_spans_at_least_twenty_one_servers() {
    let figure = blocking_vs_servers_figure(&config(5)).expect("figure");
    let series = &figure.panels[0].series[0];
    assert_eq!(series.label, "A = 5");
    assert_eq!(series.points.len(), 21);
    assert_eq!(series.points.first().map(|point| point.x), Some(1.0));
    assert_eq!(series.points.last().map(|point| point.x), Some(21.0));

    let figure = blocking_vs_servers_figure(&config(15)).expect("figure");
    assert_eq!(figure.panels[0].series[0].points.len(), 30);
}

#[test]
fn waiting_vs_load_has_two_panels_on_positive_grid() {
    let cfg = config(5).with_viewport(Viewport::new(800, 400));
    let figure = waiting_vs_load_figure(&cfg).expect("figure");
    assert_eq!(figure.viewport, Viewport::new(1200, 400));
    assert_eq!(figure.title.as_deref(), Some("Erlang C: m = 10, A = 0..5"));
    assert_eq!(figure.panels.len(), 2);

    let waiting = &figure.panels[0].series[0].points;
    let queue = &figure.panels[1].series[0].points;
    assert_eq!(waiting.len(), 10);
    assert_eq!(queue.len(), 10);
    assert!(waiting.iter().all(|point| point.x > 0.0 && point.x <= 5.0));
    assert!(queue.iter().all(|point| point.y.is_finite() && point.y >= 0.0));
    assert_eq!(waiting[9].y, erlang_c(waiting[9].x, 10).expect("erlang c"));
}

#[test]
fn waiting_vs_servers_covers_stable_server_counts() {
    let figure = waiting_vs_servers_figure(&config(5)).expect("figure");
    let waiting = &figure.panels[0].series[0].points;
    let xs: Vec<f64> = waiting.iter().map(|point| point.x).collect();
    assert_eq!(xs, vec![6.0, 7.0, 8.0, 9.0, 10.0]);
    assert_eq!(figure.title.as_deref(), Some("Erlang C: A = 5, m = 6..10"));
    assert_eq!(figure.viewport, Viewport::new(1500, 500));
    assert!(waiting.windows(2).all(|pair| pair[1].y <= pair[0].y));

    let queue = &figure.panels[1].series[0].points;
    assert!(queue.iter().all(|point| point.y.is_finite()));
}

#[test]
fn report_rejects_invalid_viewport() {
    let cfg = config(5).with_viewport(Viewport::new(10, 0));
    assert!(build_report(&cfg).is_err());
}

#[test]
fn single_panel_figures_carry_no_shared_title() {
    let figures = build_report(&config(5)).expect("report");
    assert!(figures[0].title.is_none());
    assert!(figures[1].title.is_none());
    assert!(figures[2].title.is_some());
    assert!(figures[3].title.is_some());
}
