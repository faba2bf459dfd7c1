use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::core::{
    LinearScale, PixelRange, PlotProjection, ScaleTuning, Viewport, project_line_segments,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::axis_label_format::format_axis_value;
use super::axis_ticks::{
    AXIS_MAX_TICKS, AXIS_MIN_TICKS, AXIS_X_TARGET_SPACING_PX, AXIS_Y_TARGET_SPACING_PX,
    axis_tick_target_count, select_ticks_with_min_spacing,
};
use super::{Figure, Panel, RenderStyle};

const LEGEND_SAMPLE_WIDTH_PX: f64 = 24.0;
const LEGEND_PADDING_PX: f64 = 6.0;
// rough average glyph advance relative to font size, used for legend sizing
const GLYPH_WIDTH_RATIO: f64 = 0.6;
const FIGURE_TITLE_TOP_PX: f64 = 4.0;
const FIGURE_TITLE_ROW_RATIO: f64 = 1.6;

/// Pixel rectangle of one panel's plotting area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    fn x_range(self) -> PixelRange {
        PixelRange::new(self.left, self.right)
    }

    fn y_range(self) -> PixelRange {
        PixelRange::new(self.bottom, self.top)
    }
}

/// Splits the viewport into side-by-side plot areas, one per panel.
pub fn layout_plot_areas(
    viewport: Viewport,
    panel_count: usize,
    style: &RenderStyle,
) -> ChartResult<Vec<PlotArea>> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if panel_count == 0 {
        return Ok(Vec::new());
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let gaps = style.panel_gap_px * (panel_count - 1) as f64;
    let region_width = (width - gaps) / panel_count as f64;

    let mut areas = Vec::with_capacity(panel_count);
    for index in 0..panel_count {
        let region_left = index as f64 * (region_width + style.panel_gap_px);
        let area = PlotArea {
            left: region_left + style.margin_left_px,
            top: style.margin_top_px,
            right: region_left + region_width - style.margin_right_px,
            bottom: height - style.margin_bottom_px,
        };
        if area.width() <= 0.0 || area.height() <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "viewport {}x{} is too small for {panel_count} panel(s)",
                viewport.width, viewport.height
            )));
        }
        areas.push(area);
    }
    Ok(areas)
}

/// Materializes a figure into a backend-agnostic render frame.
pub fn build_figure_frame(figure: &Figure, style: &RenderStyle) -> ChartResult<RenderFrame> {
    figure.validate()?;
    let mut style = style.validate()?;

    let viewport = figure.viewport;
    let mut frame = RenderFrame::new(viewport).with_rect(RectPrimitive::new(
        0.0,
        0.0,
        f64::from(viewport.width),
        f64::from(viewport.height),
        style.background_color,
    ));

    if let Some(title) = figure.title.as_deref().filter(|title| !title.is_empty()) {
        frame.texts.push(TextPrimitive::new(
            title,
            f64::from(viewport.width) / 2.0,
            FIGURE_TITLE_TOP_PX,
            style.title_font_size_px,
            style.title_color,
            TextHAlign::Center,
        ));
        // panel titles move down below the figure title
        style.margin_top_px += style.title_font_size_px * FIGURE_TITLE_ROW_RATIO;
    }

    let areas = layout_plot_areas(viewport, figure.panels.len(), &style)?;
    for (panel, area) in figure.panels.iter().zip(areas) {
        frame.extend(build_panel_frame(panel, area, viewport, &style)?);
    }

    debug!(
        stem = figure.stem.as_str(),
        lines = frame.lines.len(),
        rects = frame.rects.len(),
        texts = frame.texts.len(),
        "figure frame built"
    );
    Ok(frame)
}

fn build_panel_frame(
    panel: &Panel,
    area: PlotArea,
    viewport: Viewport,
    style: &RenderStyle,
) -> ChartResult<RenderFrame> {
    let x_scale = LinearScale::from_values(
        panel
            .series
            .iter()
            .flat_map(|series| series.finite_points().map(|point| point.x)),
        ScaleTuning::default(),
    )?;
    let y_scale = LinearScale::from_values(
        panel
            .series
            .iter()
            .flat_map(|series| series.finite_points().map(|point| point.y)),
        ScaleTuning {
            include_zero: panel.y_from_zero,
            ..ScaleTuning::default()
        },
    )?;
    let projection = PlotProjection {
        x_scale,
        y_scale,
        x_range: area.x_range(),
        y_range: area.y_range(),
    };

    let mut frame = RenderFrame::new(viewport).with_rect(
        RectPrimitive::new(
            area.left,
            area.top,
            area.width(),
            area.height(),
            style.plot_background_color,
        )
        .with_border(style.axis_line_width, style.axis_border_color),
    );

    append_x_axis(&mut frame, projection, area, style)?;
    append_y_axis(&mut frame, projection, area, style)?;
    append_axis_titles(&mut frame, panel, area, style);

    for series in &panel.series {
        for segment in project_line_segments(&series.points, projection)? {
            frame.lines.push(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                style.series_line_width,
                series.color,
            ));
        }
    }

    append_legend(&mut frame, panel, area, style);
    Ok(frame)
}

fn append_x_axis(
    frame: &mut RenderFrame,
    projection: PlotProjection,
    area: PlotArea,
    style: &RenderStyle,
) -> ChartResult<()> {
    let count = axis_tick_target_count(
        area.width(),
        AXIS_X_TARGET_SPACING_PX,
        AXIS_MIN_TICKS,
        AXIS_MAX_TICKS,
    );
    let (values, step) = projection.x_scale.ticks(count);
    let mut ticks = Vec::with_capacity(values.len());
    for value in values {
        ticks.push((value, projection.x_scale.domain_to_pixel(value, projection.x_range)?));
    }

    for (value, x) in select_ticks_with_min_spacing(ticks, AXIS_X_TARGET_SPACING_PX / 2.0) {
        frame.lines.push(LinePrimitive::new(
            x,
            area.top,
            x,
            area.bottom,
            style.grid_line_width,
            style.grid_line_color,
        ));
        frame.lines.push(LinePrimitive::new(
            x,
            area.bottom,
            x,
            area.bottom + style.tick_mark_length_px,
            style.axis_line_width,
            style.axis_border_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_axis_value(value, step),
            x,
            area.bottom + style.tick_mark_length_px + 2.0,
            style.tick_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Center,
        ));
    }
    Ok(())
}

fn append_y_axis(
    frame: &mut RenderFrame,
    projection: PlotProjection,
    area: PlotArea,
    style: &RenderStyle,
) -> ChartResult<()> {
    let count = axis_tick_target_count(
        area.height(),
        AXIS_Y_TARGET_SPACING_PX,
        AXIS_MIN_TICKS,
        AXIS_MAX_TICKS,
    );
    let (values, step) = projection.y_scale.ticks(count);
    let mut ticks = Vec::with_capacity(values.len());
    for value in values {
        ticks.push((value, projection.y_scale.domain_to_pixel(value, projection.y_range)?));
    }

    for (value, y) in select_ticks_with_min_spacing(ticks, AXIS_Y_TARGET_SPACING_PX / 2.0) {
        frame.lines.push(LinePrimitive::new(
            area.left,
            y,
            area.right,
            y,
            style.grid_line_width,
            style.grid_line_color,
        ));
        frame.lines.push(LinePrimitive::new(
            area.left - style.tick_mark_length_px,
            y,
            area.left,
            y,
            style.axis_line_width,
            style.axis_border_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_axis_value(value, step),
            area.left - style.tick_mark_length_px - 3.0,
            y - style.tick_label_font_size_px * 0.7,
            style.tick_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Right,
        ));
    }
    Ok(())
}

fn append_axis_titles(frame: &mut RenderFrame, panel: &Panel, area: PlotArea, style: &RenderStyle) {
    let center_x = (area.left + area.right) / 2.0;
    let center_y = (area.top + area.bottom) / 2.0;

    if !panel.title.is_empty() {
        frame.texts.push(TextPrimitive::new(
            panel.title.as_str(),
            center_x,
            area.top - style.title_font_size_px * 2.0,
            style.title_font_size_px,
            style.title_color,
            TextHAlign::Center,
        ));
    }
    if !panel.x_label.is_empty() {
        frame.texts.push(TextPrimitive::new(
            panel.x_label.as_str(),
            center_x,
            area.bottom + style.tick_mark_length_px + style.tick_label_font_size_px * 2.2,
            style.axis_title_font_size_px,
            style.axis_label_color,
            TextHAlign::Center,
        ));
    }
    if !panel.y_label.is_empty() {
        let x = (area.left - style.margin_left_px + 4.0).max(0.0);
        frame.texts.push(
            TextPrimitive::new(
                panel.y_label.as_str(),
                x,
                center_y,
                style.axis_title_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            )
            .with_rotation(-FRAC_PI_2),
        );
    }
}

fn append_legend(frame: &mut RenderFrame, panel: &Panel, area: PlotArea, style: &RenderStyle) {
    let labelled: Vec<_> = panel
        .series
        .iter()
        .filter(|series| !series.label.is_empty())
        .collect();
    if labelled.is_empty() {
        return;
    }

    let row_height = style.legend_font_size_px + LEGEND_PADDING_PX;
    let longest = labelled
        .iter()
        .map(|series| series.label.chars().count())
        .max()
        .unwrap_or(0);
    let box_width = LEGEND_SAMPLE_WIDTH_PX
        + 3.0 * LEGEND_PADDING_PX
        + longest as f64 * style.legend_font_size_px * GLYPH_WIDTH_RATIO;
    let box_height = labelled.len() as f64 * row_height + LEGEND_PADDING_PX;
    let box_left = (area.right - box_width - LEGEND_PADDING_PX).max(area.left);
    let box_top = area.top + LEGEND_PADDING_PX;

    frame.rects.push(
        RectPrimitive::new(
            box_left,
            box_top,
            box_width,
            box_height,
            style.legend_box_color,
        )
        .with_border(1.0, style.legend_border_color),
    );

    for (row, series) in labelled.into_iter().enumerate() {
        let row_top = box_top + LEGEND_PADDING_PX / 2.0 + row as f64 * row_height;
        let sample_y = row_top + row_height / 2.0;
        let sample_left = box_left + LEGEND_PADDING_PX;
        frame.lines.push(LinePrimitive::new(
            sample_left,
            sample_y,
            sample_left + LEGEND_SAMPLE_WIDTH_PX,
            sample_y,
            style.series_line_width,
            series.color,
        ));
        frame.texts.push(TextPrimitive::new(
            series.label.as_str(),
            sample_left + LEGEND_SAMPLE_WIDTH_PX + LEGEND_PADDING_PX,
            row_top + LEGEND_PADDING_PX / 4.0,
            style.legend_font_size_px,
            style.axis_label_color,
            TextHAlign::Left,
        ));
    }
}
