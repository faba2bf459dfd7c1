use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style contract for figure frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub background_color: Color,
    pub plot_background_color: Color,
    pub grid_line_color: Color,
    pub axis_border_color: Color,
    pub axis_label_color: Color,
    pub title_color: Color,
    pub legend_box_color: Color,
    pub legend_border_color: Color,
    pub series_line_width: f64,
    pub grid_line_width: f64,
    pub axis_line_width: f64,
    pub tick_mark_length_px: f64,
    pub tick_label_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    pub title_font_size_px: f64,
    pub legend_font_size_px: f64,
    pub margin_left_px: f64,
    pub margin_right_px: f64,
    pub margin_top_px: f64,
    pub margin_bottom_px: f64,
    pub panel_gap_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            plot_background_color: Color::WHITE,
            grid_line_color: Color::rgba(0.0, 0.0, 0.0, 0.15),
            axis_border_color: Color::rgb(0.2, 0.2, 0.2),
            axis_label_color: Color::rgb(0.1, 0.1, 0.1),
            title_color: Color::BLACK,
            legend_box_color: Color::rgba(1.0, 1.0, 1.0, 0.85),
            legend_border_color: Color::rgb(0.8, 0.8, 0.8),
            series_line_width: 2.0,
            grid_line_width: 1.0,
            axis_line_width: 1.0,
            tick_mark_length_px: 5.0,
            tick_label_font_size_px: 10.0,
            axis_title_font_size_px: 11.0,
            title_font_size_px: 12.0,
            legend_font_size_px: 10.0,
            margin_left_px: 72.0,
            margin_right_px: 24.0,
            margin_top_px: 44.0,
            margin_bottom_px: 56.0,
            panel_gap_px: 48.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.background_color,
            self.plot_background_color,
            self.grid_line_color,
            self.axis_border_color,
            self.axis_label_color,
            self.title_color,
            self.legend_box_color,
            self.legend_border_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("series_line_width", self.series_line_width),
            ("grid_line_width", self.grid_line_width),
            ("axis_line_width", self.axis_line_width),
            ("tick_label_font_size_px", self.tick_label_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
            ("title_font_size_px", self.title_font_size_px),
            ("legend_font_size_px", self.legend_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("tick_mark_length_px", self.tick_mark_length_px),
            ("margin_left_px", self.margin_left_px),
            ("margin_right_px", self.margin_right_px),
            ("margin_top_px", self.margin_top_px),
            ("margin_bottom_px", self.margin_bottom_px),
            ("panel_gap_px", self.panel_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and >= 0"
                )));
            }
        }

        Ok(self)
    }
}
