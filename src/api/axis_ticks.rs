pub(super) const AXIS_X_TARGET_SPACING_PX: f64 = 80.0;
pub(super) const AXIS_Y_TARGET_SPACING_PX: f64 = 48.0;
pub(super) const AXIS_MIN_TICKS: usize = 2;
pub(super) const AXIS_MAX_TICKS: usize = 12;

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Drops ticks closer than `min_spacing_px` to the previously kept one.
///
/// Input is `(value, pixel)` pairs; output is sorted by pixel.
pub(super) fn select_ticks_with_min_spacing(
    mut ticks: Vec<(f64, f64)>,
    min_spacing_px: f64,
) -> Vec<(f64, f64)> {
    ticks.sort_by(|left, right| left.1.total_cmp(&right.1));
    if ticks.len() <= 1 || !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return ticks;
    }

    let mut selected: Vec<(f64, f64)> = Vec::with_capacity(ticks.len());
    for tick in ticks {
        match selected.last().copied() {
            Some(last) if tick.1 - last.1 < min_spacing_px => {}
            _ => selected.push(tick),
        }
    }
    selected
}
