/// Formats an axis tick value with as many decimals as the tick step needs.
pub(super) fn format_axis_value(value: f64, tick_step_abs: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() { "nan" } else { "inf" }.to_owned();
    }

    let precision = precision_from_step(tick_step_abs);
    trim_axis_decimal(format!("{value:.precision$}"))
}

fn precision_from_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 2;
    }
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len().clamp(0, 12)
}

fn trim_axis_decimal(mut text: String) -> String {
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }

    if text == "-0" { "0".to_owned() } else { text }
}
