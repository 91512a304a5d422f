/// Renders a number the way the language displays it.
///
/// Integral finite values have no fractional part, negative zero renders as
/// `0`, and the non-finite values render as `Infinity`, `-Infinity` and `NaN`.
///
/// ## Parameters
/// - `value`: The number to render.
///
/// ## Returns
/// The textual form used by `print` and by string concatenation.
///
/// ## Example
/// ```
/// use treelox::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(5.5), "5.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    value.to_string()
}
