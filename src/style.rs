// Inline CSS values written by the parallax handler. Formatting mirrors what
// the browser would get from plain number-to-string conversion.

#[inline]
pub fn translate_y(px: f64) -> String {
    format!("translateY({}px)", px)
}

#[inline]
pub fn opacity(value: f64) -> String {
    format!("{}", value)
}
