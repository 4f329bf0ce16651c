use std::fmt;

/// Canonical text of a number literal: plain decimal with at least one
/// fractional digit inside `[1e-3, 1e7)` (and for zero), `d.dddE<n>` outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decimal(pub f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-Infinity" } else { "Infinity" });
        }

        let magnitude = value.abs();
        if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
            return write!(f, "{value:?}");
        }

        // `{:e}` gives the shortest round-trip digits, e.g. `1.5e-5` or `1e7`.
        let scientific = format!("{value:e}");
        let (mantissa, exponent) =
            scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
        if mantissa.contains('.') {
            write!(f, "{mantissa}E{exponent}")
        } else {
            write!(f, "{mantissa}.0E{exponent}")
        }
    }
}
