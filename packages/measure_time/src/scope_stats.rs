use std::fmt;

/// Running statistics of one scope label.
///
/// A snapshot of these is available from [`Registry::scope_stats()`](crate::Registry::scope_stats).
/// All values are in the precision the scope was timed with.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScopeStats {
    count: u64,
    average: f64,
    total: u128,
}

impl ScopeStats {
    /// Adds one elapsed sample.
    ///
    /// The average is updated incrementally as `(count * average + sample) / (count + 1)` so
    /// that it matches the values printed in earlier reports exactly.
    #[expect(
        clippy::cast_precision_loss,
        reason = "the average is an approximation and samples of realistic size convert exactly"
    )]
    pub(crate) fn record(&mut self, sample: u128) {
        let count = self.count as f64;
        self.average = (count * self.average + sample as f64) / (count + 1.0);
        self.count = self.count.saturating_add(1);
        self.total = self.total.saturating_add(sample);
    }

    /// Number of times the scope has finished.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running average of all samples.
    #[must_use]
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Sum of all samples.
    #[must_use]
    pub fn total(&self) -> u128 {
        self.total
    }
}

/// Number of significant digits printed for an average.
const SIGNIFICANT_DIGITS: i32 = 6;

/// Displays an average with six significant digits in the shortest of fixed or exponent
/// notation, without trailing zeros: `2500`, `1.33333`, `0.0001`, `1.23457e+06`.
///
/// Exponent notation is used when the decimal exponent is below -4 or at least six.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Average(pub(crate) f64);

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("nan");
        }

        if value.is_infinite() {
            return f.write_str(if value.is_sign_negative() { "-inf" } else { "inf" });
        }

        // The exponent is taken after rounding to the printed digits, so 999999.7 becomes 1e+06.
        let scientific = format!("{value:.5e}");
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return write!(f, "{value}");
        };
        let Ok(exponent) = exponent.parse::<i32>() else {
            return write!(f, "{value}");
        };

        if (-4..SIGNIFICANT_DIGITS).contains(&exponent) {
            let decimals = usize::try_from(SIGNIFICANT_DIGITS - 1 - exponent).unwrap_or_default();
            let fixed = format!("{value:.decimals$}");
            f.write_str(trim_fraction(&fixed))
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        }
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
