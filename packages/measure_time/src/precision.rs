//! Duration precisions and their unit labels.

use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// The granularity that measured durations are truncated to before they are reported.
///
/// Each precision is a marker type that is only ever used as a type parameter, e.g.
/// `ScopeTime<_, _, Milliseconds>`. The package provides [`Nanoseconds`], [`Microseconds`]
/// (the default everywhere), [`Milliseconds`], [`Seconds`], [`Minutes`] and [`Hours`].
pub trait Precision: Debug + Send + Sync + 'static {
    /// Short unit suffix printed in square brackets after each value, e.g. `us`.
    const UNIT: &'static str;

    /// Converts a duration to a whole number of units, truncating any remainder.
    fn count(duration: Duration) -> u128;
}

macro_rules! precision {
    ($(#[$meta:meta])* $name:ident, $unit:literal, |$duration:ident| $count:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[non_exhaustive]
        pub struct $name;

        impl Precision for $name {
            const UNIT: &'static str = $unit;

            fn count($duration: Duration) -> u128 {
                $count
            }
        }
    };
}

precision!(
    /// Nanosecond precision, labeled `ns`.
    Nanoseconds, "ns", |duration| duration.as_nanos()
);
precision!(
    /// Microsecond precision, labeled `us`.
    Microseconds, "us", |duration| duration.as_micros()
);
precision!(
    /// Millisecond precision, labeled `ms`.
    Milliseconds, "ms", |duration| duration.as_millis()
);
precision!(
    /// Second precision, labeled `s`.
    Seconds, "s", |duration| u128::from(duration.as_secs())
);
precision!(
    /// Minute precision, labeled `m`.
    Minutes, "m", |duration| u128::from(whole_units(duration, SECONDS_PER_MINUTE))
);
precision!(
    /// Hour precision, labeled `h`.
    Hours, "h", |duration| u128::from(whole_units(duration, SECONDS_PER_HOUR))
);

fn whole_units(duration: Duration, seconds_per_unit: u64) -> u64 {
    duration
        .as_secs()
        .checked_div(seconds_per_unit)
        .unwrap_or_default()
}

/// Returns the unit suffix of precision `P`.
///
/// # Examples
///
/// ```
/// use measure_time::{Microseconds, Seconds, unit_label};
///
/// assert_eq!(unit_label::<Microseconds>(), "us");
/// assert_eq!(unit_label::<Seconds>(), "s");
/// ```
#[must_use]
pub fn unit_label<P: Precision>() -> &'static str {
    P::UNIT
}

/// A whole number of time units in precision `P`.
///
/// This is what timing operations return: the measured elapsed time (or, for
/// [`Intervals::begin()`](crate::Intervals::begin), the current timestamp) already truncated
/// to the precision the caller asked for. It displays as `<count> [<unit>]`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use measure_time::{Milliseconds, Ticks};
///
/// let ticks = Ticks::<Milliseconds>::from_duration(Duration::from_micros(2500));
///
/// assert_eq!(ticks.count(), 2);
/// assert_eq!(ticks.unit(), "ms");
/// assert_eq!(ticks.to_string(), "2 [ms]");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ticks<P> {
    count: u128,
    _precision: PhantomData<fn() -> P>,
}

impl<P: Precision> Ticks<P> {
    /// The zero value, returned by interval operations that find nothing to measure.
    pub const ZERO: Self = Self {
        count: 0,
        _precision: PhantomData,
    };

    /// Truncates a duration to precision `P`.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self {
            count: P::count(duration),
            _precision: PhantomData,
        }
    }

    /// The number of whole units.
    #[must_use]
    pub fn count(&self) -> u128 {
        self.count
    }

    /// The unit suffix of this value's precision, regardless of the value itself.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        P::UNIT
    }

    /// Whether the count is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.count == 0
    }
}

impl<P: Precision> fmt::Display for Ticks<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.count, P::UNIT)
    }
}
