use std::fmt::Display;

const MINUTE_SINGULAR: &str = "minuta";
const MINUTE_FEW: &str = "minuty";
const MINUTE_MANY: &str = "minut";

/// Picks the Polish word form for `count`.
///
/// `1` takes the singular, counts ending in 2-4 (except 12-14) take the
/// nominative plural and everything else, zero included, takes the genitive
/// plural. The sign of `count` is ignored.
pub fn polish_plural<'a>(
    singular: &'a str,
    plural_few: &'a str,
    plural_many: &'a str,
    count: i64,
) -> &'a str {
    let count = count.unsigned_abs();

    if count == 1 {
        return singular;
    }

    let last_digit = count % 10;
    let last_two = count % 100;

    if (2..=4).contains(&last_digit) && !(12..=14).contains(&last_two) {
        plural_few
    } else {
        plural_many
    }
}

/// Rounds to the nearest integer with halves going towards positive infinity.
///
/// Non-finite input saturates like an `as` cast, so `NaN` becomes `0`.
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(minutes: f64) -> i64 {
    let floor = minutes.floor();
    let rounded = if minutes - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };

    rounded as i64
}

/// Reading time rounded to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTime {
    minutes: i64,
}

impl ReadingTime {
    pub fn from_minutes(minutes: f64) -> Self {
        Self {
            minutes: round_half_up(minutes),
        }
    }

    pub fn minutes(self) -> i64 {
        self.minutes
    }

    pub fn unit(self) -> &'static str {
        polish_plural(MINUTE_SINGULAR, MINUTE_FEW, MINUTE_MANY, self.minutes)
    }
}

impl Display for ReadingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.minutes, self.unit())
    }
}
