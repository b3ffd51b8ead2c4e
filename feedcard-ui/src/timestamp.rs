//! Brazilian Portuguese rendering of timestamps: the long form used as a
//! tooltip and the "há cerca de 1 hora" distance shown inline.

use crate::view::Element;
use std::fmt::{Display, Formatter};
use time::{Month, OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::warn;

const SECONDS_IN_MINUTE: u64 = 60;
const MINUTES_IN_HOUR: u64 = 60;
const MINUTES_IN_DAY: u64 = 1_440;
const MINUTES_IN_MONTH: u64 = 43_200;
const MINUTES_IN_TWO_MONTHS: u64 = 86_400;

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "janeiro",
        Month::February => "fevereiro",
        Month::March => "março",
        Month::April => "abril",
        Month::May => "maio",
        Month::June => "junho",
        Month::July => "julho",
        Month::August => "agosto",
        Month::September => "setembro",
        Month::October => "outubro",
        Month::November => "novembro",
        Month::December => "dezembro",
    }
}

/// `13 de novembro de 2024 às 22:45h`
#[must_use]
pub fn format_long(at: OffsetDateTime) -> String {
    format!(
        "{} de {} de {} às {:02}:{:02}h",
        at.day(),
        month_name(at.month()),
        at.year(),
        at.hour(),
        at.minute()
    )
}

/// Rounded distance between two points in time.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Distance {
    LessThanAMinute,
    Minutes(u64),
    AboutHours(u64),
    Days(u64),
    AboutMonths(u64),
    Months(u64),
    AboutYears(u64),
    OverYears(u64),
    AlmostYears(u64),
}

fn rounded_div(value: u64, divisor: u64) -> u64 {
    (value + divisor / 2) / divisor
}

/// Whole calendar months from `earlier` to `later`, read in `earlier`'s
/// offset. A month only counts once its day and time of day are reached.
fn calendar_months(earlier: OffsetDateTime, later: OffsetDateTime) -> u64 {
    let later = later.to_offset(earlier.offset());
    let mut months = (i64::from(later.year()) - i64::from(earlier.year())) * 12
        + i64::from(u8::from(later.month()))
        - i64::from(u8::from(earlier.month()));

    if (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months.max(0).unsigned_abs()
}

impl Distance {
    #[must_use]
    pub fn between(a: OffsetDateTime, b: OffsetDateTime) -> Self {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let seconds = (later - earlier).whole_seconds().unsigned_abs();
        let minutes = rounded_div(seconds, SECONDS_IN_MINUTE);

        if minutes == 0 {
            Distance::LessThanAMinute
        } else if minutes < 45 {
            Distance::Minutes(minutes)
        } else if minutes < 90 {
            Distance::AboutHours(1)
        } else if minutes < MINUTES_IN_DAY {
            Distance::AboutHours(rounded_div(minutes, MINUTES_IN_HOUR))
        } else if minutes < 2_520 {
            Distance::Days(1)
        } else if minutes < MINUTES_IN_MONTH {
            Distance::Days(rounded_div(minutes, MINUTES_IN_DAY))
        } else if minutes < MINUTES_IN_TWO_MONTHS {
            Distance::AboutMonths(rounded_div(minutes, MINUTES_IN_MONTH))
        } else {
            let months = calendar_months(earlier, later);
            if months < 12 {
                Distance::Months(rounded_div(minutes, MINUTES_IN_MONTH))
            } else {
                let years = months / 12;
                match months % 12 {
                    0..3 => Distance::AboutYears(years),
                    3..9 => Distance::OverYears(years),
                    _ => Distance::AlmostYears(years + 1),
                }
            }
        }
    }
}

fn plural(f: &mut Formatter<'_>, count: u64, one: &str, many: &str) -> std::fmt::Result {
    if count == 1 {
        write!(f, "1 {one}")
    } else {
        write!(f, "{count} {many}")
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Distance::LessThanAMinute => f.write_str("menos de um minuto"),
            Distance::Minutes(count) => plural(f, count, "minuto", "minutos"),
            Distance::AboutHours(count) => {
                f.write_str("cerca de ")?;
                plural(f, count, "hora", "horas")
            }
            Distance::Days(count) => plural(f, count, "dia", "dias"),
            Distance::AboutMonths(count) => {
                f.write_str("cerca de ")?;
                plural(f, count, "mês", "meses")
            }
            Distance::Months(count) => plural(f, count, "mês", "meses"),
            Distance::AboutYears(count) => {
                f.write_str("cerca de ")?;
                plural(f, count, "ano", "anos")
            }
            Distance::OverYears(count) => {
                f.write_str("mais de ")?;
                plural(f, count, "ano", "anos")
            }
            Distance::AlmostYears(count) => {
                f.write_str("quase ")?;
                plural(f, count, "ano", "anos")
            }
        }
    }
}

/// Distance of a timestamp from "now", with its direction.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct RelativeTime {
    pub distance: Distance,
    pub in_future: bool,
}

impl RelativeTime {
    #[must_use]
    pub fn new(at: OffsetDateTime, now: OffsetDateTime) -> Self {
        Self {
            distance: Distance::between(at, now),
            in_future: at > now,
        }
    }
}

impl Display for RelativeTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let prefix = if self.in_future { "em" } else { "há" };
        write!(f, "{prefix} {}", self.distance)
    }
}

/// `<time>` element showing `at` relative to `now`.
#[must_use]
pub fn time_element(at: OffsetDateTime, now: OffsetDateTime) -> Element {
    let element = Element::new("time").attr("title", format_long(at));

    let element = match at.format(&Rfc3339) {
        Ok(machine_readable) => element.attr("datetime", machine_readable),
        Err(err) => {
            warn!(error = %err, %at, "Timestamp has no RFC 3339 form");
            element
        }
    };

    element.text(RelativeTime::new(at, now).to_string())
}

#[cfg(test)]
mod tests {
    use crate::timestamp::{Distance, RelativeTime, format_long, time_element};
    use time::{Duration, macros::datetime};

    #[test]
    fn long_format() {
        assert_eq!(
            format_long(datetime!(2024-11-13 22:45 -3)),
            "13 de novembro de 2024 às 22:45h"
        );
        assert_eq!(
            format_long(datetime!(2025-03-01 08:05 UTC)),
            "1 de março de 2025 às 08:05h"
        );
    }

    #[test]
    fn distance_buckets() {
        let base = datetime!(2024-01-01 00:00 UTC);
        let cases = [
            (Duration::seconds(10), Distance::LessThanAMinute),
            (Duration::seconds(50), Distance::Minutes(1)),
            (Duration::minutes(5), Distance::Minutes(5)),
            (Duration::minutes(44), Distance::Minutes(44)),
            (Duration::minutes(45), Distance::AboutHours(1)),
            (Duration::hours(3), Distance::AboutHours(3)),
            (Duration::hours(30), Distance::Days(1)),
            (Duration::days(5), Distance::Days(5)),
            (Duration::days(35), Distance::AboutMonths(1)),
            (Duration::days(100), Distance::Months(3)),
            (Duration::days(360), Distance::Months(12)),
            (Duration::days(400), Distance::AboutYears(1)),
            (Duration::days(365 * 2 + 150), Distance::OverYears(2)),
            (Duration::days(365 + 330), Distance::AlmostYears(2)),
        ];

        for (elapsed, expected) in cases {
            assert_eq!(Distance::between(base, base + elapsed), expected, "{elapsed}");
            assert_eq!(Distance::between(base + elapsed, base), expected, "{elapsed}");
        }
    }

    #[test]
    fn months_follow_the_calendar() {
        let start = datetime!(2024-01-31 12:00 UTC);

        assert_eq!(
            Distance::between(start, datetime!(2024-12-31 11:59 UTC)),
            Distance::Months(11)
        );
        assert_eq!(
            Distance::between(start, datetime!(2025-01-31 12:00 UTC)),
            Distance::AboutYears(1)
        );
        assert_eq!(
            RelativeTime::new(start, start + Duration::days(360)).to_string(),
            "há 12 meses"
        );
    }

    #[test]
    fn relative_text() {
        let now = datetime!(2024-11-13 23:45 UTC);

        assert_eq!(
            RelativeTime::new(now - Duration::hours(1), now).to_string(),
            "há cerca de 1 hora"
        );
        assert_eq!(
            RelativeTime::new(now + Duration::days(2), now).to_string(),
            "em 2 dias"
        );
        assert_eq!(RelativeTime::new(now, now).to_string(), "há menos de um minuto");
        assert_eq!(
            RelativeTime::new(now - Duration::minutes(12), now).to_string(),
            "há 12 minutos"
        );
    }

    #[test]
    fn time_element_attributes() {
        let at = datetime!(2024-11-13 22:44:10 UTC);
        let element = time_element(at, at + Duration::hours(1));

        assert_eq!(element.tag(), "time");
        assert_eq!(element.attribute("datetime"), Some("2024-11-13T22:44:10Z"));
        assert_eq!(
            element.attribute("title"),
            Some("13 de novembro de 2024 às 22:44h")
        );
        assert_eq!(element.text_content(), "há cerca de 1 hora");
    }
}
