#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("ZDA"))]
pub struct ZDA {
    /// UTC time
    pub time: time::Time,
    /// Day of month, 01 to 31
    pub day: u8,
    /// Month, 01 to 12
    pub month: u8,
    /// Four digit year
    pub year: u16,
    /// Local zone hours, -13 to 13
    pub local_zone_hours: i8,
    /// Local zone minutes, 00 to 59
    pub local_zone_minutes: u8,
}

impl ZDA {
    /// Combines the date and time fields with the local zone into an offset date-time.
    ///
    /// Returns `None` if the fields do not form a valid calendar date or offset.
    /// The zone minutes take the sign of the zone hours.
    pub fn to_offset_date_time(&self) -> Option<time::OffsetDateTime> {
        let month = time::Month::try_from(self.month).ok()?;
        let date = time::Date::from_calendar_date(i32::from(self.year), month, self.day).ok()?;

        let minutes = i8::try_from(self.local_zone_minutes).ok()?;
        let minutes = if self.local_zone_hours < 0 { -minutes } else { minutes };
        let offset = time::UtcOffset::from_hms(self.local_zone_hours, minutes, 0).ok()?;

        Some(date.with_time(self.time).assume_offset(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zda_decoding() {
        let decoded = ZDA::decode("$GPZDA,160012.71,11,03,2004,-1,00*7D");
        assert!(decoded.is_valid(), "Failed: {decoded:?}");

        let zda = decoded.sentence;
        assert_eq!(
            zda.time,
            time::Time::from_hms_milli(16, 0, 12, 710).unwrap()
        );
        assert_eq!((zda.day, zda.month, zda.year), (11, 3, 2004));
        assert_eq!((zda.local_zone_hours, zda.local_zone_minutes), (-1, 0));

        let date_time = zda.to_offset_date_time().unwrap();
        assert_eq!(date_time.offset(), time::UtcOffset::from_hms(-1, 0, 0).unwrap());
        assert_eq!(date_time.date(), time::macros::date!(2004 - 03 - 11));
    }

    #[test]
    fn test_zda_partial() {
        let decoded = ZDA::decode("$GPZDA,201530.00,04,07,2002,,");

        assert_eq!(
            decoded.validity.failed_fields().collect::<Vec<_>>(),
            ["local_zone_hours", "local_zone_minutes"]
        );
        assert_eq!(decoded.sentence.year, 2002);
        assert_eq!(decoded.sentence.local_zone_hours, 0);
    }

    #[test]
    fn test_zda_invalid_date() {
        let zda = ZDA::decode("$GPZDA,201530.00,31,02,2002,00,00").sentence;
        assert_eq!(zda.to_offset_date_time(), None);
    }
}
