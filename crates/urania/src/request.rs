//! Chart requests: validation, local-to-UTC resolution and Julian days.
//!
//! This is the boundary in front of the chart core. Nothing here is needed
//! when raw positions are already at hand.

use crate::chart::ChartMeta;
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Timelike, Utc,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("Date must be in YYYY-MM-DD format, got {0:?}")]
    InvalidDate(String),
    #[error("Time must be in HH:MM:SS format, got {0:?}")]
    InvalidTime(String),
    #[error("Latitude must be within [-90, 90], got {0}")]
    LatitudeOutOfRange(f64),
    #[error("Longitude must be within [-180, 180], got {0}")]
    LongitudeOutOfRange(f64),
    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),
    #[error("Local time {0} does not exist in timezone {1}")]
    InvalidLocalTime(NaiveDateTime, String),
}

fn default_time() -> String {
    "00:00:00".to_string()
}

/// A chart request as received from a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM:SS, local time at the location
    #[serde(default = "default_time")]
    pub time: String,
    /// Decimal degrees, north positive
    pub latitude: f64,
    /// Decimal degrees, east positive
    pub longitude: f64,
}

/// A request whose fields parsed and are in range
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub request: ChartRequest,
    pub local: NaiveDateTime,
}

impl ChartRequest {
    pub fn validate(&self) -> Result<ValidatedRequest, RequestError> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|_| RequestError::InvalidDate(self.date.clone()))?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT)
            .map_err(|_| RequestError::InvalidTime(self.time.clone()))?;
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(RequestError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(RequestError::LongitudeOutOfRange(self.longitude));
        }
        Ok(ValidatedRequest {
            request: self.clone(),
            local: date.and_time(time),
        })
    }
}

impl ValidatedRequest {
    /// Echo of the request for the chart output
    pub fn chart_meta(&self, timezone: &str) -> ChartMeta {
        ChartMeta {
            date: self.request.date.clone(),
            time: self.request.time.clone(),
            timezone: timezone.to_string(),
            latitude: self.request.latitude,
            longitude: self.request.longitude,
        }
    }
}

/// The UTC instant of a request and the timezone used to get there
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTime {
    pub timezone: String,
    pub utc: DateTime<Utc>,
}

/// Converts the local civil time of a request into UTC
pub trait TimeResolver {
    fn resolve(&self, request: &ValidatedRequest) -> Result<ResolvedTime, RequestError>;
}

/// Resolver applying one fixed UTC offset regardless of location
#[derive(Debug, Clone)]
pub struct FixedOffsetResolver {
    name: String,
    offset: FixedOffset,
}

impl FixedOffsetResolver {
    pub fn new(name: impl Into<String>, offset_minutes: i32) -> Result<Self, RequestError> {
        let offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(RequestError::InvalidOffset(offset_minutes))?;
        Ok(Self {
            name: name.into(),
            offset,
        })
    }

    pub fn utc() -> Self {
        Self {
            name: "UTC".to_string(),
            offset: Utc.fix(),
        }
    }
}

impl TimeResolver for FixedOffsetResolver {
    fn resolve(&self, request: &ValidatedRequest) -> Result<ResolvedTime, RequestError> {
        let local = self
            .offset
            .from_local_datetime(&request.local)
            .single()
            .ok_or_else(|| RequestError::InvalidLocalTime(request.local, self.name.clone()))?;
        Ok(ResolvedTime {
            timezone: self.name.clone(),
            utc: local.with_timezone(&Utc),
        })
    }
}

/// Julian day (UT) of a UTC instant, Gregorian calendar
pub fn julian_day(utc: DateTime<Utc>) -> f64 {
    let mut year = utc.year() as f64;
    let mut month = utc.month() as f64;
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }
    let century = (year / 100.0).floor();
    let gregorian = 2.0 - century + (century / 4.0).floor();

    let hours = utc.hour() as f64
        + utc.minute() as f64 / 60.0
        + (utc.second() as f64 + utc.nanosecond() as f64 / 1e9) / 3600.0;

    (365.25 * (year + 4716.0)).floor()
        + (30.6001 * (month + 1.0)).floor()
        + utc.day() as f64
        + gregorian
        - 1524.5
        + hours / 24.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(date: &str, time: &str, latitude: f64, longitude: f64) -> ChartRequest {
        ChartRequest {
            date: date.to_string(),
            time: time.to_string(),
            latitude,
            longitude,
        }
    }

    #[test]
    fn valid_request_parses() {
        let validated = request("2024-03-05", "14:30:00", 40.7128, -74.006).validate().unwrap();
        assert_eq!(validated.local.to_string(), "2024-03-05 14:30:00");
    }

    #[test]
    fn time_defaults_to_midnight() {
        let req: ChartRequest =
            serde_json::from_str(r#"{"date": "2024-03-05", "latitude": 0.0, "longitude": 0.0}"#).unwrap();
        assert_eq!(req.time, "00:00:00");
    }

    #[test]
    fn rejects_malformed_date_and_time() {
        assert!(matches!(
            request("05/03/2024", "00:00:00", 0.0, 0.0).validate(),
            Err(RequestError::InvalidDate(_))
        ));
        assert!(matches!(
            request("2024-02-30", "00:00:00", 0.0, 0.0).validate(),
            Err(RequestError::InvalidDate(_))
        ));
        assert!(matches!(
            request("2024-03-05", "25:00:00", 0.0, 0.0).validate(),
            Err(RequestError::InvalidTime(_))
        ));
        assert!(matches!(
            request("2024-03-05", "14:30", 0.0, 0.0).validate(),
            Err(RequestError::InvalidTime(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_eq!(
            request("2024-03-05", "00:00:00", 91.0, 0.0).validate(),
            Err(RequestError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            request("2024-03-05", "00:00:00", 0.0, -180.5).validate(),
            Err(RequestError::LongitudeOutOfRange(-180.5))
        );
        assert!(request("2024-03-05", "00:00:00", f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn fixed_offset_converts_to_utc() {
        let validated = request("2024-03-05", "14:30:00", 40.7128, -74.006).validate().unwrap();
        let resolver = FixedOffsetResolver::new("America/New_York", -300).unwrap();
        let resolved = resolver.resolve(&validated).unwrap();
        assert_eq!(resolved.timezone, "America/New_York");
        assert_eq!(resolved.utc.to_rfc3339(), "2024-03-05T19:30:00+00:00");
    }

    #[test]
    fn offset_out_of_range_is_rejected() {
        assert!(matches!(
            FixedOffsetResolver::new("Nowhere", 24 * 60),
            Err(RequestError::InvalidOffset(_))
        ));
    }

    #[test]
    fn julian_day_of_j2000() {
        let utc = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(julian_day(utc), 2451545.0);
    }

    #[test]
    fn julian_day_mid_month() {
        let utc = Utc.with_ymd_and_hms(1987, 4, 10, 19, 21, 0).unwrap();
        assert!((julian_day(utc) - 2446896.30625).abs() < 1e-6);
    }

    #[test]
    fn chart_meta_echoes_request() {
        let validated = request("2024-03-05", "14:30:00", 1.5, 2.5).validate().unwrap();
        let meta = validated.chart_meta("UTC");
        assert_eq!(meta.date, "2024-03-05");
        assert_eq!(meta.time, "14:30:00");
        assert_eq!(meta.timezone, "UTC");
        assert_eq!((meta.latitude, meta.longitude), (1.5, 2.5));
    }
}
