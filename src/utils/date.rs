use chrono::NaiveDate;
use crate::core::library::{LibraryError, LibraryResult};

// on-disk format
pub const DATE_FMT: &str = "%Y-%m-%d";
// operator-facing format, used for display and for dates typed into requests
pub const DISPLAY_FMT: &str = "%d/%m/%Y";
pub const TIMESTAMP_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn format_display(date: &NaiveDate) -> String {
    date.format(DISPLAY_FMT).to_string()
}

pub fn parse_display(value: &str) -> LibraryResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DISPLAY_FMT).map_err(|err| LibraryError::serialization(
        format!("invalid date {:?}, expected DD/MM/YYYY: {}", value, err).as_str()))
}

pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        date.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&str_date, DATE_FMT).map_err(D::Error::custom)
    }
}

pub mod display {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{format_display, parse_display};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        format_display(date).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        parse_display(&str_date).map_err(D::Error::custom)
    }
}

pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::TIMESTAMP_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(TIMESTAMP_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&str_time, TIMESTAMP_FMT).map_err(D::Error::custom)
    }
}
