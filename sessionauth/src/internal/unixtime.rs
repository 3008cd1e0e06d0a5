use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use time::{Duration, OffsetDateTime};

//--------------------------------------------------------------------------------------------------
// Unix Timestamp handling
//--------------------------------------------------------------------------------------------------

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seconds(u32);

impl Seconds {
    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::seconds(i64::from(self.0))
    }

    pub fn as_std(self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.0))
    }
}

pub const ONE_HOUR: Seconds = Seconds(3600);

// Both the claim expiry and the cookie lifetime are derived from this
pub const SESSION_DURATION: Seconds = ONE_HOUR;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnixTimestamp(OffsetDateTime);

impl Serialize for UnixTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.unix_timestamp().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UnixTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let timestamp = i64::deserialize(deserializer)?;
        let datetime =
            OffsetDateTime::from_unix_timestamp(timestamp).map_err(serde::de::Error::custom)?;
        Ok(UnixTimestamp(datetime))
    }
}

impl Debug for UnixTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UnixTimestamp({})", self.0.unix_timestamp())
    }
}

impl From<UnixTimestamp> for OffsetDateTime {
    fn from(ts: UnixTimestamp) -> Self {
        ts.0
    }
}

impl From<OffsetDateTime> for UnixTimestamp {
    // Sub-second precision is dropped so that a timestamp survives the trip through a token
    fn from(datetime: OffsetDateTime) -> Self {
        UnixTimestamp(datetime.replace_nanosecond(0).unwrap_or(datetime))
    }
}

impl UnixTimestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub fn from_unix(seconds: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp(seconds)
            .ok()
            .map(UnixTimestamp)
    }

    pub fn unix(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn add(self, seconds: Seconds) -> Self {
        UnixTimestamp(self.0 + seconds.as_duration())
    }

    pub fn add_session_duration(self) -> Self {
        self.add(SESSION_DURATION)
    }
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_duration_is_one_hour() {
        let start = UnixTimestamp::from_unix(1_700_000_000).unwrap();
        assert_eq!(start.add_session_duration().unix(), 1_700_003_600);
    }

    #[test]
    fn from_datetime_truncates_to_whole_seconds() {
        let datetime = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
            + Duration::milliseconds(750);
        let ts = UnixTimestamp::from(datetime);
        assert_eq!(ts.unix(), 1_700_000_000);
        assert_eq!(ts, UnixTimestamp::from_unix(1_700_000_000).unwrap());
    }
}
