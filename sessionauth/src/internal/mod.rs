pub mod claims;
pub mod unixtime;
