pub mod backup;
pub mod calculator;
pub mod log;
pub mod profile;
pub mod track;
