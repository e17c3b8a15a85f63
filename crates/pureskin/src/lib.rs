pub mod analysis;
pub mod assessment;
pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;
