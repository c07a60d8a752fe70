pub mod config_manager;
pub mod exporters;
pub mod logging;
pub mod telemetry;

pub use telemetry::{ErrorReporter, Location, ReporterSettings, StaticLocation};
