// Error types for driveguide

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum DriveGuideError {
    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error reading config file"))]
    ConfigReadError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
    #[snafu(display("Error parsing config file"))]
    ConfigParseError { source: serde_json::Error },

    // CLI errors
    #[snafu(display("Unknown guide section: {anchor}"))]
    UnknownSection { anchor: String },
}
