use clap::Parser;

/// Runtime configuration for the file drop server.
///
/// The server exposes exactly one knob: the directory that files are
/// served from and uploaded into. An empty string means file names
/// resolve relative to the working directory.
#[derive(Debug, Clone, Parser)]
#[command(name = "depot")]
#[command(about = "Minimal file drop server on port 4221")]
pub struct Config {
    /// Directory to serve files from
    #[arg(long, default_value = "")]
    pub directory: String,
}

impl Config {
    pub fn load() -> Self {
        Config::parse()
    }
}
