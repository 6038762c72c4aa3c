use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    /// Initial theme (blue, green, purple, orange, dark); overrides the config file
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Initial layout (standard, minimal, creative); overrides the config file
    #[arg(long, value_name = "LAYOUT")]
    pub layout: Option<String>,
}
