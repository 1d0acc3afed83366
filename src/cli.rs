// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "progressive-tracer")]
#[command(about = "Progressive accumulation ray tracer", long_about = None)]
pub struct Cli {
    /// Hide the settings panel
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Start on this scene preset instead of the saved one
    #[arg(long)]
    pub preset: Option<i32>,

    /// Settings file, created on exit if missing
    #[arg(long, default_value = "settings.json")]
    pub settings: PathBuf,

    /// Directory holding the material and environment images
    #[arg(long, default_value = "data")]
    pub textures: PathBuf,

    /// Frames per second the orchestrator aims for
    #[arg(long = "tick-rate", default_value_t = 60)]
    pub tick_rate: u32,

    /// Initial window width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["progressive-tracer"]);
        assert!(!cli.no_ui);
        assert_eq!(cli.preset, None);
        assert_eq!(cli.settings, PathBuf::from("settings.json"));
        assert_eq!(cli.tick_rate, 60);
        assert_eq!((cli.width, cli.height), (800, 600));
    }

    #[test]
    fn overrides() {
        let cli = Cli::parse_from([
            "progressive-tracer",
            "--no-ui",
            "--preset",
            "2",
            "--tick-rate",
            "30",
        ]);
        assert!(cli.no_ui);
        assert_eq!(cli.preset, Some(2));
        assert_eq!(cli.tick_rate, 30);
    }
}
