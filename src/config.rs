//! Show constants and the command line that can override them.

use crate::Rgb;
use crate::error::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_TEXT: &str = "~~~~~~~~~~~~~~~~~~~~~~~~\n\
Happy New Year\n\
to everyone who stayed up late\n\
to watch the sky catch fire\n\
~~~~~~~~~~~~~~~~~~~~~~~~";

/// Every tunable of the show. Physics values are in canvas units and frames.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowConfig {
    /// Added to every particle's vertical velocity each frame.
    pub gravity: f32,
    /// Frames between automatic launches.
    pub launch_interval: u32,
    /// Upward speed of a rising particle.
    pub rise_speed: f32,
    /// Rising particles burst once above this fraction of the canvas height.
    pub detonation_fraction: f32,
    /// Width of the band, centered on the canvas, where automatic launches start.
    pub launch_spread: f32,
    /// Frames a glyph stays lit after its last hit.
    pub lit_frames: i32,
    pub burst_min: usize,
    /// Exclusive.
    pub burst_max: usize,
    /// Radius of the burst in velocity space.
    pub burst_speed: f32,
    /// Particle sizes are drawn from `[size_min, size_max) * size_scale`.
    pub size_min: f32,
    pub size_max: f32,
    pub size_scale: f32,
    /// Opacity of the per-frame overlay that leaves the trails.
    pub trail_alpha: f32,
    pub background: Rgb,
    /// Color of glyphs that are not lit.
    pub text_color: Rgb,
    pub text: String,
    pub font_family: String,
    /// Font size as a fraction of the canvas height.
    pub font_size_ratio: f32,
    pub line_height: f32,
    /// Canvas units per terminal pixel. Unset, the terminal is scaled so the
    /// canvas is `canvas_height` units tall.
    pub scale: Option<f32>,
    pub canvas_height: f32,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            gravity: 0.05,
            launch_interval: 200,
            rise_speed: 8.0,
            detonation_fraction: 0.3,
            launch_spread: 0.6,
            lit_frames: 60,
            burst_min: 25,
            burst_max: 250,
            burst_speed: 5.0,
            size_min: 0.1,
            size_max: 0.9,
            size_scale: 5.0,
            trail_alpha: 0.1,
            background: (0, 0, 0),
            text_color: (0, 0, 0),
            text: DEFAULT_TEXT.to_string(),
            font_family: "Satisfy".to_string(),
            font_size_ratio: 0.05,
            line_height: 1.2,
            scale: None,
            canvas_height: 800.0,
        }
    }
}

impl ShowConfig {
    /// Loads a TOML file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Canvas units per pixel for a terminal `pixel_height` pixels tall.
    pub fn scale_for(&self, pixel_height: usize) -> f32 {
        self.scale
            .unwrap_or_else(|| self.canvas_height / pixel_height.max(1) as f32)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.launch_interval == 0 {
            return Err(ConfigError::Invalid("launch_interval must be at least 1".into()));
        }
        if let Some(scale) = self.scale {
            if !(scale > 0.0) {
                return Err(ConfigError::Invalid(format!("scale must be positive, got {scale}")));
            }
        }
        if !(self.canvas_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "canvas_height must be positive, got {}",
                self.canvas_height
            )));
        }
        // without gravity nothing ever falls off the canvas
        if !(self.gravity > 0.0) {
            return Err(ConfigError::Invalid(format!("gravity must be positive, got {}", self.gravity)));
        }
        if !(self.rise_speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "rise_speed must be positive, got {}",
                self.rise_speed
            )));
        }
        if !(self.detonation_fraction > 0.0 && self.detonation_fraction <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "detonation_fraction must be in (0, 1], got {}",
                self.detonation_fraction
            )));
        }
        if !(0.0..=1.0).contains(&self.launch_spread) {
            return Err(ConfigError::Invalid(format!(
                "launch_spread must be in [0, 1], got {}",
                self.launch_spread
            )));
        }
        if self.burst_min >= self.burst_max {
            return Err(ConfigError::Invalid(format!(
                "burst range {}..{} is empty",
                self.burst_min, self.burst_max
            )));
        }
        if self.size_min > self.size_max {
            return Err(ConfigError::Invalid("size_min is larger than size_max".into()));
        }
        if !(0.0..=1.0).contains(&self.trail_alpha) {
            return Err(ConfigError::Invalid(format!(
                "trail_alpha must be in [0, 1], got {}",
                self.trail_alpha
            )));
        }
        if self.lit_frames < 1 {
            return Err(ConfigError::Invalid("lit_frames must be at least 1".into()));
        }
        Ok(())
    }
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Command {
    Run(Options),
    Help,
}

#[derive(Debug)]
pub struct Options {
    pub show: ShowConfig,
    pub log_file: Option<PathBuf>,
}

impl Command {
    /// Parses the arguments after the program name.
    ///
    /// `--config` is applied first wherever it appears so that the other
    /// options always override the file. Option values are never read as
    /// option names.
    pub fn parse(args: &[String]) -> ConfigResult<Self> {
        let mut config_path = None;
        let mut overrides = Vec::new();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "help" | "--help" | "-h" => return Ok(Command::Help),
                "--config" => config_path = Some(value_of(args, i)?),
                option @ ("--bg-color" | "--text-color" | "--text" | "--scale" | "--log-file") => {
                    overrides.push((option, value_of(args, i)?));
                }
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
            i += 2;
        }

        // the file goes first so that every other option overrides it
        let mut show = match config_path {
            Some(path) => ShowConfig::from_file(Path::new(path))?,
            None => ShowConfig::default(),
        };
        let mut log_file = None;
        for (option, value) in overrides {
            match option {
                "--bg-color" => show.background = parse_hex_color(value)?,
                "--text-color" => show.text_color = parse_hex_color(value)?,
                "--text" => show.text = value.replace("\\n", "\n"),
                "--scale" => {
                    let scale = value.parse().map_err(|_| ConfigError::InvalidNumber {
                        option: option.into(),
                        value: value.clone(),
                    })?;
                    show.scale = Some(scale);
                }
                _ => log_file = Some(PathBuf::from(value)),
            }
        }

        show.validate()?;
        Ok(Command::Run(Options { show, log_file }))
    }
}

fn value_of(args: &[String], i: usize) -> ConfigResult<&String> {
    args.get(i + 1).ok_or_else(|| ConfigError::MissingValue(args[i].clone()))
}

pub fn parse_hex_color(hex: &str) -> ConfigResult<Rgb> {
    let invalid = || ConfigError::InvalidColor(hex.to_string());
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }

    let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
    let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
    let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;

    Ok((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_are_valid() {
        assert!(ShowConfig::default().validate().is_ok());
    }

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("1a1b26").unwrap(), (0x1a, 0x1b, 0x26));
        assert_eq!(parse_hex_color("#FF0080").unwrap(), (255, 0, 128));
        assert!(parse_hex_color("fff").is_err());
        assert!(parse_hex_color("gg0000").is_err());
        assert!(parse_hex_color("ééé").is_err());
    }

    #[test]
    fn options_override_defaults() {
        let cmd = Command::parse(&args(&[
            "--bg-color", "101010", "--text", "a\\nb", "--scale", "4", "--log-file", "/tmp/x.log",
        ]))
        .unwrap();
        let Command::Run(opts) = cmd else { panic!("expected run") };
        assert_eq!(opts.show.background, (16, 16, 16));
        assert_eq!(opts.show.text, "a\nb");
        assert_eq!(opts.show.scale, Some(4.0));
        assert_eq!(opts.log_file, Some(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn help_and_errors() {
        assert!(matches!(Command::parse(&args(&["-h"])), Ok(Command::Help)));
        assert!(matches!(
            Command::parse(&args(&["--bogus"])),
            Err(ConfigError::UnknownOption(_))
        ));
        assert!(matches!(
            Command::parse(&args(&["--scale"])),
            Err(ConfigError::MissingValue(_))
        ));
        assert!(matches!(
            Command::parse(&args(&["--scale", "big"])),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Command::parse(&args(&["--scale", "0"])),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn validation_rejects_nonsense() {
        let bad = [
            ShowConfig { launch_interval: 0, ..ShowConfig::default() },
            ShowConfig { scale: Some(-1.0), ..ShowConfig::default() },
            ShowConfig { canvas_height: 0.0, ..ShowConfig::default() },
            ShowConfig { gravity: 0.0, ..ShowConfig::default() },
            ShowConfig { gravity: -0.05, ..ShowConfig::default() },
            ShowConfig { rise_speed: 0.0, ..ShowConfig::default() },
            ShowConfig { rise_speed: -8.0, ..ShowConfig::default() },
            ShowConfig { detonation_fraction: 0.0, ..ShowConfig::default() },
            ShowConfig { detonation_fraction: 1.5, ..ShowConfig::default() },
            ShowConfig { burst_min: 250, burst_max: 25, ..ShowConfig::default() },
            ShowConfig { burst_min: 10, burst_max: 10, ..ShowConfig::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }

    #[test]
    fn config_file_overlays_defaults() {
        let path = std::env::temp_dir().join(format!("fireglyph-{}.toml", std::process::id()));
        fs::write(&path, "gravity = 0.1\nbackground = [1, 2, 3]\ntext = \"hi\"\n").unwrap();

        let cmd = Command::parse(&args(&["--bg-color", "000000", "--config", path.to_str().unwrap()]))
            .unwrap();
        fs::remove_file(&path).ok();

        let Command::Run(opts) = cmd else { panic!("expected run") };
        assert_eq!(opts.show.gravity, 0.1);
        assert_eq!(opts.show.text, "hi");
        // command-line flags win over the file
        assert_eq!(opts.show.background, (0, 0, 0));
        assert_eq!(opts.show.launch_interval, 200);
    }

    #[test]
    fn option_values_are_not_options() {
        let cmd = Command::parse(&args(&["--text", "--config", "--bg-color", "102030"])).unwrap();
        let Command::Run(opts) = cmd else { panic!("expected run") };
        assert_eq!(opts.show.text, "--config");
        assert_eq!(opts.show.background, (0x10, 0x20, 0x30));

        let cmd = Command::parse(&args(&["--text", "-h"])).unwrap();
        assert!(matches!(cmd, Command::Run(_)));
    }

    #[test]
    fn scale_fits_the_canvas_height() {
        let config = ShowConfig::default();
        assert_eq!(config.scale_for(100), 8.0);
        assert_eq!(config.scale_for(50), 16.0);
        assert_eq!(config.scale_for(0), 800.0);

        let fixed = ShowConfig { scale: Some(3.0), ..ShowConfig::default() };
        assert_eq!(fixed.scale_for(100), 3.0);
    }

    #[test]
    fn missing_config_file() {
        let err = ShowConfig::from_file(Path::new("/nonexistent/fireglyph.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
