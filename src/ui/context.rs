use slnmerge::config::{ColorMode, Config};

use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = !json
            && match cli_color {
                Some(ColorWhen::Never) => false,
                Some(ColorWhen::Always) => true,
                Some(ColorWhen::Auto) | None => match config.output.color {
                    ColorMode::Never => false,
                    ColorMode::Always => true,
                    ColorMode::Auto => caps.supports_color && !caps.is_ci,
                },
            };

        Self {
            json,
            verbose,
            caps,
            color,
            unicode: caps.supports_unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps(is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci,
        }
    }

    #[test]
    fn auto_color_follows_terminal() {
        let ctx = UiContext::from_caps(false, 0, None, &Config::default(), tty_caps(false));
        assert!(ctx.color);
    }

    #[test]
    fn auto_color_is_off_in_ci() {
        let ctx = UiContext::from_caps(false, 0, None, &Config::default(), tty_caps(true));
        assert!(!ctx.color);
    }

    #[test]
    fn cli_flag_beats_config() {
        let mut config = Config::default();
        config.output.color = ColorMode::Always;
        let ctx = UiContext::from_caps(
            false,
            0,
            Some(ColorWhen::Never),
            &config,
            tty_caps(false),
        );
        assert!(!ctx.color);
    }

    #[test]
    fn json_never_colors() {
        let ctx = UiContext::from_caps(
            true,
            0,
            Some(ColorWhen::Always),
            &Config::default(),
            tty_caps(false),
        );
        assert!(!ctx.color);
    }
}
