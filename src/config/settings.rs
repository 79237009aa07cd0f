use std::path::PathBuf;

use crate::cli::Args;
use crate::error::ConfigError;
use crate::render::colors::CardPalette;

use super::defaults::*;

/// Runtime settings for one bingo run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Requested card size, validated by the builder
    pub size: i64,
    pub seed: Option<u64>,

    /// Keyword file; `None` means the bundled list
    pub input: Option<PathBuf>,
    pub output: PathBuf,

    /// Print the seed on the card
    pub show_footer: bool,

    pub render: RenderSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            seed: None,
            input: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            show_footer: true,
            render: RenderSettings::default(),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let defaults = RenderSettings::default();

        Self {
            size: args.size,
            seed: args.seed,
            input: args.input.clone(),
            output: args.output_path(),
            show_footer: !args.no_footer,
            render: RenderSettings {
                cell_size: args.cell_size,
                padding: args.padding,
                max_font_size: args.font_size,
                min_font_size: defaults.min_font_size.min(args.font_size),
                ..defaults
            },
        }
    }

    /// Render settings for a card built from `seed`
    ///
    /// The footer names the seed and, when the keywords came from a file, the
    /// MD5 of that file, so a card can be traced back to its exact inputs.
    pub fn render_settings(&self, seed: u64, digest: Option<&str>) -> RenderSettings {
        let mut render = self.render.clone();
        render.footer = self.show_footer.then(|| match digest {
            Some(digest) => format!("seed: {} md5: {}", seed, digest),
            None => format!("seed: {}", seed),
        });
        render
    }
}

/// Geometry, typography and colors of the rendered card
///
/// Lengths are in pixels. The PDF backend maps them to millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub cell_size: u32,
    pub padding: u32,
    pub border_width: u32,

    // Typography (pixels)
    pub max_font_size: f32,
    pub min_font_size: f32,
    pub footer_font_size: f32,

    /// Footer text drawn under the star, if any
    pub footer: Option<String>,

    pub palette: CardPalette,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            padding: DEFAULT_PADDING,
            border_width: DEFAULT_BORDER_WIDTH,
            max_font_size: DEFAULT_FONT_SIZE,
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            footer_font_size: DEFAULT_FOOTER_FONT_SIZE,
            footer: None,
            palette: CardPalette::default(),
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&self.cell_size) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        // Content box must keep at least half of the cell
        if self.content_size() * 2 < self.cell_size {
            return Err(ConfigError::InvalidPadding {
                padding: self.padding,
                cell_size: self.cell_size,
            });
        }

        let limit = self.content_size();
        for size in [self.max_font_size, self.min_font_size, self.footer_font_size] {
            if !(size.is_finite() && size > 0.0 && size <= limit as f32) {
                return Err(ConfigError::InvalidFontSize { size, limit });
            }
        }
        if self.min_font_size > self.max_font_size {
            return Err(ConfigError::InvalidFontRange {
                min: self.min_font_size,
                max: self.max_font_size,
            });
        }
        Ok(())
    }

    /// Space inside a cell that text may occupy, per side
    pub fn content_size(&self) -> u32 {
        let margin = self.padding.saturating_add(self.border_width).saturating_mul(2);
        self.cell_size.saturating_sub(margin)
    }

    /// Canvas side length for a card with `side` cells per row
    pub fn canvas_size(&self, side: usize) -> Result<u32, ConfigError> {
        u32::try_from(side)
            .ok()
            .and_then(|side| side.checked_mul(self.cell_size))
            .filter(|&canvas| canvas <= MAX_CANVAS_SIZE)
            .ok_or(ConfigError::CanvasTooLarge {
                side,
                cell_size: self.cell_size,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.render.validate().is_ok());
        assert_eq!(settings.size, 5);
        assert_eq!(settings.output, PathBuf::from("bingo.png"));
        assert_eq!(settings.render.content_size(), 188);
        assert_eq!(settings.render.canvas_size(5).unwrap(), 1000);
    }

    #[test]
    fn test_from_args() {
        let args = Args::parse_from([
            "bingo", "-n", "7", "-s", "42", "-o", "card.pdf", "--cell-size", "120", "--no-footer",
        ]);
        let settings = Settings::from_args(&args);
        assert_eq!(settings.size, 7);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.output, PathBuf::from("card.pdf"));
        assert_eq!(settings.render.cell_size, 120);
        assert!(!settings.show_footer);
        assert_eq!(settings.render_settings(42, Some("abc")).footer, None);
    }

    #[test]
    fn test_footer_carries_seed_and_digest() {
        let settings = Settings::default();
        assert_eq!(
            settings.render_settings(1234, None).footer.as_deref(),
            Some("seed: 1234")
        );
        assert_eq!(
            settings
                .render_settings(42, Some("900150983cd24fb0d6963f7d28e17f72"))
                .footer
                .as_deref(),
            Some("seed: 42 md5: 900150983cd24fb0d6963f7d28e17f72")
        );
    }

    #[test]
    fn test_small_font_size_lowers_minimum() {
        let args = Args::parse_from(["bingo", "--font-size", "4"]);
        let settings = Settings::from_args(&args);
        assert_eq!(settings.render.min_font_size, 4.0);
        assert!(settings.render.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let tiny = RenderSettings {
            cell_size: 10,
            ..Default::default()
        };
        assert!(matches!(tiny.validate(), Err(ConfigError::InvalidCellSize(10))));

        let padded = RenderSettings {
            padding: 60,
            ..Default::default()
        };
        assert!(matches!(
            padded.validate(),
            Err(ConfigError::InvalidPadding { padding: 60, .. })
        ));

        let fonts = RenderSettings {
            min_font_size: 30.0,
            ..Default::default()
        };
        assert!(matches!(
            fonts.validate(),
            Err(ConfigError::InvalidFontRange { .. })
        ));

        let huge = RenderSettings {
            cell_size: 5000,
            ..Default::default()
        };
        assert!(matches!(huge.validate(), Err(ConfigError::InvalidCellSize(5000))));

        let wide = RenderSettings {
            padding: u32::MAX,
            ..Default::default()
        };
        assert_eq!(wide.content_size(), 0);
        assert!(matches!(wide.validate(), Err(ConfigError::InvalidPadding { .. })));
    }

    #[test]
    fn test_validate_rejects_unusable_font_sizes() {
        for size in [1e8, f32::INFINITY, f32::NAN, 0.0, -3.0, 189.0] {
            let settings = RenderSettings {
                max_font_size: size,
                ..Default::default()
            };
            assert!(
                matches!(
                    settings.validate(),
                    Err(ConfigError::InvalidFontSize { limit: 188, .. })
                ),
                "font size {} should be rejected",
                size
            );
        }

        let largest = RenderSettings {
            max_font_size: 188.0,
            ..Default::default()
        };
        assert!(largest.validate().is_ok());

        let args = Args::parse_from(["bingo", "--font-size", "inf"]);
        assert!(Settings::from_args(&args).render.validate().is_err());
    }

    #[test]
    fn test_canvas_size_is_bounded() {
        let settings = RenderSettings::default();
        assert_eq!(settings.canvas_size(27).unwrap(), 5400);
        assert_eq!(settings.canvas_size(49).unwrap(), 9800);
        assert!(matches!(
            settings.canvas_size(51),
            Err(ConfigError::CanvasTooLarge { side: 51, cell_size: 200 })
        ));

        let largest = RenderSettings {
            cell_size: MAX_CELL_SIZE,
            ..Default::default()
        };
        assert!(largest.canvas_size(usize::MAX).is_err());
        assert!(largest.canvas_size(4_294_967).is_err());
    }
}
