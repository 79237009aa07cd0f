pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod render;

pub use builder::{build, CardBuilder, CardRng, RandomSource};
pub use config::{RenderSettings, Settings};
pub use error::{BingoError, CardError, ConfigError, KeywordError, RenderError};
pub use model::{Card, Cell, GridSize, KeywordList, Position};
pub use render::{render_card, write_card, OutputFormat};

/// High-level API: build a card and encode it in one step.
///
/// Returns the encoded bytes together with the seed that produced the card,
/// so an unseeded card can be regenerated later.
///
/// # Example
///
/// ```no_run
/// use keyword_bingo::{generate_card, KeywordList, OutputFormat, RenderSettings};
///
/// let keywords = KeywordList::parse(&std::fs::read_to_string("words.txt").unwrap());
/// let (png, seed) = generate_card(
///     &keywords,
///     5,
///     Some(42),
///     OutputFormat::Png,
///     &RenderSettings::default(),
/// )
/// .unwrap();
///
/// assert_eq!(seed, 42);
/// std::fs::write("card.png", png).unwrap();
/// ```
pub fn generate_card(
    keywords: &KeywordList,
    size: i64,
    seed: Option<u64>,
    format: OutputFormat,
    settings: &RenderSettings,
) -> Result<(Vec<u8>, u64), BingoError> {
    let mut rng = CardRng::new(seed);
    let card = build(keywords, size, &mut rng)?;
    let bytes = render_card(&card, settings, format)?;
    Ok((bytes, rng.seed()))
}
