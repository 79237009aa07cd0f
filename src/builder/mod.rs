//! Card generation
//!
//! Picks `N² - 1` keywords without replacement and lays them out around the
//! free center cell.

pub mod random;

pub use random::{CardRng, RandomSource};

use crate::error::CardError;
use crate::model::{Card, GridSize, KeywordList};

/// Build a bingo card of `size` x `size` cells.
///
/// Keywords are drawn with a partial Fisher-Yates shuffle: after `k` steps the
/// first `k` entries are a uniformly random ordered sample of the list, so
/// placing them row by row gives every keyword-to-cell assignment the same
/// probability. The random source is the only thing consumed.
pub fn build<R>(keywords: &KeywordList, size: i64, rng: &mut R) -> Result<Card, CardError>
where
    R: RandomSource + ?Sized,
{
    let size = GridSize::new(size)?;
    let needed = size.keywords_needed();

    if keywords.len() < needed {
        return Err(CardError::InsufficientKeywords {
            size: size.side(),
            needed,
            available: keywords.len(),
        });
    }

    let mut pool: Vec<String> = keywords.as_slice().to_vec();
    for i in 0..needed {
        let j = i + rng.below(pool.len() - i);
        pool.swap(i, j);
    }
    pool.truncate(needed);

    log::info!(
        "Built {} card from {} unique keywords",
        size,
        keywords.len()
    );

    Ok(Card::from_placement(size, pool))
}

/// Card generation parameters with an explicit keyword list
#[derive(Debug, Clone)]
pub struct CardBuilder {
    keywords: KeywordList,
    size: i64,
}

impl CardBuilder {
    pub fn new(keywords: KeywordList, size: i64) -> Self {
        Self { keywords, size }
    }

    /// Builder over the keyword list shipped with the binary
    pub fn with_bundled_keywords(size: i64) -> Self {
        Self::new(KeywordList::bundled(), size)
    }

    pub fn keywords(&self) -> &KeywordList {
        &self.keywords
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn build<R>(&self, rng: &mut R) -> Result<Card, CardError>
    where
        R: RandomSource + ?Sized,
    {
        build(&self.keywords, self.size, rng)
    }
}
