use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults::{
    DEFAULT_CELL_SIZE, DEFAULT_FONT_SIZE, DEFAULT_GRID_SIZE, DEFAULT_OUTPUT, DEFAULT_PADDING,
};

#[derive(Parser, Debug)]
#[command(name = "bingo")]
#[command(author, version, about = "Generate a keyword bingo card")]
pub struct Args {
    /// Input file with bingo keywords, one per line (defaults to the bundled list)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output picture file; format follows the extension (png, jpg, bmp, tiff, pdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of cells per side (odd)
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE, allow_negative_numbers = true)]
    pub size: i64,

    /// Random number generator seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Cell size in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Padding between cell border and text in pixels
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    pub padding: u32,

    /// Largest keyword font size in pixels
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
    pub font_size: f32,

    /// Do not print the seed on the card
    #[arg(long)]
    pub no_footer: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Get the output path, defaulting to `bingo.png`
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["bingo"]);
        assert_eq!(args.size, 5);
        assert_eq!(args.seed, None);
        assert_eq!(args.input, None);
        assert_eq!(args.output_path(), PathBuf::from("bingo.png"));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["bingo", "-i", "words.txt", "-o", "out.jpg", "-n", "3", "-s", "7"]);
        assert_eq!(args.input, Some(PathBuf::from("words.txt")));
        assert_eq!(args.output_path(), PathBuf::from("out.jpg"));
        assert_eq!(args.size, 3);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn test_long_flags() {
        let args = Args::parse_from([
            "bingo", "--input", "w.txt", "--output", "c.pdf", "--size", "7", "--seed", "99", "-vv",
        ]);
        assert_eq!(args.size, 7);
        assert_eq!(args.seed, Some(99));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_negative_size_reaches_validation() {
        let args = Args::parse_from(["bingo", "-n", "-3"]);
        assert_eq!(args.size, -3);
    }

    #[test]
    fn test_rejects_non_numeric_seed() {
        assert!(Args::try_parse_from(["bingo", "-s", "abc"]).is_err());
    }
}
