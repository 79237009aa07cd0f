use anyhow::{Context, Result};
use clap::Parser;

use keyword_bingo::builder::{build, CardRng};
use keyword_bingo::cli::Args;
use keyword_bingo::config::Settings;
use keyword_bingo::model::KeywordList;
use keyword_bingo::render::{write_card, OutputFormat};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let settings = Settings::from_args(&args);

    // Fail on a bad output name before doing any work
    OutputFormat::from_path(&settings.output)?;
    settings.render.validate()?;

    let keywords = match &settings.input {
        Some(path) => KeywordList::from_file(path)?,
        None => {
            log::info!("No input file given, using the bundled keyword list");
            KeywordList::bundled()
        }
    };

    let mut rng = CardRng::new(settings.seed);
    let card = build(&keywords, settings.size, &mut rng).with_context(|| "Failed to build bingo card")?;

    log::debug!("Card layout:\n{}", card);

    let render_settings = settings.render_settings(rng.seed(), keywords.digest());
    let format = write_card(&card, &render_settings, &settings.output)
        .with_context(|| format!("Failed to create {}", settings.output.display()))?;

    println!(
        "Successfully wrote {} bingo card to {} (seed: {})",
        format,
        settings.output.display(),
        rng.seed()
    );

    Ok(())
}
