use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use briefcards::{
    draw_all, load_catalog_from_json, reroll, rng_for_draw, rng_from_entropy, Brief, Category,
};
use rand_pcg::Pcg64;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryOpt {
    Client,
    Need,
    Challenge,
    Audience,
}

impl From<CategoryOpt> for Category {
    fn from(opt: CategoryOpt) -> Self {
        match opt {
            CategoryOpt::Client => Category::Client,
            CategoryOpt::Need => Category::Need,
            CategoryOpt::Challenge => Category::Challenge,
            CategoryOpt::Audience => Category::Audience,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "draw", about = "Draw design brief cards from a catalog")]
struct Args {
    /// Cards JSON path
    #[arg(long, default_value = "data/cards.json")]
    cards: PathBuf,

    /// Seed for a reproducible draw (omit for a random one)
    #[arg(long)]
    seed: Option<u64>,

    /// User id mixed into the seed
    #[arg(long, default_value_t = 0)]
    user: u64,

    /// Draw counter mixed into the seed
    #[arg(long, default_value_t = 0)]
    draw: u32,

    /// Reroll a single category instead of drawing all four
    #[arg(long, value_enum, requires = "current")]
    reroll: Option<CategoryOpt>,

    /// Id of the card currently shown for the rerolled category
    #[arg(long)]
    current: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let catalog = load_catalog_from_json(&args.cards)?;
    tracing::debug!(cards = catalog.len(), path = %args.cards.display(), "loaded catalog");

    let mut rng: Pcg64 = match args.seed {
        Some(seed) => rng_for_draw(seed, args.user, args.draw),
        None => rng_from_entropy(),
    };

    if let (Some(category), Some(current_id)) = (args.reroll, args.current) {
        let current = catalog
            .get(current_id)
            .ok_or_else(|| format!("card id {current_id} is not in the catalog"))?;
        let card = reroll(&catalog, category.into(), current, &mut rng)?;
        println!("{}", serde_json::to_string_pretty(&card)?);
        return Ok(());
    }

    let result = draw_all(&catalog, &mut rng);
    println!("{}", serde_json::to_string_pretty(&result)?);
    let brief = Brief::from_draw(&result);
    if !brief.is_empty() {
        println!();
        println!("{brief}");
    }
    Ok(())
}
