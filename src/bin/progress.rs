use clap::Parser;
use briefcards::LevelCurve;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "progress", about = "Compute level and stats from a point total")]
struct Args {
    /// Current point total
    #[arg(long, default_value_t = 0)]
    points: u64,

    /// Points to award before computing stats
    #[arg(long, allow_negative_numbers = true)]
    add: Option<i64>,

    /// Points to deduct before computing stats
    #[arg(long, allow_negative_numbers = true)]
    deduct: Option<i64>,

    /// Completed challenges (submitted designs)
    #[arg(long, default_value_t = 0)]
    designs: u64,

    /// Earned badges
    #[arg(long, default_value_t = 0)]
    badges: u64,

    /// Likes across all designs
    #[arg(long, default_value_t = 0)]
    likes: u64,

    /// Points per curve step
    #[arg(long, default_value_t = LevelCurve::DEFAULT_STEP)]
    step: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let curve = LevelCurve::new(args.step)?;
    let mut progress = curve.progress(args.points);

    if let Some(delta) = args.add {
        curve.add_points(&mut progress, delta)?;
    }
    if let Some(delta) = args.deduct {
        curve.deduct_points(&mut progress, delta)?;
    }

    let stats = curve.compute_stats(
        progress.points(),
        progress.level(),
        args.designs,
        args.badges,
        args.likes,
    )?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

