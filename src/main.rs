use clap::Parser;
use log::{debug, error};
use std::io;
use std::path::PathBuf;

use recipeasy::session::print_title;
use recipeasy::{
    AppConfig, Console, DatasetLoader, DownloadPolicy, RequestFetcher, SeededRandom, Session,
};

#[derive(Parser, Debug)]
#[command(name = "recipeasy", version, about = "Browse a recipe dataset from the terminal")]
struct Args {
    /// Dataset file to try before the configured candidates
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Fixed seed for random picks
    #[arg(long)]
    seed: Option<u64>,

    /// Download the dataset without asking when it is missing
    #[arg(short, long, conflicts_with = "no_download")]
    yes: bool,

    /// Never download the dataset
    #[arg(long)]
    no_download: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = AppConfig::load()?;
    if let Some(path) = args.data {
        config.dataset.paths.insert(0, path);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    debug!("{:#?}", config);

    let policy = if args.yes {
        DownloadPolicy::Always
    } else if args.no_download {
        DownloadPolicy::Never
    } else {
        DownloadPolicy::Ask
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    print_title(console.output())?;

    let fetcher = RequestFetcher::new(Some(config.timeout()))?;
    let loader = DatasetLoader::new(&config.dataset, fetcher).policy(policy);
    let Some(recipes) = loader.load(&mut console).await? else {
        error!("No recipe data available");
        console.println("No recipe data available. Exiting.")?;
        return Ok(());
    };
    console.println(format!("Loaded {} recipes.", recipes.len()))?;

    let rng = config
        .seed
        .map(SeededRandom::new)
        .unwrap_or_else(SeededRandom::from_clock);
    Session::new(&recipes, console, rng).run()?;

    Ok(())
}
