use anyhow::Result;
use log::{LevelFilter, info, warn};
use multi_hop::util::{read_pairs_from_file, write_paths_to_file};
use multi_hop::{Config, MultiHop, PathFinder};

fn main() -> Result<()> {
    // initializations
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    let config = Config::from_env()?;

    // load in all the pairs
    info!("Loading pairs from {}...", config.pairs_file);
    let pairs = read_pairs_from_file(&config.pairs_file)?;
    info!("Loaded {} pairs", pairs.len());

    // search
    info!(
        "Searching {} -> {} with {} intermediate hops...",
        config.src_token, config.dst_token, config.hops
    );
    let start = std::time::Instant::now();
    let paths = PathFinder.multi_hop_swap(&pairs, &config.src_token, &config.dst_token, config.hops);
    info!("Found {} paths in {:?}", paths.len(), start.elapsed());
    if paths.is_empty() {
        warn!("No route from {} to {}", config.src_token, config.dst_token);
    }

    match &config.output_file {
        Some(output_file) => {
            write_paths_to_file(&paths, output_file)?;
            info!("Wrote paths to {}", output_file);
        }
        None => println!("{}", serde_json::to_string_pretty(&paths)?),
    }

    Ok(())
}
