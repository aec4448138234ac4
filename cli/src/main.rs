mod args;
mod load;

use args::Args;
use log::info;

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let mut world = args
        .config
        .world()
        .unwrap_or_else(|e| args::invalid(e).exit());
    for &(x, y) in &args.toggle {
        world.toggle_cell(x, y);
    }
    info!(
        "Running {} generations from {} living cells",
        args.generations,
        world.population()
    );
    for _ in 0..args.generations {
        world.compute_next_generation();
    }

    print!("{}", world);
    println!(
        "generation = {}, population = {}",
        world.generation(),
        world.population()
    );
}
