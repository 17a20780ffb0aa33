use std::path::PathBuf;
use std::thread;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rocket_launch::*;

#[derive(Parser, Debug)]
#[command(about = "Headless launch of the moon-scene rocket")]
struct Args {
    /// Scenario file (TOML). Defaults to the launch pad scenario.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use per-tick forces, velocity dependent drag and semi-implicit Euler.
    #[arg(long)]
    physical: bool,

    /// Overrides the scenario's simulation time limit (seconds).
    #[arg(long)]
    max_time: Option<f64>,

    /// Pace ticks against the wall clock instead of simulating time.
    #[arg(long)]
    realtime: bool,

    /// Number of background stars to generate.
    #[arg(long, default_value_t = STAR_COUNT)]
    stars: usize,

    /// Seed for the starfield.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn load_config(args: &Args) -> Result<SimulationConfig, SimulationError> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if args.physical {
        config.integration = IntegrationConfig::physical();
    }
    if let Some(max_time) = args.max_time {
        config.max_simulation_time = max_time;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    log::info!("Integration settings: {:?}", config.integration);

    let starfield = Starfield::generate(
        &mut StdRng::seed_from_u64(args.seed),
        args.stars,
        STARFIELD_EXTENT,
    );
    log::info!("Scene ready with {} stars", starfield.len());

    let tick_interval = config.tick_interval();
    let max_simulation_time = config.max_simulation_time;
    let mut control = LaunchControl::new(config);
    let mut telemetry = Telemetry::new();

    control.launch()?;

    let clock = FrameClock::start();
    let mut previous_elapsed = 0.0;
    let mut simulated_elapsed = 0.0;
    while simulated_elapsed < max_simulation_time {
        simulated_elapsed += tick_interval;

        let elapsed_time = if args.realtime {
            thread::sleep(clock.until(simulated_elapsed));
            clock.elapsed_time()
        } else {
            simulated_elapsed
        };

        match control.tick(elapsed_time) {
            Ok(state) => {
                telemetry.collect_data(&control, elapsed_time - previous_elapsed);
                previous_elapsed = elapsed_time;

                if state == RocketState::Landed {
                    log::info!("Rocket has landed. Ending simulation.");
                    break;
                }
            }
            Err(e) => {
                log::error!("Error during simulation step: {}", e);
                break;
            }
        }
    }

    if control.state() != RocketState::Landed {
        log::warn!(
            "Simulation time limit reached at altitude {:.3}",
            control.altitude()
        );
    }

    telemetry.display_data();

    Ok(())
}
