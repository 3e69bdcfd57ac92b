/// Scenario player entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;
    use std::process::ExitCode;
    use thumbtrack::{Args, Scenario, run};

    let args = Args::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // RUST_LOG, when set, overrides the configured level
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    if args.save_config {
        if let Err(e) = args.save(&config) {
            eprintln!("Failed to save configuration: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let scenario = match &args.scenario {
        Some(path) => match Scenario::from_file(path) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            log::info!("No scenario given, playing the built-in demo");
            Scenario::demo()
        }
    };

    match run(&scenario, &config.scrollbar) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Scenario error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// WASM builds embed the engine directly and have no player
#[cfg(target_arch = "wasm32")]
fn main() {}
