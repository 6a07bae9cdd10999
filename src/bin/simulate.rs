//! Balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze gap-curve difficulty.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 1000 runs
//!   cargo run --bin simulate -- -n 100 --seed 42 # Reproducible run
//!   cargo run --bin simulate -- --skittish 0.1   # Random-flap policy

use meadow::build_info::{BUILD_COMMIT, BUILD_DATE};
use meadow::simulator::{run_simulation, FlapPolicy, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              MEADOW GLIDE BALANCE SIMULATOR                   ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Build: {} ({})", BUILD_COMMIT, BUILD_DATE);
    println!();
    println!("Configuration:");
    println!("  Runs:              {}", config.num_runs);
    println!("  Max Steps:         {}", config.max_steps);
    println!("  Step dt:           {}", config.dt);
    println!("  Steps/Obstacle:    {}", config.steps_per_obstacle);
    println!("  Obstacles/Phase:   {}", config.obstacles_per_phase);
    println!("  Policy:            {} {:?}", config.policy.name(), config.policy);
    if let Some(seed) = config.seed {
        println!("  Seed:              {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("simulation failed: {}", err);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => eprintln!("failed to write JSON report: {}", err),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--steps" => {
                if i + 1 < args.len() {
                    config.max_steps = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "--dt" => {
                if i + 1 < args.len() {
                    config.dt = args[i + 1].parse().unwrap_or(config.dt);
                    i += 1;
                }
            }
            "--pace" => {
                if i + 1 < args.len() {
                    config.steps_per_obstacle = args[i + 1].parse().unwrap_or(90);
                    i += 1;
                }
            }
            "--phase" => {
                if i + 1 < args.len() {
                    config.obstacles_per_phase = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--metronome" => {
                if i + 1 < args.len() {
                    let period = args[i + 1].parse().unwrap_or(30);
                    config.policy = FlapPolicy::Metronome { period };
                    i += 1;
                }
            }
            "--hold" => {
                if i + 1 < args.len() {
                    let target = args[i + 1].parse().unwrap_or(280.0);
                    config.policy = FlapPolicy::AltitudeHold { target };
                    i += 1;
                }
            }
            "--skittish" => {
                if i + 1 < args.len() {
                    let flap_chance = args[i + 1].parse().unwrap_or(0.1);
                    config.policy = FlapPolicy::Skittish { flap_chance };
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick_survival_test();
            }
            "--endurance" => {
                config = SimConfig::endurance_test();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Meadow Glide Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --steps <T>     Max steps per run (default: 100,000)");
    println!("    --dt <DT>           Step time delta in seconds (default: 0.016)");
    println!("    --pace <P>          Steps between obstacles (default: 90)");
    println!("    --phase <K>         Obstacles per day/night phase (default: 10)");
    println!("    --metronome <N>     Flap every N steps");
    println!("    --hold <Y>          Flap when below height Y (default policy)");
    println!("    --skittish <P>      Flap with probability P each step");
    println!("    -v, --verbose       Per-run output");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick test (100 runs, 20k steps)");
    println!("    --endurance         Long test (200 runs, 1M steps)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                     # Default run");
    println!("    cargo run --bin simulate -- -n 100 --seed 42 # Reproducible");
    println!("    cargo run --bin simulate -- --metronome 25   # Fixed-cadence flapping");
    println!("    cargo run --bin simulate -- --quick --json   # Quick check + JSON");
}
