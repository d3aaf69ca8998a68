//! Balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # defaults
//!   cargo run --bin simulate -- -n 50 -o 2000    # 50 sessions, 2000 ops
//!   cargo run --bin simulate -- -r 2.5 --seed 42 # high risk, reproducible

use deepcore::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("DEEPCORE BALANCE SIMULATOR");
    println!("Started {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!();
    println!("Configuration:");
    println!("  Sessions:    {}", config.num_sessions);
    println!("  Ops/session: {}", config.ops_per_session);
    println!("  Risk dial:   {:.2}", config.risk);
    if let Some(seed) = config.seed {
        println!("  Seed:        {seed}");
    }
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--sessions" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.num_sessions = value;
                }
                i += 2;
            }
            "-o" | "--ops" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.ops_per_session = value;
                }
                i += 2;
            }
            "-r" | "--risk" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.risk = value;
                }
                i += 2;
            }
            "--seed" => {
                config.seed = args.get(i + 1).and_then(|v| v.parse().ok());
                i += 2;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
                i += 1;
            }
            other => {
                eprintln!("Unknown option: {other}");
                i += 1;
            }
        }
    }

    config
}
