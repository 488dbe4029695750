//! Entry point for the vendor scorecard command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = scorecard_cli::run() {
        eprintln!("scorecard: {err}");
        std::process::exit(1);
    }
}
