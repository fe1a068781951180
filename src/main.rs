use std::{
    env,
    io::{self, Write},
    process::ExitCode,
};

use rational::{config, demo};

fn main() -> ExitCode {
    // load environment variables from `.env` if present
    let _ = dotenv::dotenv();
    // use INFO log level by default, RUST_LOG overrides it
    let log_env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(log_env)
        .format(|buf, record| {
            let ts = buf.timestamp_seconds();
            writeln!(buf, "[{}] {}: {}", record.level(), ts, record.args())
        })
        .init();

    let config_path = match env::var(config::CONFIG_PATH_ENV).unwrap_or_default().as_str() {
        "" => config::DEFAULT_CONFIG_PATH.to_string(),
        path_str => path_str.to_string(),
    };
    let config = match config::load_config(&config_path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to parse {config_path}: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, pair) in config.pairs.iter().enumerate() {
        if i > 0 {
            if let Err(err) = writeln!(out) {
                log::error!("Failed to write report: {}", err);
                return ExitCode::FAILURE;
            }
        }
        if let Err(err) = demo::report(&mut out, pair.lhs, pair.rhs) {
            log::error!("Failed to write report: {}", err);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
