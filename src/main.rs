use std::process;

use log::{error, info};

use accept_negotiator::config::{Config, OutputFormat, USAGE};
use accept_negotiator::error::Error;
use accept_negotiator::{explain, negotiate_content_type};

fn run(config: &Config) -> Result<String, Error> {
    match config.output {
        OutputFormat::Plain => Ok(negotiate_content_type(&config.accept, &config.available)),
        OutputFormat::Json => {
            let explanation = explain(&config.accept, &config.available);
            serde_json::to_string_pretty(&explanation)
                .map_err(|e| Error::Serialization(e.to_string()))
        }
    }
}

fn main() {
    // ロガーの初期化
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            process::exit(e.exit_code());
        }
    };

    info!(
        "Negotiating Accept {:?} against {} content type(s), output={}",
        config.accept,
        config.available.len(),
        config.output
    );

    match run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{}", e);
            process::exit(e.exit_code());
        }
    }
}
