use comic_reader::configuration::Settings;
use comic_reader::run::run;
use comic_reader::Cli;
use env_logger::{Builder, Env, Target};
use log::error;
use std::process;

#[tokio::main]
async fn main() {
    // Init logging
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Stderr);
    builder.init();

    // Parse Args
    let cli = Cli::new();

    // Parse Settings
    let settings = match Settings::new(&cli.config_file) {
        Ok(s) => s,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    // Run
    if let Err(e) = run(cli, settings).await {
        error!("Application error: {}", e);
        process::exit(1);
    }
}
