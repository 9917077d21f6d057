use log::{error, info};
use netviz::configuration::config::Config;
use netviz::controller::controller_handler::{Controller, RunOutcome};
use netviz::error_handling::types::RunError;
use netviz::render::html::write_page;

fn main() {
    // Logs go to stderr; stdout only ever carries the page or the usage line.
    // https://docs.rs/env_logger/latest/env_logger/
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    info!("Starting netviz");

    let config = Config::from_args();

    let controller = Controller::new(config).unwrap_or_else(|e| {
        error!("Unable to import configuration: {}", e);
        std::process::exit(e.exit_code());
    });

    match controller.run() {
        Ok(RunOutcome::Usage) => {
            println!("{}", Config::usage());
        }
        Ok(RunOutcome::Rendered(html)) => {
            if let Err(e) = write_page(&html, controller.settings.output.as_deref()) {
                let e = RunError::from(e);
                error!("Unable to write the page: {}", e);
                std::process::exit(e.exit_code());
            }
            info!("Done");
        }
        Err(e) => {
            error!("{}, exiting...", e);
            std::process::exit(e.exit_code());
        }
    }
}
