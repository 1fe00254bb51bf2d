mod app;
mod config;
mod error;
mod event;
mod game;
mod tui;
mod ui;

use std::fs::File;
use std::process::ExitCode;

use log::{error, info};

use app::App;
use config::GameConfig;
use error::BreakoutError;
use event::EventHandler;
use tui::Tui;

/// Path for log output; stderr would land on the alternate screen.
const LOG_FILE_ENV: &str = "BREAKOUT_LOG";

fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = std::env::var_os(LOG_FILE_ENV) {
        match File::create(&path) {
            Ok(file) => {
                if std::env::var_os("RUST_LOG").is_none() {
                    builder.filter_level(log::LevelFilter::Info);
                }
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(err) => eprintln!("breakout: cannot open log file {}: {err}", path.to_string_lossy()),
        }
    }
    builder.init();
}

fn run(config: GameConfig) -> Result<(), BreakoutError> {
    let mut tui = Tui::enter()?;
    let mut events = EventHandler::new(tui.reports_key_release());
    let mut app = App::new(config);
    app.run(&mut events, &mut tui)?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let config = match GameConfig::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(BreakoutError::Args(err)) => err.exit(),
        Err(err) => {
            eprintln!("breakout: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "starting: ball speed {}, paddle speed {}, paddle length {}",
        config.ball_speed(),
        config.paddle_speed(),
        config.paddle_length()
    );

    // The terminal is restored when `run` drops its session, before reporting
    match run(config) {
        Ok(()) => {
            info!("bye");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("breakout: {err}");
            ExitCode::FAILURE
        }
    }
}
