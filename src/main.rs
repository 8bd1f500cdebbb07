mod app;
mod app_error;
mod term;

use std::{fs::File, path::PathBuf};

use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use snek::GameConfig;
use structopt::StructOpt;

use crate::app::{Outcome, SnakeApp};
use crate::app_error::{AppError, Result};

#[derive(StructOpt, Debug)]
#[structopt(name = "snek", about = "Don't step on snek")]
struct Options {
    /// Board width in cells, defaults to the terminal width
    #[structopt(long)]
    width: Option<u16>,
    /// Board height in cells, defaults to the terminal height
    #[structopt(long)]
    height: Option<u16>,
    /// Milliseconds between steps at the start of a game
    #[structopt(long, default_value = "150")]
    speed: f64,
    /// Lower bound for the step interval as the snake speeds up
    #[structopt(long)]
    min_speed: Option<f64>,
    /// Seed for fruit placement
    #[structopt(long)]
    seed: Option<u64>,
    #[structopt(long, parse(from_os_str), default_value = "snek.log")]
    log_file: PathBuf,
    /// Log every step and turn
    #[structopt(short, long)]
    verbose: bool,
}

impl Options {
    fn game_config(&self) -> GameConfig {
        let width = self.width.unwrap_or(0);
        let height = self.height.unwrap_or(0);
        let defaults = GameConfig::default();

        GameConfig {
            width,
            height,
            grid_speed_ms: self.speed,
            min_grid_speed_ms: self.min_speed,
            ..defaults
        }
    }
}

fn setup_logger(options: &Options) -> Result {
    // The terminal is the game screen, so logs go to a file
    let file = File::create(&options.log_file)
        .map_err(|source| AppError::LogFile { path: options.log_file.clone(), source })?;
    let level = if options.verbose { LevelFilter::Trace } else { LevelFilter::Info };
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

fn run(app: &mut SnakeApp) -> Result {
    if let Outcome::Quit = app.show_intro()? {
        return Ok(());
    }

    loop {
        if let Outcome::Quit = app.play()? {
            return Ok(());
        }
    }
}

fn main() -> Result {
    let options = Options::from_args();
    setup_logger(&options)?;
    info!("starting snek with {:?}", options);

    let mut app = SnakeApp::new(options.game_config(), options.seed)?;
    app.initialize()?;

    let res = run(&mut app);
    app.restore()?;

    if let Err(e) = &res {
        error!("{}", e);
    }
    res
}
