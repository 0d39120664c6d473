#![forbid(unsafe_code)]

use pixel_life::cli::Cli;
use pixel_life::{log_error, Config};

fn main() {
    env_logger::init();
    let cli = Cli::parse_or_exit();

    let (width, height) = (cli.width as usize, cli.height as usize);
    if let Err(err) = pixel_life::run(width, height, Config::default()) {
        log_error("pixel_life::run", &err);
        std::process::exit(1);
    }
}
