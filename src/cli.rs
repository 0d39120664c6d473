use clap::{CommandFactory, Parser};

pub const KEYS: &str = "\
Keys:
  ENTER - step
  LMB   - flip state (hold and drag to paint)
  R     - randomize
  C     - clear
  ESC   - quit";

#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "pixel-life", about = "Conway's Game of Life", after_help = KEYS)]
pub struct Cli {
    /// Grid width in cells
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Grid height in cells
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
}

impl Cli {
    /// Parse the process arguments. Help requests print and exit 0; anything
    /// else that fails prints the usage and exits 1.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) if !err.use_stderr() => err.exit(),
            Err(err) => {
                eprintln!("{err}");
                eprintln!("{}", Self::command().render_usage());
                eprintln!("{KEYS}");
                std::process::exit(1);
            }
        }
    }
}
