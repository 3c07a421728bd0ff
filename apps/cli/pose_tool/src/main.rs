mod apps;

use std::error::Error;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use crate::apps::PoseTool;

fn main() -> Result<(), Box<dyn Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut tool = PoseTool::new();
    tool.run()
}
