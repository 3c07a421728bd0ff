use clap::{Parser, Subcommand};
use std::error::Error;
use thiserror::Error as ThisError;

use posekit::ops::{OpStatus, Outcome, TextSink};

mod copy_trans;
mod sync;
use self::copy_trans::*;
use self::sync::*;

// From Cargo.toml
const PKG_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) trait SubApp {
    fn process(&mut self) -> Result<(), Box<dyn Error>>;
}

#[derive(Debug, ThisError)]
pub(crate) enum ToolError {
    #[error("{0}")]
    Cancelled(String),
}

// Clipboard stand-in
pub(crate) struct StdoutSink;

impl TextSink for StdoutSink {
    fn write_text(&mut self, text: &str) {
        println!("{text}");
    }
}

pub(crate) fn finish(outcome: Outcome) -> Result<(), Box<dyn Error>> {
    match outcome.status {
        OpStatus::Finished => {
            log::info!("{}", outcome.message);
            Ok(())
        },
        OpStatus::Cancelled => Err(Box::new(ToolError::Cancelled(outcome.message))),
    }
}

#[derive(Parser, Debug)]
#[command(name = PKG_NAME, version = VERSION, about = "Pose commands for skeleton snapshots")]
struct Options {
    #[command(subcommand)]
    commands: SubCommand,
}

#[derive(Subcommand, Debug)]
enum SubCommand {
    #[command(name = "copy-trans", about = "Copy the active joint's parent-space transform")]
    CopyTrans(CopyTransApp),
    #[command(name = "sync", about = "Sync linkages from another skeleton by joint name")]
    Sync(SyncApp),
}

#[derive(Debug)]
pub struct PoseTool {
    options: Options,
}

impl PoseTool {
    pub fn new() -> PoseTool {
        PoseTool {
            options: Options::parse()
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        match &mut self.options.commands {
            SubCommand::CopyTrans(app) => app.process(),
            SubCommand::Sync(app) => app.process()
        }
    }
}
