use crate::apps::{finish, StdoutSink, SubApp};
use clap::Parser;

use std::error::Error;

use posekit::registry::{self, Command};
use posekit::snapshot;

#[derive(Parser, Debug)]
pub struct CopyTransApp {
    #[arg(help = "Path to scene snapshot (.json)", required = true)]
    pub scene_path: String,
    #[arg(long, help = "Copy the rotation component instead of translation")]
    pub rotation: bool,
}

impl SubApp for CopyTransApp {
    fn process(&mut self) -> Result<(), Box<dyn Error>> {
        let mut scene = snapshot::load_scene(&self.scene_path)?;

        let command = if self.rotation {
            Command::CopyParentRotation
        } else {
            Command::CopyParentTranslation
        };

        let mut sink = StdoutSink;
        let outcome = registry::dispatch(&mut scene, command, &mut sink);

        finish(outcome)
    }
}
