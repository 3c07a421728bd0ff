use crate::apps::{finish, StdoutSink, SubApp, ToolError};
use clap::Parser;

use std::error::Error;

use posekit::ops::OpStatus;
use posekit::ops::sync_linkages::SyncOptions;
use posekit::registry::{self, Command};
use posekit::scene::LinkageKind;
use posekit::snapshot;

#[derive(Parser, Debug)]
pub struct SyncApp {
    #[arg(help = "Path to scene snapshot (.json)", required = true)]
    pub scene_path: String,
    #[arg(long, help = "Name of the source skeleton (omit to list candidates)")]
    pub source: Option<String>,
    #[arg(long, default_value_t = LinkageKind::Rotation, help = "Linkage kind: rotation, location, scale or full")]
    pub kind: LinkageKind,
    #[arg(long, help = "Only link joints currently selected on the target")]
    pub only_selected: bool,
    #[arg(long, help = "Purge linkages from the source before linking")]
    pub clear_previous: bool,
    #[arg(long, help = "Bake the linked pose and remove the created linkages")]
    pub bake: bool,
    #[arg(long, help = "Write the updated snapshot to this path")]
    pub output: Option<String>,
}

impl SubApp for SyncApp {
    fn process(&mut self) -> Result<(), Box<dyn Error>> {
        let mut scene = snapshot::load_scene(&self.scene_path)?;

        // No source given, mirror the dialog and offer the candidates
        let Some(source) = self.source.as_deref() else {
            let target = scene.target_skeleton().map(str::to_owned);
            let candidates = registry::list_candidate_skeletons(&scene, target.as_deref());

            if candidates.is_empty() {
                return Err(Box::new(ToolError::Cancelled(String::from(
                    "No other skeletons found in the scene.",
                ))));
            }

            println!("Source skeletons: {}", candidates.join(", "));
            return Ok(());
        };

        let options = SyncOptions {
            kind: self.kind,
            only_selected: self.only_selected,
            clear_previous: self.clear_previous,
            bake_and_remove: self.bake,
        };

        let command = Command::SyncLinkages {
            source: source.to_owned(),
            options,
        };

        let mut sink = StdoutSink;
        let outcome = registry::dispatch(&mut scene, command, &mut sink);

        if outcome.status == OpStatus::Finished {
            if let Some(output) = self.output.as_deref() {
                snapshot::save_scene(&scene, output)?;
            }
        }

        finish(outcome)
    }
}
