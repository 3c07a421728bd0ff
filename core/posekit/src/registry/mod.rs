use std::sync::Mutex;

use lazy_static::lazy_static;
use thiserror::Error as ThisError;

use crate::ops::{copy_transform, sync_linkages, Outcome, TextSink};
use crate::ops::copy_transform::TransformComponent;
use crate::ops::sync_linkages::SyncOptions;
use crate::scene::Scene;

// Source-skeleton dialog population
pub use crate::ops::sync_linkages::list_candidate_skeletons;

pub const COPY_PARENT_TRANSLATION: &str = "pose.copy_parent_translation";
pub const COPY_PARENT_ROTATION: &str = "pose.copy_parent_rotation";
pub const SYNC_LINKAGES: &str = "pose.sync_linkages";

pub struct CommandSpec {
    pub name: &'static str,
    pub label: &'static str,
}

// Context menu order
pub static MENU: [CommandSpec; 3] = [
    CommandSpec { name: COPY_PARENT_TRANSLATION, label: "Copy Parent Translation" },
    CommandSpec { name: COPY_PARENT_ROTATION, label: "Copy Parent Rotation" },
    CommandSpec { name: SYNC_LINKAGES, label: "Sync Linkages From Other Skeleton" },
];

pub fn find(name: &str) -> Option<&'static CommandSpec> {
    MENU.iter().find(|spec| spec.name == name)
}

#[derive(Clone, Debug)]
pub enum Command {
    CopyParentTranslation,
    CopyParentRotation,
    SyncLinkages { source: String, options: SyncOptions },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CopyParentTranslation => COPY_PARENT_TRANSLATION,
            Command::CopyParentRotation => COPY_PARENT_ROTATION,
            Command::SyncLinkages { .. } => SYNC_LINKAGES,
        }
    }
}

/// Whether the named command is available in the current context.
pub fn poll(scene: &Scene, name: &str) -> bool {
    match name {
        COPY_PARENT_TRANSLATION | COPY_PARENT_ROTATION => copy_transform::poll(scene),
        SYNC_LINKAGES => sync_linkages::poll(scene),
        _ => false,
    }
}

/// Run a command to completion, mapping its error onto a cancelled outcome.
pub fn dispatch(scene: &mut Scene, command: Command, sink: &mut dyn TextSink) -> Outcome {
    let result = match command {
        Command::CopyParentTranslation => {
            copy_transform::copy_transform(scene, TransformComponent::Translation, sink)
                .map_err(|e| e.to_string())
        },
        Command::CopyParentRotation => {
            copy_transform::copy_transform(scene, TransformComponent::Rotation, sink)
                .map_err(|e| e.to_string())
        },
        Command::SyncLinkages { source, options } => {
            sync_linkages::sync_linkages(scene, &source, options).map_err(|e| e.to_string())
        },
    };

    match result {
        Ok(outcome) => outcome,
        Err(message) => {
            log::error!("{message}");
            Outcome::cancelled(message)
        },
    }
}

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("Command set is already registered")]
    AlreadyRegistered,
    #[error("Command set is not registered")]
    NotRegistered,
}

lazy_static! {
    static ref REGISTERED: Mutex<bool> = Mutex::new(false);
}

fn registered_flag() -> std::sync::MutexGuard<'static, bool> {
    REGISTERED.lock().unwrap_or_else(|e| e.into_inner())
}

pub fn is_registered() -> bool {
    *registered_flag()
}

/// Hook the command set into the host. The host owns menu drawing; this side
/// only tracks the registration flag.
pub fn register() -> Result<(), RegistryError> {
    let mut registered = registered_flag();

    if *registered {
        return Err(RegistryError::AlreadyRegistered);
    }

    *registered = true;
    log::info!("Registered {} pose commands", MENU.len());

    Ok(())
}

pub fn unregister() -> Result<(), RegistryError> {
    let mut registered = registered_flag();

    if !*registered {
        return Err(RegistryError::NotRegistered);
    }

    *registered = false;
    log::info!("Unregistered pose commands");

    Ok(())
}
