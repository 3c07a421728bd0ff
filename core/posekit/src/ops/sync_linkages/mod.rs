use thiserror::Error as ThisError;

use crate::ops::Outcome;
use crate::scene::{Joint, Linkage, LinkageKind, Scene};
use crate::scene::transform::Mat4;

#[derive(Debug, ThisError)]
pub enum SyncLinkagesError {
    #[error("Requires a source and target skeleton that are distinct")]
    MissingArmature,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SyncOptions {
    pub kind: LinkageKind,
    pub only_selected: bool,
    pub clear_previous: bool,
    pub bake_and_remove: bool,
}

pub fn poll(scene: &Scene) -> bool {
    scene.target_skeleton().is_some()
}

/// Create one linkage per matching joint name from the source skeleton onto
/// the command target, optionally baking the linked pose and removing the
/// linkages again.
pub fn sync_linkages(
    scene: &mut Scene,
    source: &str,
    options: SyncOptions,
) -> Result<Outcome, SyncLinkagesError> {
    let target_name = scene
        .target_skeleton()
        .ok_or(SyncLinkagesError::MissingArmature)?
        .to_owned();

    if source == target_name {
        return Err(SyncLinkagesError::MissingArmature);
    }

    let source_joints = scene
        .skeleton(source)
        .ok_or(SyncLinkagesError::MissingArmature)?
        .joints
        .iter()
        .map(|j| j.name.to_owned())
        .collect::<Vec<_>>();

    let Some(target) = scene.skeleton_mut(&target_name) else {
        return Err(SyncLinkagesError::MissingArmature);
    };

    // Joints the command acts on, before any mutation
    let target_set = target
        .joints
        .iter()
        .enumerate()
        .filter_map(|(i, j)| (!options.only_selected || j.selected).then_some(i))
        .collect::<Vec<_>>();

    if options.clear_previous {
        for index in target_set.iter() {
            target.joints[*index].remove_linkages_from(source);
        }
    }

    // Link every target-set joint whose name also exists on the source
    let mut created: Vec<(String, Linkage)> = Vec::new();

    for source_joint in source_joints.iter() {
        let matched = target_set
            .iter()
            .find(|i| target.joints[**i].name == *source_joint);

        let Some(index) = matched else {
            continue;
        };

        let joint = &mut target.joints[*index];
        joint.remove_linkage(options.kind, source);

        let linkage = Linkage {
            kind: options.kind,
            source_skeleton: source.to_owned(),
            source_joint: source_joint.to_owned(),
        };

        joint.linkages.push(linkage.clone());
        created.push((joint.name.to_owned(), linkage));
    }

    if created.is_empty() {
        log::warn!("No joint names matched between \"{source}\" and \"{target_name}\"");
    } else {
        log::info!(
            "Created {} linkage(s) from \"{source}\" onto \"{target_name}\"",
            created.len()
        );
    }

    if options.bake_and_remove {
        bake_and_remove(scene, &target_name, &created);
        return Ok(Outcome::finished(String::from(
            "Visual transform baked, linkages removed.",
        )));
    }

    Ok(Outcome::finished(format!("{} linkages applied.", options.kind)))
}

/// Write each joint's linked pose into its rest transform, then drop exactly
/// the linkages recorded during creation.
fn bake_and_remove(scene: &mut Scene, target_name: &str, created: &[(String, Linkage)]) {
    let baked = match scene.skeleton(target_name) {
        Some(target) => target
            .joints
            .iter()
            .map(|j| linked_matrix(scene, j))
            .collect::<Vec<_>>(),
        None => return,
    };

    let Some(target) = scene.skeleton_mut(target_name) else {
        return;
    };

    for (joint, matrix) in target.joints.iter_mut().zip(baked) {
        joint.matrix = matrix;
        joint.rest = matrix;
    }

    for (joint_name, linkage) in created.iter() {
        if let Some(joint) = target.joint_mut(joint_name) {
            joint.linkages.retain(|l| l != linkage);
        }
    }
}

/// Joint pose with its linkages applied in order, skipping any whose source
/// no longer resolves.
fn linked_matrix(scene: &Scene, joint: &Joint) -> Mat4 {
    joint.linkages.iter().fold(joint.matrix, |matrix, linkage| {
        let source = scene
            .skeleton(&linkage.source_skeleton)
            .and_then(|s| s.joint(&linkage.source_joint));

        match source {
            Some(source) => linkage.kind.apply(&matrix, &source.matrix),
            None => matrix,
        }
    })
}

/// Skeletons a dialog can offer as linkage sources. Evaluated on demand,
/// never cached.
pub fn list_candidate_skeletons(scene: &Scene, excluding: Option<&str>) -> Vec<String> {
    scene
        .skeletons()
        .filter(|s| excluding != Some(s.name.as_str()))
        .map(|s| s.name.to_owned())
        .collect()
}
