use thiserror::Error as ThisError;

use crate::ops::{Outcome, TextSink};
use crate::scene::{Joint, Scene, Skeleton};
use crate::scene::transform;

#[derive(Debug, ThisError)]
pub enum CopyTransformError {
    #[error("No active joint on the target skeleton")]
    NoActiveJoint,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransformComponent {
    #[default]
    Translation,
    Rotation,
}

impl TransformComponent {
    pub fn label(&self) -> &'static str {
        match self {
            TransformComponent::Translation => "Translation",
            TransformComponent::Rotation => "Rotation",
        }
    }
}

pub fn poll(scene: &Scene) -> bool {
    active_joint(scene).is_some()
}

fn active_joint(scene: &Scene) -> Option<(&Skeleton, &Joint)> {
    let skeleton = scene
        .target_skeleton()
        .and_then(|name| scene.skeleton(name))?;

    skeleton.active_joint().map(|joint| (skeleton, joint))
}

/// Write the active joint's parent-space translation or rotation to the sink.
pub fn copy_transform(
    scene: &Scene,
    component: TransformComponent,
    sink: &mut dyn TextSink,
) -> Result<Outcome, CopyTransformError> {
    let (skeleton, joint) = active_joint(scene).ok_or(CopyTransformError::NoActiveJoint)?;

    let parent = skeleton.parent_matrix(joint);
    let local = transform::parent_local(parent.as_ref(), &joint.matrix);

    let values = match component {
        TransformComponent::Translation => transform::translation_part(&local),
        TransformComponent::Rotation => transform::euler_degrees(&local),
    };

    let text = transform::format_components(&values);
    sink.write_text(&text);

    let label = component.label();
    log::info!("Copied {label} of joint \"{}\"", joint.name);

    Ok(Outcome::finished(format!("{label}: {text}")))
}

#[cfg(test)]
mod tests {
    use rstest::*;
    use super::*;

    use nalgebra::{Rotation3, Translation3};
    use crate::ops::OpStatus;
    use crate::scene::{InteractionMode, Mesh, SceneObject};
    use crate::scene::transform::Mat4;

    fn pose_scene(joints: Vec<Joint>, active_joint: Option<&str>) -> Scene {
        Scene {
            objects: vec![SceneObject::Skeleton(Skeleton {
                name: String::from("rig"),
                joints,
                active_joint: active_joint.map(str::to_owned),
            })],
            active: Some(String::from("rig")),
            mode: InteractionMode::Pose,
        }
    }

    #[rstest]
    fn missing_active_joint_cancels_without_writing() {
        let scene = pose_scene(vec![Joint { name: String::from("hip"), ..Default::default() }], None);
        let mut sink = String::new();

        let result = copy_transform(&scene, TransformComponent::Translation, &mut sink);

        assert!(matches!(result, Err(CopyTransformError::NoActiveJoint)));
        assert!(sink.is_empty());
    }

    #[rstest]
    fn rootless_joint_reports_its_own_translation() {
        let joint = Joint {
            name: String::from("hip"),
            matrix: Translation3::new(1.25, -0.5, 2.0).to_homogeneous(),
            ..Default::default()
        };
        let scene = pose_scene(vec![joint], Some("hip"));
        let mut sink = String::new();

        let outcome = copy_transform(&scene, TransformComponent::Translation, &mut sink).unwrap();

        assert_eq!(sink, "1.25 -0.5 2");
        assert_eq!(outcome.status, OpStatus::Finished);
        assert_eq!(outcome.message, "Translation: 1.25 -0.5 2");
    }

    #[rstest]
    fn identity_parent_leaves_the_joint_transform_untouched() {
        let parent = Joint { name: String::from("hip"), ..Default::default() };
        let child = Joint {
            name: String::from("spine"),
            parent: Some(String::from("hip")),
            matrix: Translation3::new(0.0, 3.5, 0.0).to_homogeneous(),
            ..Default::default()
        };
        let scene = pose_scene(vec![parent, child], Some("spine"));
        let mut sink = String::new();

        copy_transform(&scene, TransformComponent::Translation, &mut sink).unwrap();

        assert_eq!(sink, "0 3.5 0");
    }

    #[rstest]
    fn translation_is_expressed_in_parent_space() {
        let parent = Joint {
            name: String::from("hip"),
            matrix: Translation3::new(10.0, 20.0, 30.0).to_homogeneous(),
            ..Default::default()
        };
        let child = Joint {
            name: String::from("spine"),
            parent: Some(String::from("hip")),
            matrix: Translation3::new(10.0, 21.5, 29.0).to_homogeneous(),
            ..Default::default()
        };
        let scene = pose_scene(vec![parent, child], Some("spine"));
        let mut sink = String::new();

        copy_transform(&scene, TransformComponent::Translation, &mut sink).unwrap();

        assert_eq!(sink, "0 1.5 -1");
    }

    #[rstest]
    fn rotation_is_reported_in_degrees() {
        let parent = Joint {
            name: String::from("hip"),
            matrix: Rotation3::from_euler_angles(0.0, 0.0, 45f64.to_radians()).to_homogeneous(),
            ..Default::default()
        };
        let child = Joint {
            name: String::from("spine"),
            parent: Some(String::from("hip")),
            matrix: Rotation3::from_euler_angles(0.0, 0.0, 75f64.to_radians()).to_homogeneous(),
            ..Default::default()
        };
        let scene = pose_scene(vec![parent, child], Some("spine"));
        let mut sink = String::new();

        let outcome = copy_transform(&scene, TransformComponent::Rotation, &mut sink).unwrap();

        assert_eq!(sink, "0 0 30");
        assert_eq!(outcome.message, "Rotation: 0 0 30");
    }

    #[rstest]
    fn singular_parent_matrix_falls_back_to_identity() {
        let parent = Joint {
            name: String::from("hip"),
            matrix: Mat4::zeros(),
            ..Default::default()
        };
        let child = Joint {
            name: String::from("spine"),
            parent: Some(String::from("hip")),
            matrix: Translation3::new(2.0, 0.0, 0.0).to_homogeneous(),
            ..Default::default()
        };
        let scene = pose_scene(vec![parent, child], Some("spine"));
        let mut sink = String::new();

        copy_transform(&scene, TransformComponent::Translation, &mut sink).unwrap();

        assert_eq!(sink, "2 0 0");
    }

    #[rstest]
    fn poll_requires_a_target_with_an_active_joint() {
        let mut scene = pose_scene(vec![Joint { name: String::from("hip"), ..Default::default() }], Some("hip"));
        assert!(poll(&scene));

        scene.mode = InteractionMode::Object;
        assert!(!poll(&scene));
    }

    #[rstest]
    fn poll_accepts_weight_paint_mode_with_a_rigged_mesh() {
        let scene = Scene {
            objects: vec![
                SceneObject::Skeleton(Skeleton {
                    name: String::from("rig"),
                    joints: vec![Joint { name: String::from("hip"), ..Default::default() }],
                    active_joint: Some(String::from("hip")),
                }),
                SceneObject::Mesh(Mesh {
                    name: String::from("body"),
                    skeleton: Some(String::from("rig")),
                }),
            ],
            active: Some(String::from("body")),
            mode: InteractionMode::WeightPaint,
        };

        assert!(poll(&scene));
    }
}
