mod joint;
mod mesh;
mod skeleton;
pub mod transform;

pub use joint::*;
pub use mesh::*;
pub use skeleton::*;

#[cfg(feature = "snapshot")] use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub enum InteractionMode {
    #[default]
    Object,
    Pose,
    WeightPaint,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub enum SceneObject {
    Skeleton(Skeleton),
    Mesh(Mesh),
}

impl SceneObject {
    pub fn name(&self) -> &str {
        match self {
            SceneObject::Skeleton(skeleton) => &skeleton.name,
            SceneObject::Mesh(mesh) => &mesh.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub struct Scene {
    #[cfg_attr(feature = "snapshot", serde(default))]
    pub objects: Vec<SceneObject>,
    #[cfg_attr(feature = "snapshot", serde(default))]
    pub active: Option<String>,
    #[cfg_attr(feature = "snapshot", serde(default))]
    pub mode: InteractionMode,
}

impl Scene {
    pub fn skeletons(&self) -> impl Iterator<Item = &Skeleton> {
        self.objects.iter().filter_map(|o| match o {
            SceneObject::Skeleton(skeleton) => Some(skeleton),
            _ => None,
        })
    }

    pub fn skeleton(&self, name: &str) -> Option<&Skeleton> {
        self.skeletons().find(|s| s.name == name)
    }

    pub fn skeleton_mut(&mut self, name: &str) -> Option<&mut Skeleton> {
        self.objects.iter_mut().find_map(|o| match o {
            SceneObject::Skeleton(skeleton) if skeleton.name == name => Some(skeleton),
            _ => None,
        })
    }

    pub fn active_object(&self) -> Option<&SceneObject> {
        self.active
            .as_deref()
            .and_then(|name| self.objects.iter().find(|o| o.name() == name))
    }

    /// Skeleton the pose commands act on: the active skeleton while posing,
    /// or the deform skeleton of the active mesh while weight painting.
    pub fn target_skeleton(&self) -> Option<&str> {
        match (self.mode, self.active_object()?) {
            (InteractionMode::Pose, SceneObject::Skeleton(skeleton)) => Some(skeleton.name.as_str()),
            (InteractionMode::WeightPaint, SceneObject::Mesh(mesh)) => {
                let name = mesh.skeleton.as_deref()?;
                self.skeleton(name).map(|s| s.name.as_str())
            },
            _ => None,
        }
    }
}

impl Default for Scene {
    fn default() -> Scene {
        Scene {
            objects: Vec::new(),
            active: None,
            mode: InteractionMode::Object,
        }
    }
}
