#[cfg(feature = "snapshot")] use serde::{Deserialize, Serialize};

use crate::scene::Joint;
use crate::scene::transform::Mat4;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub struct Skeleton {
    pub name: String,
    #[cfg_attr(feature = "snapshot", serde(default))]
    pub joints: Vec<Joint>,
    #[cfg_attr(feature = "snapshot", serde(default))]
    pub active_joint: Option<String>,
}

impl Skeleton {
    pub fn joint(&self, name: &str) -> Option<&Joint> {
        self.joints.iter().find(|j| j.name == name)
    }

    pub fn joint_mut(&mut self, name: &str) -> Option<&mut Joint> {
        self.joints.iter_mut().find(|j| j.name == name)
    }

    pub fn active_joint(&self) -> Option<&Joint> {
        self.active_joint
            .as_deref()
            .and_then(|name| self.joint(name))
    }

    /// Evaluated transform of a joint's parent, if it has one that resolves.
    pub fn parent_matrix(&self, joint: &Joint) -> Option<Mat4> {
        joint
            .parent
            .as_deref()
            .and_then(|name| self.joint(name))
            .map(|parent| parent.matrix)
    }
}
