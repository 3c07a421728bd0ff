use std::fmt;
use std::str::FromStr;

#[cfg(feature = "snapshot")] use serde::{Deserialize, Serialize};

use crate::scene::transform::{self, Mat4};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub enum LinkageKind {
    #[default]
    Rotation,
    Location,
    Scale,
    Full,
}

impl LinkageKind {
    pub const ALL: [LinkageKind; 4] = [
        LinkageKind::Rotation,
        LinkageKind::Location,
        LinkageKind::Scale,
        LinkageKind::Full,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LinkageKind::Rotation => "Rotation",
            LinkageKind::Location => "Location",
            LinkageKind::Scale => "Scale",
            LinkageKind::Full => "Full",
        }
    }

    /// Derive a joint pose from a source pose per linkage kind.
    pub fn apply(&self, target: &Mat4, source: &Mat4) -> Mat4 {
        match self {
            LinkageKind::Full => *source,
            LinkageKind::Location => {
                let mut matrix = *target;
                let [x, y, z] = transform::translation_part(source);
                matrix[(0, 3)] = x;
                matrix[(1, 3)] = y;
                matrix[(2, 3)] = z;
                matrix
            },
            LinkageKind::Rotation => transform::compose_trs(
                &transform::translation_part(target),
                &transform::rotation_part(source),
                &transform::scale_part(target),
            ),
            LinkageKind::Scale => transform::compose_trs(
                &transform::translation_part(target),
                &transform::rotation_part(target),
                &transform::scale_part(source),
            ),
        }
    }
}

impl fmt::Display for LinkageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LinkageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<LinkageKind, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rotation" => Ok(LinkageKind::Rotation),
            "location" => Ok(LinkageKind::Location),
            "scale" => Ok(LinkageKind::Scale),
            "full" => Ok(LinkageKind::Full),
            _ => Err(format!("Unknown linkage kind \"{s}\"")),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub struct Linkage {
    pub kind: LinkageKind,
    pub source_skeleton: String,
    pub source_joint: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub struct Joint {
    pub name: String,
    #[cfg_attr(feature = "snapshot", serde(default))]
    pub parent: Option<String>,
    #[cfg_attr(feature = "snapshot", serde(default = "Mat4::identity"))]
    pub matrix: Mat4,
    #[cfg_attr(feature = "snapshot", serde(default = "Mat4::identity"))]
    pub rest: Mat4,
    #[cfg_attr(feature = "snapshot", serde(default))]
    pub selected: bool,
    #[cfg_attr(feature = "snapshot", serde(default))]
    pub linkages: Vec<Linkage>,
}

impl Joint {
    pub fn linkage_count(&self, kind: LinkageKind, source_skeleton: &str) -> usize {
        self.linkages
            .iter()
            .filter(|l| l.kind == kind && l.source_skeleton == source_skeleton)
            .count()
    }

    /// Drop every linkage of any recognized kind sourced from the given skeleton.
    pub fn remove_linkages_from(&mut self, source_skeleton: &str) {
        self.linkages.retain(|l| l.source_skeleton != source_skeleton);
    }

    /// Drop linkages of one kind from one source. Idempotence guard for re-linking.
    pub fn remove_linkage(&mut self, kind: LinkageKind, source_skeleton: &str) {
        self.linkages
            .retain(|l| !(l.kind == kind && l.source_skeleton == source_skeleton));
    }
}

impl Default for Joint {
    fn default() -> Joint {
        Joint {
            name: String::default(),
            parent: None,
            matrix: Mat4::identity(),
            rest: Mat4::identity(),
            selected: false,
            linkages: Vec::new(),
        }
    }
}
