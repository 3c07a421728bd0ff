#[cfg(feature = "snapshot")] use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub struct Mesh {
    pub name: String,
    // Deform skeleton, when the mesh is rigged to one
    #[cfg_attr(feature = "snapshot", serde(default))]
    pub skeleton: Option<String>,
}
