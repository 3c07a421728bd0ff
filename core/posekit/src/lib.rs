pub mod ops;
pub mod registry;
pub mod scene;
#[cfg(feature = "snapshot")] pub mod snapshot;

pub use scene::transform::Mat4;
