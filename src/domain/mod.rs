//! Domain layer: the slicing tree and its traversal passes
//!
//! This layer has no terminal or filesystem concerns; callers hand it token
//! streams and record sinks.

pub mod builder;
pub mod dimensions;
pub mod error;
pub mod node;
pub mod placement;
pub mod render;

pub use builder::TreeBuilder;
pub use dimensions::{DimensionResolver, EmitMode};
pub use error::{FloorplanError, FloorplanResult};
pub use node::{Extent, Node, Orientation, Point};
pub use placement::CoordinatePlacer;
pub use render::to_display_tree;
