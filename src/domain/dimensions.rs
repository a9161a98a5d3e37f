//! Postorder dimension pass: bottom-up extent aggregation.

use std::io::Write;

use tracing::instrument;

use crate::domain::error::FloorplanResult;
use crate::domain::node::{Extent, Node};

/// What the postorder pass writes for cut nodes. Leaves always emit their
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// Cut nodes as the bare orientation symbol.
    Skeleton,
    /// Cut nodes with their composed dimensions.
    Resolved,
}

/// Computes the bounding extent of every internal region and writes one
/// record per node in postorder.
///
/// Cut extents are stored on the nodes in both modes; only the emitted text
/// differs, and `Skeleton` output never reads the computed values.
pub struct DimensionResolver<'a, W: Write> {
    mode: EmitMode,
    sink: &'a mut W,
}

impl<'a, W: Write> DimensionResolver<'a, W> {
    pub fn new(mode: EmitMode, sink: &'a mut W) -> Self {
        Self { mode, sink }
    }

    #[instrument(level = "debug", skip(self, root))]
    pub fn resolve(&mut self, root: &mut Node) -> FloorplanResult<()> {
        self.visit(root)?;
        Ok(())
    }

    /// Visit children, then the node itself; returns the node's extent so a
    /// parent never sees an unresolved child.
    fn visit(&mut self, node: &mut Node) -> FloorplanResult<Extent> {
        match node {
            Node::Leaf { label, size, .. } => {
                writeln!(self.sink, "{label}{size}")?;
                Ok(*size)
            }
            Node::Cut {
                orientation,
                size,
                left,
                right,
                ..
            } => {
                let left_size = self.visit(left)?;
                let right_size = self.visit(right)?;
                let composed = orientation.compose(left_size, right_size);
                *size = Some(composed);
                match self.mode {
                    EmitMode::Skeleton => writeln!(self.sink, "{orientation}")?,
                    EmitMode::Resolved => writeln!(self.sink, "{orientation}{composed}")?,
                }
                Ok(composed)
            }
        }
    }
}
