//! Preorder placement pass: top-down origin assignment.

use std::io::Write;

use tracing::instrument;

use crate::domain::error::{FloorplanError, FloorplanResult};
use crate::domain::node::{Node, Orientation, Point};

/// Assigns an absolute origin to every node from the root down and writes
/// one record per leaf module, in preorder.
///
/// Every subtree extent must already be resolved; placement reaching an
/// unresolved cut is an error, not stale geometry.
pub struct CoordinatePlacer<'a, W: Write> {
    sink: &'a mut W,
}

impl<'a, W: Write> CoordinatePlacer<'a, W> {
    pub fn new(sink: &'a mut W) -> Self {
        Self { sink }
    }

    /// Place the whole tree with the root seeded at (0,0).
    #[instrument(level = "debug", skip(self, root))]
    pub fn place(&mut self, root: &mut Node) -> FloorplanResult<()> {
        self.visit(root, Point::ZERO)
    }

    fn visit(&mut self, node: &mut Node, at: Point) -> FloorplanResult<()> {
        match node {
            Node::Leaf {
                label,
                size,
                origin,
            } => {
                *origin = Some(at);
                writeln!(self.sink, "{label}({size}{at})")?;
                Ok(())
            }
            Node::Cut {
                orientation,
                origin,
                left,
                right,
                ..
            } => {
                *origin = Some(at);
                let left_size = left.size().ok_or(FloorplanError::UnresolvedDimensions)?;
                let right_size = right.size().ok_or(FloorplanError::UnresolvedDimensions)?;

                // The offset child differs per orientation: a horizontal cut
                // puts the right child in the lower band and lifts the left
                // child by the right child's height; a vertical cut keeps the
                // left child at the origin and shifts the right child by the
                // left child's width.
                let (left_at, right_at) = match orientation {
                    Orientation::Horizontal => (
                        Point::new(at.x, at.y + right_size.height),
                        Point::new(at.x, at.y),
                    ),
                    Orientation::Vertical => (
                        Point::new(at.x, at.y),
                        Point::new(at.x + left_size.width, at.y),
                    ),
                };

                self.visit(left, left_at)?;
                self.visit(right, right_at)
            }
        }
    }
}
