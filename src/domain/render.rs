//! ASCII hierarchy display for the `tree` subcommand.

use termtree::Tree;

use crate::domain::node::Node;

/// Convert a floorplan tree into a printable hierarchy. Cut regions show
/// their composed extent once resolved, otherwise the bare symbol.
pub fn to_display_tree(node: &Node) -> Tree<String> {
    match node {
        Node::Leaf { label, size, .. } => Tree::new(format!("{label}{size}")),
        Node::Cut {
            orientation,
            size,
            left,
            right,
            ..
        } => {
            let text = match size {
                Some(extent) => format!("{orientation}{extent}"),
                None => orientation.to_string(),
            };
            Tree::new(text).with_leaves([to_display_tree(left), to_display_tree(right)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::{Extent, Orientation};

    #[test]
    fn given_resolved_tree_when_rendered_then_every_node_appears_once() {
        let mut tree = Node::cut(
            Orientation::Vertical,
            Node::leaf(1, Extent::new(2, 3)),
            Node::leaf(2, Extent::new(4, 1)),
        );
        if let Node::Cut { size, .. } = &mut tree {
            *size = Some(Extent::new(6, 3));
        }

        let rendered = to_display_tree(&tree).to_string();

        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("V(6,3)"));
        assert!(rendered.contains("1(2,3)"));
        assert!(rendered.contains("2(4,1)"));
    }

    #[test]
    fn given_unresolved_cut_when_rendered_then_shows_bare_symbol() {
        let tree = Node::cut(
            Orientation::Horizontal,
            Node::leaf(1, Extent::new(1, 1)),
            Node::leaf(2, Extent::new(1, 1)),
        );

        let rendered = to_display_tree(&tree).to_string();

        assert!(rendered.lines().next().unwrap().ends_with('H'));
    }
}
