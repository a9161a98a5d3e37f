//! Tests for TreeBuilder

use std::io::Cursor;

use rstest::rstest;

use slicefp::domain::{Extent, FloorplanError, Node, Orientation, TreeBuilder};

fn build(input: &str) -> Result<Node, FloorplanError> {
    TreeBuilder::new().build(Cursor::new(input))
}

// ============================================================
// Grammar Tests
// ============================================================

#[test]
fn given_single_module_when_building_then_returns_leaf() {
    // Arrange / Act
    let tree = build("1(3,4)\n").unwrap();

    // Assert
    assert!(matches!(
        tree,
        Node::Leaf {
            label: 1,
            size: Extent {
                width: 3,
                height: 4
            },
            origin: None,
        }
    ));
}

#[rstest]
#[case("V\n1(1,2)\n2(3,4)\n", Orientation::Vertical)]
#[case("H\n1(1,2)\n2(3,4)\n", Orientation::Horizontal)]
fn given_cut_symbol_when_building_then_orientation_parsed(
    #[case] input: &str,
    #[case] expected: Orientation,
) {
    let tree = build(input).unwrap();

    match &tree {
        Node::Cut {
            orientation,
            left,
            right,
            ..
        } => {
            assert_eq!(*orientation, expected);
            assert!(matches!(left.as_ref(), Node::Leaf { label: 1, .. }));
            assert!(matches!(right.as_ref(), Node::Leaf { label: 2, .. }));
        }
        other => panic!("Expected cut root, got {:?}", other),
    }
}

#[test]
fn given_nested_cuts_when_building_then_shape_follows_token_order() {
    // A vertical root whose left subtree is a horizontal cut of modules 1
    // and 2, and whose right subtree is module 3.
    let tree = build("V\nH\n1(2,3)\n2(4,1)\n3(5,2)\n").unwrap();

    match &tree {
        Node::Cut {
            orientation: Orientation::Vertical,
            left,
            right,
            ..
        } => {
            assert!(matches!(
                left.as_ref(),
                Node::Cut {
                    orientation: Orientation::Horizontal,
                    ..
                }
            ));
            assert!(matches!(right.as_ref(), Node::Leaf { label: 3, .. }));
            assert_eq!(left.leaf_count(), 2);
        }
        other => panic!("Expected vertical root, got {:?}", other),
    }
}

#[test]
fn given_noncontiguous_labels_when_building_then_labels_preserved() {
    let tree = build("V\n42(1,1)\n7(2,2)\n").unwrap();

    match &tree {
        Node::Cut { left, right, .. } => {
            assert!(matches!(left.as_ref(), Node::Leaf { label: 42, .. }));
            assert!(matches!(right.as_ref(), Node::Leaf { label: 7, .. }));
        }
        other => panic!("Expected cut root, got {:?}", other),
    }
}

// ============================================================
// Malformed Token Tests
// ============================================================

#[rstest]
#[case("X\n")]
#[case("1(abc,3)\n")]
#[case("1(2,3\n")]
#[case("(2,3)\n")]
#[case("1(2,3) extra\n")]
#[case("\n")]
fn given_invalid_token_when_building_then_reports_malformed(#[case] input: &str) {
    let result = build(input);

    assert!(matches!(
        result,
        Err(FloorplanError::MalformedToken { line: 1, .. })
    ));
}

#[test]
fn given_zero_dimension_when_building_then_reports_malformed() {
    let result = build("1(0,3)\n");

    assert!(matches!(
        result,
        Err(FloorplanError::MalformedToken { line: 1, .. })
    ));
}

#[test]
fn given_malformed_token_when_building_then_error_carries_offending_text() {
    let err = build("V\n1(abc,3)\n2(1,1)\n").unwrap_err();

    match err {
        FloorplanError::MalformedToken { line, token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "1(abc,3)");
        }
        other => panic!("Expected malformed token, got {:?}", other),
    }
}

// ============================================================
// Incomplete Input Tests
// ============================================================

#[test]
fn given_cut_missing_right_child_when_building_then_reports_incomplete_tree() {
    let result = build("V\n1(2,3)\n");

    assert!(matches!(
        result,
        Err(FloorplanError::IncompleteTree { line: 1 })
    ));
}

#[test]
fn given_cut_missing_both_children_when_building_then_reports_incomplete_tree() {
    let result = build("H\n");

    assert!(matches!(
        result,
        Err(FloorplanError::IncompleteTree { line: 1 })
    ));
}

#[test]
fn given_nested_cut_missing_child_when_building_then_error_names_inner_cut() {
    // The outer V gets its left subtree; the inner H at line 2 runs dry.
    let result = build("V\nH\n1(2,3)\n");

    assert!(matches!(
        result,
        Err(FloorplanError::IncompleteTree { line: 2 })
    ));
}

#[test]
fn given_empty_input_when_building_then_reports_empty_input() {
    let result = build("");

    assert!(matches!(result, Err(FloorplanError::EmptyInput)));
}

// ============================================================
// Stream Consumption Tests
// ============================================================

#[test]
fn given_trailing_tokens_when_building_then_leaves_them_unconsumed() {
    // Arrange
    let mut lines = ["1(2,3)", "V"]
        .into_iter()
        .map(|s| Ok::<_, std::io::Error>(s.to_string()));

    // Act
    let tree = TreeBuilder::new().build_from_lines(&mut lines).unwrap();

    // Assert
    assert!(matches!(tree, Node::Leaf { label: 1, .. }));
    let trailing = lines.next().expect("trailing token should remain").unwrap();
    assert_eq!(trailing, "V");
}

#[test]
fn given_reused_builder_when_building_then_line_numbers_continue() {
    let mut lines = ["1(2,3)", "2(xyz,1)"]
        .into_iter()
        .map(|s| Ok::<_, std::io::Error>(s.to_string()));
    let mut builder = TreeBuilder::new();

    builder.build_from_lines(&mut lines).unwrap();
    let err = builder.build_from_lines(&mut lines).unwrap_err();

    assert!(matches!(err, FloorplanError::MalformedToken { line: 2, .. }));
}
