//! Tree builder: recursive descent over the preorder token stream.

use std::io::BufRead;

use regex::Regex;
use tracing::instrument;

use crate::domain::error::{FloorplanError, FloorplanResult};
use crate::domain::node::{Extent, Node, Orientation};

/// One classified input line.
#[derive(Debug, PartialEq, Eq)]
enum Token {
    Cut(Orientation),
    Module { label: u64, size: Extent },
}

/// Builds a slicing tree from a token stream, one token per line.
///
/// The stream encodes the tree in preorder: a cut token is followed
/// immediately by its left subtree, then its right subtree. A module token
/// is a complete subtree on its own.
pub struct TreeBuilder {
    module_regex: Regex,
    line_no: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            module_regex: Regex::new(r"^(\d+)\((\d+),(\d+)\)$").unwrap(),
            line_no: 0,
        }
    }

    /// Build a tree from a buffered reader.
    #[instrument(level = "debug", skip(self, reader))]
    pub fn build<R: BufRead>(&mut self, reader: R) -> FloorplanResult<Node> {
        self.build_from_lines(&mut reader.lines())
    }

    /// Build a tree from a line iterator. Lines after the completed tree are
    /// left unconsumed; line numbers continue across calls, so repeated
    /// builds over one stream keep accurate diagnostics.
    pub fn build_from_lines<I>(&mut self, lines: &mut I) -> FloorplanResult<Node>
    where
        I: Iterator<Item = std::io::Result<String>>,
    {
        match self.next_subtree(lines)? {
            Some(root) => Ok(root),
            None => Err(FloorplanError::EmptyInput),
        }
    }

    /// Read one token and construct the subtree it starts. `None` means the
    /// stream was exhausted where a subtree could have begun.
    fn next_subtree<I>(&mut self, lines: &mut I) -> FloorplanResult<Option<Node>>
    where
        I: Iterator<Item = std::io::Result<String>>,
    {
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        self.line_no += 1;

        match self.classify(line.trim())? {
            Token::Cut(orientation) => {
                let cut_line = self.line_no;
                let left = self
                    .next_subtree(lines)?
                    .ok_or(FloorplanError::IncompleteTree { line: cut_line })?;
                let right = self
                    .next_subtree(lines)?
                    .ok_or(FloorplanError::IncompleteTree { line: cut_line })?;
                Ok(Some(Node::cut(orientation, left, right)))
            }
            Token::Module { label, size } => Ok(Some(Node::leaf(label, size))),
        }
    }

    fn classify(&self, line: &str) -> FloorplanResult<Token> {
        if let Some(orientation) = Orientation::from_symbol(line) {
            return Ok(Token::Cut(orientation));
        }

        let caps = self
            .module_regex
            .captures(line)
            .ok_or_else(|| self.malformed(line))?;
        let label = caps[1].parse().map_err(|_| self.malformed(line))?;
        let width: u64 = caps[2].parse().map_err(|_| self.malformed(line))?;
        let height: u64 = caps[3].parse().map_err(|_| self.malformed(line))?;
        if width == 0 || height == 0 {
            return Err(self.malformed(line));
        }

        Ok(Token::Module {
            label,
            size: Extent::new(width, height),
        })
    }

    fn malformed(&self, token: &str) -> FloorplanError {
        FloorplanError::MalformedToken {
            line: self.line_no,
            token: token.to_string(),
        }
    }
}
