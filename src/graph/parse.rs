// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parser for the textual edge-list format.
//!
//! A graph is written as `;`-separated edges, each a `,`-separated pair of
//! vertex labels, e.g. `a,b;b,c;c,d;a,d` for a 4-cycle. Edges are added in
//! left-to-right order with endpoints in the order given.

use std::str::FromStr;

use thiserror::Error;

use crate::graph::Graph;

/// Errors reported while parsing an edge list.
///
/// `index` is the zero-based position of the offending `;`-separated segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("edge {index} is empty")]
    EmptySegment { index: usize },

    #[error("edge {index} ({segment:?}) has only one endpoint")]
    MissingEndpoint { index: usize, segment: String },

    #[error("edge {index} ({segment:?}) has more than two endpoints")]
    TooManyEndpoints { index: usize, segment: String },

    #[error("edge {index} ({segment:?}) has an empty vertex label")]
    EmptyVertex { index: usize, segment: String },
}

impl FromStr for Graph {
    type Err = ParseError;

    /// Parse an edge list. Blank input gives an empty graph.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut graph = Graph::new();
        if s.trim().is_empty() {
            return Ok(graph);
        }

        for (index, segment) in s.split(';').enumerate() {
            let (a, b) = parse_edge(index, segment)?;
            graph.add_edge(a, b);
        }
        Ok(graph)
    }
}

fn parse_edge(index: usize, segment: &str) -> Result<(&str, &str), ParseError> {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptySegment { index });
    }

    let mut parts = trimmed.split(',').map(str::trim);
    let a = parts.next().unwrap_or_default();
    let b = parts.next().ok_or_else(|| ParseError::MissingEndpoint {
        index,
        segment: trimmed.to_owned(),
    })?;
    if parts.next().is_some() {
        return Err(ParseError::TooManyEndpoints {
            index,
            segment: trimmed.to_owned(),
        });
    }
    if a.is_empty() || b.is_empty() {
        return Err(ParseError::EmptyVertex {
            index,
            segment: trimmed.to_owned(),
        });
    }
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_edges() {
        let g: Graph = "a,b;c,d".parse().unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edge_labels(&g.edge(0)), ("a", "b"));
        assert_eq!(g.edge_labels(&g.edge(1)), ("c", "d"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let g: Graph = " a , b ; b,c ".parse().unwrap();
        assert_eq!(g.edge_labels(&g.edge(0)), ("a", "b"));
        assert_eq!(g.edge_labels(&g.edge(1)), ("b", "c"));
    }

    #[test]
    fn test_parse_blank_is_empty_graph() {
        let g: Graph = "  ".parse().unwrap();
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "a,b;".parse::<Graph>(),
            Err(ParseError::EmptySegment { index: 1 })
        );
        assert_eq!(
            "a".parse::<Graph>(),
            Err(ParseError::MissingEndpoint {
                index: 0,
                segment: "a".into()
            })
        );
        assert_eq!(
            "a,b,c".parse::<Graph>(),
            Err(ParseError::TooManyEndpoints {
                index: 0,
                segment: "a,b,c".into()
            })
        );
        assert_eq!(
            "a,".parse::<Graph>(),
            Err(ParseError::EmptyVertex {
                index: 0,
                segment: "a,".into()
            })
        );
    }

    #[test]
    fn test_error_message() {
        let err = "a,b;x".parse::<Graph>().unwrap_err();
        assert_eq!(err.to_string(), "edge 1 (\"x\") has only one endpoint");
    }
}
