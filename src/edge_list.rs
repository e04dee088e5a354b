//! Parsing for edges given on the command line: `u,v` for plain edges and
//! `u,v,w` for weighted ones.

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EdgeListError {
  #[error("malformed edge `{0}`, expected `u,v`")]
  Malformed(String),

  #[error("malformed weighted edge `{0}`, expected `u,v,w`")]
  MalformedWeighted(String),

  #[error("negative node id `{node}` in edge `{edge}`")]
  NegativeNode { node: String, edge: String },

  #[error("invalid number `{value}` in edge `{edge}`: {source}")]
  Number {
    value: String,
    edge: String,
    #[source]
    source: ParseIntError,
  },
}

fn parse_number(value: &str, edge: &str) -> Result<i64, EdgeListError> {
  value
    .trim()
    .parse()
    .map_err(|source| EdgeListError::Number {
      value: value.to_owned(),
      edge: edge.to_owned(),
      source,
    })
}

fn parse_node(value: &str, edge: &str) -> Result<usize, EdgeListError> {
  let node = parse_number(value, edge)?;
  usize::try_from(node).map_err(|_| EdgeListError::NegativeNode {
    node: value.trim().to_owned(),
    edge: edge.to_owned(),
  })
}

pub fn parse_edge(edge: &str) -> Result<(usize, usize), EdgeListError> {
  match edge.split(',').collect::<Vec<_>>()[..] {
    [u, v] => Ok((parse_node(u, edge)?, parse_node(v, edge)?)),
    _ => Err(EdgeListError::Malformed(edge.to_owned())),
  }
}

pub fn parse_weighted_edge(edge: &str) -> Result<(usize, usize, i64), EdgeListError> {
  match edge.split(',').collect::<Vec<_>>()[..] {
    [u, v, w] => Ok((
      parse_node(u, edge)?,
      parse_node(v, edge)?,
      parse_number(w, edge)?,
    )),
    _ => Err(EdgeListError::MalformedWeighted(edge.to_owned())),
  }
}

pub fn parse_edges(edges: &[String]) -> Result<Vec<(usize, usize)>, EdgeListError> {
  edges.iter().map(|edge| parse_edge(edge)).collect()
}

pub fn parse_weighted_edges(edges: &[String]) -> Result<Vec<(usize, usize, i64)>, EdgeListError> {
  edges.iter().map(|edge| parse_weighted_edge(edge)).collect()
}
