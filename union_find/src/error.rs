use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum UnionFindError {
  #[error("index {index} out of range for {len} elements")]
  InvalidIndex { index: usize, len: usize },
}

pub type UnionFindResult<T = ()> = Result<T, UnionFindError>;
