mod error;
mod graph;
mod merge_policy;
mod mst;
mod union_find;

pub use error::*;
pub use graph::*;
pub use merge_policy::*;
pub use mst::*;
pub use union_find::*;
