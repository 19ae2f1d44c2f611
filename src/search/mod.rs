pub mod alphabeta;
pub mod eval;

pub use alphabeta::{search, SearchParams, SearchResult, Searcher};
