//! Catalog compilation - resolver, table builders, and code emitter

pub mod emit;
pub mod forward;
pub mod resolve;
pub mod reverse;

pub use emit::{escape_token, render_maps};
pub use forward::ForwardTable;
pub use resolve::{resolve, ForwardEntry};
pub use reverse::ReverseTable;
