pub mod arena;
pub mod recency_list;

pub use arena::{Arena, SlotId};
pub use recency_list::RecencyList;
