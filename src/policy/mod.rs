pub mod fifo;
pub mod lru;

pub use fifo::FifoEngine;
pub use lru::LruEngine;
