pub mod collect;
pub mod common;
pub mod health;
pub mod malls;

pub use collect::{get_collect_best, post_collect, post_collect_best};
pub use health::health;
pub use malls::{clear_malls, list_malls};
