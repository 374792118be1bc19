pub mod reveal;
pub mod waves;
