pub mod cli;
pub mod defaults;
pub mod error;
pub mod fibonacci;
pub mod quicksort;
pub mod random;
pub mod stats;
pub mod timing;
