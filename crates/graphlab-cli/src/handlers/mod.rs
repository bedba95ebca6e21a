pub mod paths;
pub mod search;
pub mod stats;
pub mod structure;
pub mod tree;
