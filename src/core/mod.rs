//! Core name classification and resolution modules.

pub mod classifier;
pub mod context;
pub mod episode;
pub mod name;
pub mod overrides;
pub mod paths;
pub mod resolver;
pub mod scanner;
pub mod title;
pub mod tokenizer;
