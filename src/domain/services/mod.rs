//! # Domain Services

pub mod path_resolver;
