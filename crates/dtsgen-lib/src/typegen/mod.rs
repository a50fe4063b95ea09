//! Declaration generation from a closed type graph.

pub mod typescript;
