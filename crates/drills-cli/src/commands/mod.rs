//! Program bodies, one per binary.

pub mod cash;
pub mod mario;
