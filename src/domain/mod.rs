// Domain layer - Core types and partitioning rules

pub mod model;
pub mod partition;
pub mod rules;
