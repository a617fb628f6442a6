//! Common types shared by all domain entities.

pub mod ids;

pub use ids::EntityId;
