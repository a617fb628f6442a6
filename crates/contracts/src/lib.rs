//! Wire contracts shared between the storefront SPA and the booking backend.
//!
//! Everything in this crate is serde-serializable and mirrors the REST
//! service's JSON shapes. The backend owns business truth (availability,
//! pricing, payment settlement); these types are the client's view of it.

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
