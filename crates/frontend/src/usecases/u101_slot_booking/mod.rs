//! u101: book a display slot.
//!
//! Date, location and plan selection with cached availability probing,
//! creative upload, billing details, advisory pricing and the hosted
//! payment handoff.

pub mod api;
pub mod availability;
pub mod debounce;
pub mod draft;
pub mod payment;
pub mod pricing;
pub mod upload;
pub mod view;
