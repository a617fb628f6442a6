pub mod common;
pub mod u101_slot_booking;
