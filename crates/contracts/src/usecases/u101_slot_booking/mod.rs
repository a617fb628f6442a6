pub mod availability;
pub mod discount;
pub mod submit;
pub mod upload;

pub use availability::{AvailabilityQuery, AvailabilityStatus};
pub use discount::{DiscountCheckRequest, DiscountCheckResponse};
pub use submit::{
    OrderInitiateRequest, OrderInitiateResponse, PaymentProof, TaxRegistrationDto,
    VerifyPaymentRequest, VerifyPaymentResponse,
};
pub use upload::{SignedUploadRequest, SignedUploadTicket};

use crate::usecases::common::UseCaseMetadata;

pub struct SlotBooking;

impl UseCaseMetadata for SlotBooking {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "slot_booking"
    }

    fn display_name() -> &'static str {
        "Book a display slot"
    }

    fn description() -> &'static str {
        "Multi-step booking of a (location, date, plan) display slot with creative upload and hosted payment"
    }
}
