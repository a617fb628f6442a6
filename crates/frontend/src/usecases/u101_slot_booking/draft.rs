//! Pure state machine behind the booking wizard.
//!
//! A [`BookingDraft`] accumulates the customer's choices step by step. The
//! slot triple (date, location, plan) is hierarchical: changing an earlier
//! choice clears the later ones. Creative and billing are independent of
//! the triple and survive slot changes.

use crate::usecases::u101_slot_booking::upload::CreativeKind;
use chrono::NaiveDate;
use contracts::domain::a001_location::aggregate::Location;
use contracts::domain::a002_plan::aggregate::Plan;
use contracts::shared::validation::is_valid_tax_registration_number;
use contracts::usecases::u101_slot_booking::{OrderInitiateRequest, TaxRegistrationDto};
use rust_decimal::Decimal;

/// Wizard steps in their fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookingStep {
    DateSelection,
    LocationSelection,
    PlanSelection,
    CreativeUpload,
    BillingDetails,
    ReadyToSubmit,
}

impl BookingStep {
    pub fn title(&self) -> &'static str {
        match self {
            BookingStep::DateSelection => "Pick a date",
            BookingStep::LocationSelection => "Pick a screen",
            BookingStep::PlanSelection => "Pick a plan",
            BookingStep::CreativeUpload => "Upload your creative",
            BookingStep::BillingDetails => "Billing details",
            BookingStep::ReadyToSubmit => "Review and pay",
        }
    }
}

/// Tax-registration block of the billing form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxRegistration {
    /// The customer books on behalf of a registered business.
    pub applicable: bool,
    pub company_name: String,
    pub registration_number: String,
}

impl TaxRegistration {
    /// Complete when not applicable, or when both fields are filled and the
    /// registration number has the required structure.
    pub fn is_complete(&self) -> bool {
        if !self.applicable {
            return true;
        }
        !self.company_name.trim().is_empty()
            && is_valid_tax_registration_number(self.registration_number.trim())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillingDetails {
    pub address: String,
    pub tax: TaxRegistration,
}

impl BillingDetails {
    pub fn is_complete(&self) -> bool {
        !self.address.trim().is_empty() && self.tax.is_complete()
    }
}

/// Discount entered by the customer.
///
/// Best-effort: an unknown code degrades to a zero amount and never blocks
/// submission. The backend re-applies the code authoritatively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountState {
    pub code: String,
    pub amount: Decimal,
}

/// The creative as the draft sees it: accepted locally, possibly uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CreativeDraft {
    pub file_name: String,
    pub kind: CreativeKind,
    /// Content-guideline checkbox; gates the upload, reset on re-selection.
    pub guidelines_acknowledged: bool,
    /// Storage path, set only after the direct PUT succeeded.
    pub remote_path: Option<String>,
}

/// Everything the wizard has assembled so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub date: Option<NaiveDate>,
    pub location: Option<Location>,
    pub plan: Option<Plan>,
    pub creative: Option<CreativeDraft>,
    pub billing: BillingDetails,
    pub discount: DiscountState,
    pub terms_accepted: bool,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the display date. Location and plan depend on it and are
    /// cleared; creative and billing survive.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
        self.location = None;
        self.plan = None;
    }

    /// Select a screen. The plan depends on it and is cleared.
    pub fn select_location(&mut self, location: Location) {
        self.location = Some(location);
        self.plan = None;
    }

    /// Select a plan. A plan the availability board currently marks
    /// unavailable is refused silently; an unknown state is allowed, the
    /// backend re-validates at submission.
    pub fn select_plan(&mut self, plan: Plan, known_unavailable: bool) -> bool {
        if known_unavailable {
            return false;
        }
        self.plan = Some(plan);
        true
    }

    /// Record a locally accepted creative. Replaces any previous one and
    /// resets the guideline acknowledgment and the uploaded path.
    pub fn attach_creative(&mut self, file_name: String, kind: CreativeKind) {
        self.creative = Some(CreativeDraft {
            file_name,
            kind,
            guidelines_acknowledged: false,
            remote_path: None,
        });
    }

    pub fn acknowledge_guidelines(&mut self, acknowledged: bool) {
        if let Some(creative) = self.creative.as_mut() {
            creative.guidelines_acknowledged = acknowledged;
        }
    }

    /// Mark the current creative uploaded. Only a successful PUT calls this.
    pub fn mark_creative_uploaded(&mut self, path: String) {
        if let Some(creative) = self.creative.as_mut() {
            creative.remote_path = Some(path);
        }
    }

    pub fn clear_creative(&mut self) {
        self.creative = None;
    }

    /// Upload may start once a file is accepted and the guideline checkbox
    /// is ticked.
    pub fn can_start_upload(&self) -> bool {
        self.creative
            .as_ref()
            .map(|c| c.guidelines_acknowledged && c.remote_path.is_none())
            .unwrap_or(false)
    }

    pub fn creative_uploaded(&self) -> bool {
        self.creative
            .as_ref()
            .map(|c| c.remote_path.is_some())
            .unwrap_or(false)
    }

    /// Earliest step whose requirement is not met yet.
    pub fn first_incomplete_step(&self) -> BookingStep {
        if self.date.is_none() {
            return BookingStep::DateSelection;
        }
        if self.location.is_none() {
            return BookingStep::LocationSelection;
        }
        if self.plan.is_none() {
            return BookingStep::PlanSelection;
        }
        if !self.creative_uploaded() {
            return BookingStep::CreativeUpload;
        }
        if !self.billing.is_complete() {
            return BookingStep::BillingDetails;
        }
        BookingStep::ReadyToSubmit
    }

    /// All steps satisfied and the terms checkbox ticked.
    pub fn can_submit(&self) -> bool {
        self.first_incomplete_step() == BookingStep::ReadyToSubmit && self.terms_accepted
    }

    /// Package the draft for `POST /api/orders`. `None` while incomplete.
    pub fn initiate_request(&self) -> Option<OrderInitiateRequest> {
        if !self.can_submit() {
            return None;
        }
        let location = self.location.as_ref()?;
        let plan = self.plan.as_ref()?;
        let creative_path = self.creative.as_ref()?.remote_path.clone()?;
        let discount_code = {
            let code = self.discount.code.trim();
            if code.is_empty() {
                None
            } else {
                Some(code.to_string())
            }
        };
        let tax_registration = if self.billing.tax.applicable {
            Some(TaxRegistrationDto {
                company_name: self.billing.tax.company_name.trim().to_string(),
                registration_number: self.billing.tax.registration_number.trim().to_string(),
            })
        } else {
            None
        };
        Some(OrderInitiateRequest {
            location_id: location.id,
            plan_id: plan.id,
            display_date: self.date?,
            creative_path,
            billing_address: self.billing.address.trim().to_string(),
            tax_registration,
            discount_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_location::aggregate::LocationId;
    use contracts::domain::a002_plan::aggregate::PlanId;
    use uuid::Uuid;

    fn location() -> Location {
        Location {
            id: LocationId::new(Uuid::from_u128(0xa001)),
            name: "MG Road Gate".to_string(),
            city: "Bengaluru".to_string(),
            address: "MG Road metro station, east exit".to_string(),
            pixel_width: 1280,
            pixel_height: 720,
            daily_impressions: 120_000,
            slots_per_day: 6,
        }
    }

    fn plan() -> Plan {
        Plan {
            id: PlanId::new(Uuid::from_u128(0xa002)),
            name: "Prime Week".to_string(),
            description: "Evening loop for seven days".to_string(),
            base_price: Decimal::new(13999, 0),
            duration_days: 7,
            spot_seconds: 10,
            plays_per_day: 120,
            is_featured: true,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 14).unwrap()
    }

    fn draft_with_slot() -> BookingDraft {
        let mut draft = BookingDraft::new();
        draft.select_date(date());
        draft.select_location(location());
        assert!(draft.select_plan(plan(), false));
        draft
    }

    fn complete_draft() -> BookingDraft {
        let mut draft = draft_with_slot();
        draft.attach_creative("diwali.mp4".to_string(), CreativeKind::Video);
        draft.acknowledge_guidelines(true);
        draft.mark_creative_uploaded("creatives/2026/diwali.mp4".to_string());
        draft.billing.address = "14 Residency Rd, Bengaluru".to_string();
        draft.terms_accepted = true;
        draft
    }

    #[test]
    fn date_change_clears_location_and_plan_but_not_the_rest() {
        let mut draft = draft_with_slot();
        draft.attach_creative("spot.png".to_string(), CreativeKind::Image);
        draft.billing.address = "14 Residency Rd".to_string();

        draft.select_date(NaiveDate::from_ymd_opt(2026, 9, 20).unwrap());

        assert!(draft.location.is_none());
        assert!(draft.plan.is_none());
        assert!(draft.creative.is_some());
        assert_eq!(draft.billing.address, "14 Residency Rd");
    }

    #[test]
    fn location_change_clears_only_the_plan() {
        let mut draft = draft_with_slot();
        draft.select_location(location());
        assert!(draft.date.is_some());
        assert!(draft.location.is_some());
        assert!(draft.plan.is_none());
    }

    #[test]
    fn unavailable_plan_selection_is_a_silent_no_op() {
        let mut draft = BookingDraft::new();
        draft.select_date(date());
        draft.select_location(location());

        assert!(!draft.select_plan(plan(), true));
        assert!(draft.plan.is_none());
        // Unknown availability is treated as available.
        assert!(draft.select_plan(plan(), false));
        assert!(draft.plan.is_some());
    }

    #[test]
    fn first_incomplete_step_walks_the_fixed_order() {
        let mut draft = BookingDraft::new();
        assert_eq!(draft.first_incomplete_step(), BookingStep::DateSelection);

        draft.select_date(date());
        assert_eq!(draft.first_incomplete_step(), BookingStep::LocationSelection);

        draft.select_location(location());
        assert_eq!(draft.first_incomplete_step(), BookingStep::PlanSelection);

        draft.select_plan(plan(), false);
        assert_eq!(draft.first_incomplete_step(), BookingStep::CreativeUpload);

        // A selected but not yet uploaded file does not satisfy the step.
        draft.attach_creative("spot.png".to_string(), CreativeKind::Image);
        assert_eq!(draft.first_incomplete_step(), BookingStep::CreativeUpload);

        draft.mark_creative_uploaded("creatives/spot.png".to_string());
        assert_eq!(draft.first_incomplete_step(), BookingStep::BillingDetails);

        draft.billing.address = "14 Residency Rd".to_string();
        assert_eq!(draft.first_incomplete_step(), BookingStep::ReadyToSubmit);
    }

    #[test]
    fn tax_registration_gates_billing_when_applicable() {
        let mut draft = complete_draft();
        draft.billing.tax.applicable = true;
        assert_eq!(draft.first_incomplete_step(), BookingStep::BillingDetails);

        draft.billing.tax.company_name = "Nimbus Media LLP".to_string();
        draft.billing.tax.registration_number = "29ABCDE1234F1Z5".to_string();
        assert_eq!(draft.first_incomplete_step(), BookingStep::ReadyToSubmit);

        draft.billing.tax.registration_number = "29ABCDE1234F105".to_string();
        assert_eq!(draft.first_incomplete_step(), BookingStep::BillingDetails);
    }

    #[test]
    fn submit_needs_terms_on_top_of_complete_steps() {
        let mut draft = complete_draft();
        assert!(draft.can_submit());

        draft.terms_accepted = false;
        assert!(!draft.can_submit());
        assert_eq!(draft.first_incomplete_step(), BookingStep::ReadyToSubmit);
    }

    #[test]
    fn reattaching_a_creative_resets_acknowledgment_and_path() {
        let mut draft = complete_draft();
        assert!(draft.creative_uploaded());

        draft.attach_creative("retake.png".to_string(), CreativeKind::Image);
        let creative = draft.creative.as_ref().unwrap();
        assert!(!creative.guidelines_acknowledged);
        assert!(creative.remote_path.is_none());
        assert!(!draft.can_start_upload());

        draft.acknowledge_guidelines(true);
        assert!(draft.can_start_upload());
    }

    #[test]
    fn initiate_request_packages_the_complete_draft() {
        let mut draft = complete_draft();
        draft.discount.code = "  SAVE20  ".to_string();
        draft.billing.tax.applicable = true;
        draft.billing.tax.company_name = "Nimbus Media LLP".to_string();
        draft.billing.tax.registration_number = "29ABCDE1234F1Z5".to_string();

        let request = draft.initiate_request().unwrap();
        assert_eq!(request.display_date, date());
        assert_eq!(request.creative_path, "creatives/2026/diwali.mp4");
        assert_eq!(request.discount_code.as_deref(), Some("SAVE20"));
        assert_eq!(
            request.tax_registration.unwrap().registration_number,
            "29ABCDE1234F1Z5"
        );

        draft.terms_accepted = false;
        assert!(draft.initiate_request().is_none());
    }

    #[test]
    fn blank_discount_code_is_not_sent() {
        let mut draft = complete_draft();
        draft.discount.code = "   ".to_string();
        let request = draft.initiate_request().unwrap();
        assert!(request.discount_code.is_none());
        assert!(request.tax_registration.is_none());
    }
}
