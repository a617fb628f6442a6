use crate::domain::a001_location::aggregate::LocationId;
use crate::domain::a002_plan::aggregate::PlanId;
use crate::domain::common::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One slot-availability probe: is `plan` free on `location` for `date`?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub location_id: LocationId,
    pub plan_id: PlanId,
    pub date: NaiveDate,
}

impl AvailabilityQuery {
    /// Query-string form used by `GET /api/availability`.
    pub fn to_query_string(&self) -> String {
        format!(
            "location={}&plan={}&date={}",
            self.location_id.as_string(),
            self.plan_id.as_string(),
            self.date.format("%Y-%m-%d")
        )
    }
}

/// Backend verdict for one availability probe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityStatus {
    pub is_available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn query_string_uses_iso_date() {
        let q = AvailabilityQuery {
            location_id: LocationId::new(Uuid::nil()),
            plan_id: PlanId::new(Uuid::nil()),
            date: NaiveDate::from_ymd_opt(2025, 9, 26).unwrap(),
        };
        let qs = q.to_query_string();
        assert!(qs.ends_with("&date=2025-09-26"));
        assert!(qs.starts_with("location=00000000-0000-0000-0000-000000000000&plan="));
    }
}
