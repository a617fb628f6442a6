use crate::domain::common::EntityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a display plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(pub Uuid);

impl PlanId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl EntityId for PlanId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PlanId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// A bookable display package on a location: so many seconds per loop,
/// so many days, at a fixed base price.
///
/// Prices are advisory on the client; the backend recomputes the charge
/// at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    pub description: String,
    pub base_price: Decimal,
    pub duration_days: u32,
    pub spot_seconds: u32,
    pub plays_per_day: u32,
    /// Highlighted in the plan picker.
    pub is_featured: bool,
}

impl Plan {
    /// Short schedule label, e.g. "10s x 120 plays / day, 7 days".
    pub fn schedule_label(&self) -> String {
        format!(
            "{}s x {} plays / day, {} days",
            self.spot_seconds, self.plays_per_day, self.duration_days
        )
    }
}
