use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a billboard location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub Uuid);

impl LocationId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl EntityId for LocationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LocationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// A physical LED billboard a customer can book display time on.
///
/// Read-only projection; locations are managed on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub city: String,
    pub address: String,
    /// Panel resolution, used to match creatives to the screen.
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// Estimated daily footfall shown on the location card.
    pub daily_impressions: u64,
    /// How many ad slots the panel sells per day.
    pub slots_per_day: u32,
}

impl Location {
    /// Panel resolution label, e.g. "1280 x 720 px".
    pub fn dimensions_label(&self) -> String {
        format!("{} x {} px", self.pixel_width, self.pixel_height)
    }
}

/// Occupancy of one location on a specific calendar date.
///
/// Returned by the availability-by-date listing so the picker can show
/// how much inventory is left before the customer commits to a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDayAvailability {
    pub location: Location,
    pub slots_booked: u32,
}

impl LocationDayAvailability {
    pub fn slots_left(&self) -> u32 {
        self.location.slots_per_day.saturating_sub(self.slots_booked)
    }

    pub fn has_capacity(&self) -> bool {
        self.slots_left() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(slots_per_day: u32) -> Location {
        Location {
            id: LocationId::new(Uuid::new_v4()),
            name: "MG Road Gate".to_string(),
            city: "Bengaluru".to_string(),
            address: "MG Road metro station, east exit".to_string(),
            pixel_width: 1280,
            pixel_height: 720,
            daily_impressions: 120_000,
            slots_per_day,
        }
    }

    #[test]
    fn slots_left_never_underflows() {
        let day = LocationDayAvailability {
            location: location(4),
            slots_booked: 9,
        };
        assert_eq!(day.slots_left(), 0);
        assert!(!day.has_capacity());
    }

    #[test]
    fn capacity_reflects_remaining_slots() {
        let day = LocationDayAvailability {
            location: location(6),
            slots_booked: 2,
        };
        assert_eq!(day.slots_left(), 4);
        assert!(day.has_capacity());
    }
}
