use chrono::NaiveDate;
use contracts::domain::a001_location::aggregate::LocationDayAvailability;

use crate::shared::api_utils::ApiError;
use crate::system::auth::context::SessionState;

/// Fetch the billboard catalog for one display date. Each entry carries
/// how many of the panel's daily slots are already booked on that date.
pub async fn fetch_locations_for_date(
    session: SessionState,
    date: NaiveDate,
) -> Result<Vec<LocationDayAvailability>, ApiError> {
    session
        .get(&format!("/api/locations?date={}", date.format("%Y-%m-%d")))
        .await
}
