use contracts::domain::a001_location::aggregate::LocationId;
use contracts::domain::a002_plan::aggregate::Plan;
use contracts::domain::common::EntityId;

use crate::shared::api_utils::ApiError;
use crate::system::auth::context::SessionState;

/// Fetch the display plans offered on one billboard.
pub async fn fetch_plans_for_location(
    session: SessionState,
    location: LocationId,
) -> Result<Vec<Plan>, ApiError> {
    session
        .get(&format!("/api/locations/{}/plans", location.as_string()))
        .await
}
