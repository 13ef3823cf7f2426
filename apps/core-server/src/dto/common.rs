use serde::Serialize;
use utoipa::ToSchema;

/// Standard create-operation response carrying the assigned id.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct EntityResponseRestDTO {
    pub id: i64,
}
