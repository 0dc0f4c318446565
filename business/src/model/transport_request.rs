use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, TransportStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRequest {
    pub id: u64,
    pub reference: String,
    pub departure: String,
    pub arrival: String,
    pub requested_at: DateTime<Utc>,
    pub passengers: u32,
    pub status: TransportStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRequestDraft {
    pub departure: String,
    pub arrival: String,
    pub requested_at: DateTime<Utc>,
    pub passengers: u32,
}

impl Resource for TransportRequest {
    type Id = u64;
    type Draft = TransportRequestDraft;

    const PATH: &'static str = "transport-requests";

    fn id(&self) -> &u64 {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_at_parses_rfc3339() {
        let request: TransportRequest = serde_json::from_value(serde_json::json!({
            "id": 3,
            "reference": "TR-0003",
            "departure": "Lyon",
            "arrival": "Grenoble",
            "requestedAt": "2024-03-05T08:30:00Z",
            "passengers": 4,
            "status": "PENDING"
        }))
        .expect("transport request should deserialize");

        assert_eq!(request.requested_at.to_rfc3339(), "2024-03-05T08:30:00+00:00");
        assert!(request.status.is_open());
    }
}
