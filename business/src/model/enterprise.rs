use serde::{Deserialize, Serialize};

use super::{Resource, Status};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enterprise {
    pub id: u64,
    pub name: String,
    pub siret: String,
    pub email: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseDraft {
    pub name: String,
    pub siret: String,
    pub email: String,
}

impl Resource for Enterprise {
    type Id = u64;
    type Draft = EnterpriseDraft;

    const PATH: &'static str = "enterprises";

    fn id(&self) -> &u64 {
        &self.id
    }
}
