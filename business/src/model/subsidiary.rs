use serde::{Deserialize, Serialize};

use super::{Resource, Status};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subsidiary {
    pub id: u64,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    pub status: Status,
    #[serde(default)]
    pub employee_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsidiaryDraft {
    pub name: String,
    pub city: String,
    pub address: Option<String>,
}

impl From<&Subsidiary> for SubsidiaryDraft {
    fn from(subsidiary: &Subsidiary) -> Self {
        Self {
            name: subsidiary.name.clone(),
            city: subsidiary.city.clone(),
            address: subsidiary.address.clone(),
        }
    }
}

impl Resource for Subsidiary {
    type Id = u64;
    type Draft = SubsidiaryDraft;

    const PATH: &'static str = "subsidiaries";

    fn id(&self) -> &u64 {
        &self.id
    }
}
