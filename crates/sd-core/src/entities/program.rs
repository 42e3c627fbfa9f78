use serde::{Deserialize, Serialize};

use super::{AgencyRef, Resource, loose};

/// A launch program (e.g. Artemis, ISS).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    #[serde(deserialize_with = "crate::ids::deserialize")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, alias = "image", deserialize_with = "loose::opt_image")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub mission_patches: Vec<MissionPatch>,
    #[serde(default)]
    pub info_url: Option<String>,
    #[serde(default)]
    pub wiki_url: Option<String>,
    #[serde(default)]
    pub agencies: Vec<AgencyRef>,
}

impl Resource for Program {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn image(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionPatch {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "loose::opt_image")]
    pub image_url: Option<String>,
}
