use serde::{Deserialize, Serialize};

use super::loose::{self, Named};
use super::Resource;

/// A space agency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    #[serde(deserialize_with = "crate::ids::deserialize")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub abbrev: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "loose::opt_name")]
    pub agency_type: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_text")]
    pub founding_year: Option<String>,
    #[serde(default)]
    pub administrator: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total_launch_count: Option<u32>,
    #[serde(default)]
    pub successful_launches: Option<u32>,
    #[serde(default)]
    pub failed_launches: Option<u32>,
    #[serde(default)]
    pub pending_launches: Option<u32>,
    #[serde(
        default,
        rename = "country_code",
        alias = "country",
        deserialize_with = "loose::countries"
    )]
    pub countries: Vec<String>,
    #[serde(default)]
    pub wiki_url: Option<String>,
    #[serde(default)]
    pub info_url: Option<String>,
    #[serde(default, alias = "image", deserialize_with = "loose::opt_image")]
    pub image_url: Option<String>,
    #[serde(default, alias = "logo", deserialize_with = "loose::opt_image")]
    pub logo_url: Option<String>,
}

impl Resource for Agency {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn image(&self) -> Option<&str> {
        self.image_url.as_deref().or(self.logo_url.as_deref())
    }
}

/// Agency reference embedded in astronauts, launches and programs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbrev: Option<String>,
}

impl Named for AgencyRef {
    fn from_name(name: String) -> Self {
        Self { name, abbrev: None }
    }
}
