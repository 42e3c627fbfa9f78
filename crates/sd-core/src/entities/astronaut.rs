use serde::{Deserialize, Serialize};

use super::{AgencyRef, Resource, loose};

/// An astronaut.
///
/// The upstream image field comes in many shapes, so it is not decoded here.
/// `display_image` is filled in by the response normalizer after resolving
/// the raw payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Astronaut {
    #[serde(deserialize_with = "crate::ids::deserialize")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "loose::opt_name")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_named")]
    pub agency: Option<AgencyRef>,
    #[serde(default, deserialize_with = "loose::nationalities")]
    pub nationality: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub flights_count: Option<u32>,
    #[serde(default)]
    pub landings_count: Option<u32>,
    #[serde(default)]
    pub spacewalks_count: Option<u32>,
    #[serde(default)]
    pub time_in_space: Option<String>,
    #[serde(default)]
    pub eva_time: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub date_of_death: Option<String>,
    #[serde(default)]
    pub first_flight: Option<String>,
    #[serde(default)]
    pub last_flight: Option<String>,
    #[serde(default)]
    pub wiki: Option<String>,
    #[serde(default)]
    pub display_image: Option<String>,
}

impl Resource for Astronaut {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn image(&self) -> Option<&str> {
        self.display_image.as_deref()
    }
}
