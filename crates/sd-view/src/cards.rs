//! Card view-models for list items and detail views.

use sd_core::entities::{Agency, Astronaut, Launch, Program, Resource};
use sd_core::enums::ResourceKind;
use serde::Serialize;

/// Shown wherever a record has no usable image.
pub const PLACEHOLDER_IMAGE: &str = "No Image Available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub kind: ResourceKind,
    pub id: String,
    pub title: String,
    pub image: Option<String>,
    pub fields: Vec<Field>,
    pub description: Option<String>,
    pub links: Vec<Field>,
}

impl Card {
    fn base(kind: ResourceKind, record: &impl Resource) -> Self {
        Self {
            kind,
            id: record.id().to_string(),
            title: record.name().to_string(),
            image: record.image().map(str::to_string),
            fields: Vec::new(),
            description: None,
            links: Vec::new(),
        }
    }

    /// Image URL, or the placeholder text.
    #[must_use]
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    #[must_use]
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }

    fn with(mut self, label: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.trim().is_empty() {
                self.fields.push(Field { label, value });
            }
        }
        self
    }

    fn link(mut self, label: &'static str, url: Option<&String>) -> Self {
        if let Some(url) = url.filter(|url| !url.trim().is_empty()) {
            self.links.push(Field {
                label,
                value: url.clone(),
            });
        }
        self
    }

    fn describe(mut self, text: Option<&String>) -> Self {
        self.description = text.filter(|text| !text.trim().is_empty()).cloned();
        self
    }
}

/// Records that render as cards.
pub trait Cards: Resource {
    /// Compact card for a list grid.
    fn summary_card(&self) -> Card;
    /// Full card for the detail view.
    fn detail_card(&self) -> Card;
}

fn joined(values: &[String]) -> Option<String> {
    (!values.is_empty()).then(|| values.join(", "))
}

impl Cards for Agency {
    fn summary_card(&self) -> Card {
        Card::base(ResourceKind::Agency, self)
            .with("Type", self.agency_type.as_ref())
            .with("Country", joined(&self.countries))
    }

    fn detail_card(&self) -> Card {
        Card::base(ResourceKind::Agency, self)
            .with("Abbreviation", self.abbrev.as_ref())
            .with("Type", self.agency_type.as_ref())
            .with("Founded", self.founding_year.as_ref())
            .with("Administrator", self.administrator.as_ref())
            .with("Country", joined(&self.countries))
            .with("Total Launches", self.total_launch_count)
            .with("Successful", self.successful_launches)
            .with("Failed", self.failed_launches)
            .with("Pending", self.pending_launches)
            .describe(self.description.as_ref())
            .link("Wikipedia", self.wiki_url.as_ref())
            .link("Website", self.info_url.as_ref())
    }
}

impl Cards for Astronaut {
    fn summary_card(&self) -> Card {
        let agency = self.agency.as_ref().map(|agency| agency.name.clone());
        Card::base(ResourceKind::Astronaut, self)
            .with("Status", self.status.as_ref())
            .with("Agency", agency)
            .with("Nationality", self.nationality.first())
    }

    fn detail_card(&self) -> Card {
        let agency = self.agency.as_ref().map(|agency| match &agency.abbrev {
            Some(abbrev) => format!("{} ({abbrev})", agency.name),
            None => agency.name.clone(),
        });
        Card::base(ResourceKind::Astronaut, self)
            .with("Status", self.status.as_ref())
            .with("Agency", agency)
            .with("Nationality", joined(&self.nationality))
            .with("Born", self.date_of_birth.as_ref())
            .with("Died", self.date_of_death.as_ref())
            .with("Time in Space", self.time_in_space.as_ref())
            .with("EVA Time", self.eva_time.as_ref())
            .with("Flights", self.flights_count)
            .with("Landings", self.landings_count)
            .with("Spacewalks", self.spacewalks_count)
            .with("First Flight", self.first_flight.as_ref())
            .with("Last Flight", self.last_flight.as_ref())
            .describe(self.bio.as_ref())
            .link("Wikipedia", self.wiki.as_ref())
    }
}

fn launch_time(launch: &Launch) -> Option<String> {
    launch
        .net
        .map(|net| net.format("%B %-d, %Y %H:%M UTC").to_string())
}

impl Cards for Launch {
    fn summary_card(&self) -> Card {
        Card::base(ResourceKind::Launch, self)
            .with("Status", self.status.as_ref().map(|s| s.name.clone()))
            .with("Date", launch_time(self))
            .with(
                "Provider",
                self.launch_service_provider.as_ref().map(|p| p.name.clone()),
            )
    }

    fn detail_card(&self) -> Card {
        let rocket = self
            .rocket_configuration()
            .map(|config| config.full_name.clone().unwrap_or_else(|| config.name.clone()));
        let mission = self.mission.as_ref();
        Card::base(ResourceKind::Launch, self)
            .with("Status", self.status.as_ref().map(|s| s.name.clone()))
            .with("Date", launch_time(self))
            .with(
                "Launch Provider",
                self.launch_service_provider.as_ref().map(|p| p.name.clone()),
            )
            .with("Rocket", rocket)
            .with("Launch Pad", self.pad.as_ref().map(|pad| pad.name.clone()))
            .with("Location", self.pad.as_ref().and_then(|pad| pad.location.clone()))
            .with("Mission", mission.map(|m| m.name.clone()))
            .with("Mission Type", mission.and_then(|m| m.mission_type.clone()))
            .describe(mission.and_then(|m| m.description.as_ref()))
    }
}

impl Cards for Program {
    fn summary_card(&self) -> Card {
        Card::base(ResourceKind::Program, self)
            .with("Start", self.start_date.as_ref())
            .with("End", self.end_date.as_ref())
    }

    fn detail_card(&self) -> Card {
        let agencies: Vec<String> = self.agencies.iter().map(|a| a.name.clone()).collect();
        let patches: Vec<String> = self.mission_patches.iter().map(|p| p.name.clone()).collect();
        Card::base(ResourceKind::Program, self)
            .with("Start", self.start_date.as_ref())
            .with("End", self.end_date.as_ref())
            .with("Agencies", joined(&agencies))
            .with("Mission Patches", joined(&patches))
            .describe(self.description.as_ref())
            .link("Website", self.info_url.as_ref())
            .link("Wikipedia", self.wiki_url.as_ref())
    }
}

/// One summary card per record, in order.
#[must_use]
pub fn summary_cards<T: Cards>(records: &[T]) -> Vec<Card> {
    records.iter().map(T::summary_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn astronaut(json: &str) -> Astronaut {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let card = astronaut(r#"{"id": 1, "name": "Jane Doe"}"#).detail_card();
        assert_eq!(card.image, None);
        assert_eq!(card.image_or_placeholder(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn astronaut_detail_fields() {
        let mut record = astronaut(
            r#"{"id": 1, "name": "Jane Doe", "status": {"name": "Active"},
                "agency": {"name": "NASA", "abbrev": "NASA"},
                "nationality": [{"name": "American"}], "flights_count": 3,
                "bio": "  "}"#,
        );
        record.display_image = Some("http://x/y.png".into());
        let card = record.detail_card();
        assert_eq!(card.image_or_placeholder(), "http://x/y.png");
        assert_eq!(card.field("Status"), Some("Active"));
        assert_eq!(card.field("Agency"), Some("NASA (NASA)"));
        assert_eq!(card.field("Flights"), Some("3"));
        assert_eq!(card.field("Landings"), None);
        assert_eq!(card.description, None, "blank bio is dropped");
    }

    #[test]
    fn launch_summary_formats_net() {
        let launch: Launch = serde_json::from_str(
            r#"{"id": "abc-1", "name": "Falcon 9 | Starlink",
                "net": "2024-05-01T12:30:00Z", "status": {"name": "Go", "abbrev": "Go"}}"#,
        )
        .unwrap();
        let card = launch.summary_card();
        assert_eq!(card.field("Date"), Some("May 1, 2024 12:30 UTC"));
        assert_eq!(card.field("Status"), Some("Go"));
        assert_eq!(card.kind, ResourceKind::Launch);
    }

    #[test]
    fn one_summary_per_record() {
        let agencies: Vec<Agency> = serde_json::from_str(
            r#"[{"id": 1, "name": "NASA"}, {"id": 2, "name": "ESA"}, {"id": 3, "name": "JAXA"}]"#,
        )
        .unwrap();
        let cards = summary_cards(&agencies);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].title, "ESA");
    }
}
