//! Snapshot Types
//!
//! Serialization structs for the end-of-run survivor report.

use serde::{Deserialize, Serialize};

use crate::Completion;

/// A live road from a surviving city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSnapshot {
    /// One of `north`, `south`, `east`, `west`
    pub direction: String,
    pub city: String,
}

/// A surviving city and its live roads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySnapshot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkSnapshot>,
}

impl CitySnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: Vec::new(),
        }
    }

    pub fn with_link(mut self, direction: impl Into<String>, city: impl Into<String>) -> Self {
        self.links.push(LinkSnapshot {
            direction: direction.into(),
            city: city.into(),
        });
        self
    }
}

/// Final state of one alien
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub name: String,
    pub dead: bool,
    /// Last city the alien stood in, if it ever landed
    #[serde(default)]
    pub city: Option<String>,
}

/// Everything a reporting layer needs after the loop ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivorReport {
    pub completion: Completion,
    pub cities: Vec<CitySnapshot>,
    pub agents: Vec<AgentSnapshot>,
}

impl SurvivorReport {
    pub fn new(completion: Completion) -> Self {
        Self {
            completion,
            cities: Vec::new(),
            agents: Vec::new(),
        }
    }

    pub fn survivors(&self) -> usize {
        self.agents.iter().filter(|a| !a.dead).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_snapshot_links() {
        let city = CitySnapshot::new("Foo")
            .with_link("east", "Bar")
            .with_link("north", "Qux");

        assert_eq!(city.links.len(), 2);
        assert_eq!(city.links[0].direction, "east");
        assert_eq!(city.links[1].city, "Qux");
    }

    #[test]
    fn test_isolated_city_omits_links() {
        let json = serde_json::to_string(&CitySnapshot::new("Foo")).unwrap();
        assert_eq!(json, r#"{"name":"Foo"}"#);
    }

    #[test]
    fn test_survivor_count() {
        let mut report = SurvivorReport::new(Completion::Quiescent { rounds: 2 });
        report.agents.push(AgentSnapshot {
            name: "a".into(),
            dead: true,
            city: Some("Foo".into()),
        });
        report.agents.push(AgentSnapshot {
            name: "b".into(),
            dead: false,
            city: None,
        });

        assert_eq!(report.survivors(), 1);
    }

    #[test]
    fn test_report_json_parses_back() {
        let mut report = SurvivorReport::new(Completion::RoundLimit { rounds: 10 });
        report.cities.push(CitySnapshot::new("Foo").with_link("west", "Bar"));

        let json = report.to_json().unwrap();
        let parsed: SurvivorReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
