use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SubTask {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub budgeted_hours: f64,
    #[serde(default)]
    pub actual_hours: f64,
    #[serde(default)]
    pub budgeted_cost: f64,
    #[serde(default)]
    pub actual_cost: f64,
    #[serde(default)]
    pub status: TaskStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Objective {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub budgeted_cost: f64,
    #[serde(default)]
    pub actual_cost: f64,
    #[serde(default)]
    pub tasks: Vec<SubTask>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
    #[serde(default)]
    pub contract_amount: f64,
    pub status: Option<String>,
    #[serde(default)]
    pub objectives: Vec<Objective>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScopeCategory {
    Information,
    Schematic,
    Construction,
    Custom,
}

/// A single billable line in a proposal's fee schedule.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScopeItem {
    pub id: String,
    pub task_group: u32,
    pub description: String,
    #[serde(default)]
    pub default_hours: f64,
    #[serde(default)]
    pub rate_per_hour: f64,
    #[serde(default)]
    pub required: bool,
    pub category: ScopeCategory,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Proposal {
    pub name: String,
    pub client: String,
    #[serde(default)]
    pub items: Vec<ScopeItem>,
    /// Ids of optional items the client has opted into. Required items are
    /// always in scope regardless of this list.
    #[serde(default)]
    pub selected: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub proposals: Vec<Proposal>,
    pub currency: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "atelierhq", "atelier")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
projects:
  - id: "P-104"
    name: "Riverside Residence"
    client: "Harmon family"
    contract_amount: 250000.0
    status: "construction"
    objectives:
      - id: "O-1"
        name: "Schematic design"
        budgeted_cost: 40000.0
        actual_cost: 38500.0
        tasks:
          - id: "T-1"
            name: "Site survey"
            budgeted_hours: 24.0
            actual_hours: 30.0
            status: completed
          - id: "T-2"
            name: "Massing studies"
            budgeted_hours: 40.0
            status: in-progress
      - id: "O-2"
        name: "Permitting"
  - id: "P-105"
    name: "Depot Conversion"
    client: "City of Millbrook"

proposals:
  - name: "Depot Conversion fee proposal"
    client: "City of Millbrook"
    items:
      - id: "S-1"
        task_group: 1
        description: "Existing conditions documentation"
        default_hours: 32.0
        rate_per_hour: 145.0
        required: true
        category: information
      - id: "S-2"
        task_group: 3
        description: "Interior renderings"
        default_hours: 20.0
        rate_per_hour: 120.0
        category: custom
    selected: ["S-2"]

currency: "USD"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.projects.len(), 2);

        let riverside = &config.projects[0];
        assert_eq!(riverside.name, "Riverside Residence");
        assert_eq!(riverside.contract_amount, 250000.0);
        assert_eq!(riverside.status.as_deref(), Some("construction"));
        assert_eq!(riverside.objectives.len(), 2);

        let schematic = &riverside.objectives[0];
        assert_eq!(schematic.actual_cost, 38500.0);
        assert_eq!(schematic.tasks.len(), 2);
        assert_eq!(schematic.tasks[0].status, TaskStatus::Completed);
        assert_eq!(schematic.tasks[0].actual_hours, 30.0);
        assert_eq!(schematic.tasks[1].status, TaskStatus::InProgress);
        // Absent numeric fields come back as zero, never as missing.
        assert_eq!(schematic.tasks[1].actual_hours, 0.0);

        let permitting = &riverside.objectives[1];
        assert_eq!(permitting.budgeted_cost, 0.0);
        assert!(permitting.tasks.is_empty());

        let depot = &config.projects[1];
        assert_eq!(depot.contract_amount, 0.0);
        assert!(depot.status.is_none());
        assert!(depot.objectives.is_empty());

        assert_eq!(config.proposals.len(), 1);
        let proposal = &config.proposals[0];
        assert_eq!(proposal.items.len(), 2);
        assert!(proposal.items[0].required);
        assert_eq!(proposal.items[0].category, ScopeCategory::Information);
        assert!(!proposal.items[1].required);
        assert_eq!(proposal.items[1].category, ScopeCategory::Custom);
        assert_eq!(proposal.selected, vec!["S-2".to_string()]);

        assert_eq!(config.currency, "USD");
    }
}
