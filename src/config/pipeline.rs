//! Whole-pipeline configuration and its diff.

use super::kinds::{GroupConfig, JobConfig, PluginConfig, ResourceConfig};
use crate::diff::{reconcile, DiffError, RenderReport, Renderer, Summary};
use crate::entity::{Entity, Index};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

/// PipelineConfig is a complete pipeline: its groups, resources, resource
/// types and jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
    #[serde(default)]
    pub resource_types: Vec<PluginConfig>,
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

impl PipelineConfig {
    /// Parse a pipeline from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse a pipeline from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a pipeline file; `.json` files are read as JSON, anything else
    /// as YAML.
    pub fn load(path: &Path) -> Result<Self, DiffError> {
        let content = fs::read_to_string(path).map_err(|e| DiffError::load(path, e.to_string()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json(&content).map_err(|e| e.to_string())
        } else {
            Self::from_yaml(&content).map_err(|e| e.to_string())
        };
        parsed.map_err(|message| DiffError::load(path, message))
    }
}

/// PipelineReport is the outcome of diffing two pipelines.
#[derive(Debug, Default)]
pub struct PipelineReport {
    /// Per-kind counts, in rendering order.
    pub kinds: Vec<(&'static str, Summary)>,
    pub render: RenderReport,
}

impl PipelineReport {
    /// Totals across all kinds.
    pub fn summary(&self) -> Summary {
        let mut total = Summary::default();
        for (_, summary) in &self.kinds {
            total.merge(*summary);
        }
        total
    }

    /// Returns true if any entity of any kind differs.
    pub fn has_changes(&self) -> bool {
        !self.summary().is_same()
    }

    fn record<T: Entity, W: Write>(
        &mut self,
        renderer: &mut Renderer<W>,
        old: &Index<T>,
        new: &Index<T>,
    ) -> Result<(), DiffError> {
        let diffs = reconcile(old, new);
        self.kinds.push((T::KIND, diffs.summary()));
        let render = renderer.render_all(&diffs, T::KIND)?;
        self.render.merge(render);
        Ok(())
    }
}

fn index<T: Entity>(entities: &[T]) -> Result<Index<&T>, DiffError> {
    Index::new(entities.iter().collect())
}

/// Diffs two pipelines kind by kind: groups, resources, resource types, jobs.
///
/// Every collection is checked for duplicate names before anything is
/// written.
pub fn diff_pipelines<W: Write>(
    old: &PipelineConfig,
    new: &PipelineConfig,
    renderer: &mut Renderer<W>,
) -> Result<PipelineReport, DiffError> {
    let groups = (index(&old.groups)?, index(&new.groups)?);
    let resources = (index(&old.resources)?, index(&new.resources)?);
    let resource_types = (index(&old.resource_types)?, index(&new.resource_types)?);
    let jobs = (index(&old.jobs)?, index(&new.jobs)?);

    let mut report = PipelineReport::default();
    report.record(renderer, &groups.0, &groups.1)?;
    report.record(renderer, &resources.0, &resources.1)?;
    report.record(renderer, &resource_types.0, &resource_types.1)?;
    report.record(renderer, &jobs.0, &jobs.1)?;

    tracing::debug!(summary = %report.summary(), "diffed pipelines");
    Ok(report)
}
