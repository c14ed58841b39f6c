//! Entity kinds of a pipeline configuration.

use crate::entity::Entity;
use crate::value::Value;
use serde::{Deserialize, Serialize};

fn is_false(b: &bool) -> bool {
    !*b
}

/// GroupConfig is a named set of jobs and resources shown together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

impl Entity for GroupConfig {
    const KIND: &'static str = "group";

    fn name(&self) -> &str {
        &self.name
    }
}

/// ResourceConfig is an external input or output of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub source: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_every: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Entity for ResourceConfig {
    const KIND: &'static str = "resource";

    fn name(&self) -> &str {
        &self.name
    }
}

/// PluginConfig declares a custom resource type the pipeline's resources use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub source: Value,
    #[serde(default, skip_serializing_if = "is_false")]
    pub privileged: bool,
}

impl Entity for PluginConfig {
    const KIND: &'static str = "resource type";

    fn name(&self) -> &str {
        &self.name
    }
}

/// JobConfig is a build plan run by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub public: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub serial: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub serial_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_in_flight: Option<u32>,
    #[serde(default)]
    pub plan: Vec<Value>,
}

impl Entity for JobConfig {
    const KIND: &'static str = "job";

    fn name(&self) -> &str {
        &self.name
    }
}
