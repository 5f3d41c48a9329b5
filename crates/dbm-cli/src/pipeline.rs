//! Command pipeline: inputs on disk, artifacts and plans out.

use std::path::Path;

use anyhow::{Context, Result};
use dbm_codec::Resolver;
use dbm_config::Config;
use dbm_generate::{GenerateError, Generator, ParcelableArtifacts, SchemaArtifacts};
use dbm_merge::{ArtifactSelection, EditPlan, Instruction, MergeEngine, apply};
use dbm_model::{ClassSnapshot, ClassSpec, GeneratedConstant};
use serde::Serialize;
use tracing::{debug, info};

/// Which artifact sets a command works on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArtifactKind {
    Schema,
    Parcelable,
    #[default]
    All,
}

impl ArtifactKind {
    fn wants_schema(self) -> bool {
        matches!(self, Self::Schema | Self::All)
    }

    fn wants_parcelable(self) -> bool {
        matches!(self, Self::Parcelable | Self::All)
    }
}

/// Generator and merge engine built from one configuration.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub generator: Generator,
    pub engine: MergeEngine,
}

impl Toolchain {
    pub fn from_config(config: &Config) -> Self {
        let options = config.generation_options();
        let engine = MergeEngine::from_options(&options);
        let generator = Generator::new(Resolver::new(config.registry()), options);
        Self { generator, engine }
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Generated artifacts for the requested kinds.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GeneratedSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaArtifacts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcelable: Option<ParcelableArtifacts>,
}

impl GeneratedSet {
    pub fn selection(&self) -> ArtifactSelection<'_> {
        ArtifactSelection {
            schema: self.schema.as_ref(),
            parcelable: self.parcelable.as_ref(),
        }
    }
}

/// A plan and the snapshot a host holds after applying it.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub plan: EditPlan,
    pub merged: ClassSnapshot,
}

pub fn read_class(path: &Path) -> Result<ClassSpec> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read class descriptor {}", path.display()))?;
    let class: ClassSpec = serde_json::from_str(&contents)
        .with_context(|| format!("parse class descriptor {}", path.display()))?;
    debug!(class = %class.name, fields = class.fields.len(), "loaded class descriptor");
    Ok(class)
}

/// Snapshot from disk, or an empty class when no path is given.
pub fn read_snapshot(path: Option<&Path>) -> Result<ClassSnapshot> {
    let Some(path) = path else {
        return Ok(ClassSnapshot::new());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read class snapshot {}", path.display()))?;
    let snapshot: ClassSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("parse class snapshot {}", path.display()))?;
    debug!(members = snapshot.members.len(), "loaded class snapshot");
    Ok(snapshot)
}

pub fn write_snapshot(path: &Path, snapshot: &ClassSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("serialize class snapshot")?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("write class snapshot {}", path.display()))
}

pub fn generate(
    generator: &Generator,
    class: &ClassSpec,
    kind: ArtifactKind,
) -> Result<GeneratedSet, GenerateError> {
    let schema = if kind.wants_schema() {
        Some(generator.schema_artifacts(class)?)
    } else {
        None
    };
    let parcelable = if kind.wants_parcelable() {
        Some(generator.parcelable_artifacts(class)?)
    } else {
        None
    };
    Ok(GeneratedSet { schema, parcelable })
}

pub fn plan(
    toolchain: &Toolchain,
    class: &ClassSpec,
    snapshot: &ClassSnapshot,
    kind: ArtifactKind,
) -> Result<PlanOutcome> {
    let generated = generate(&toolchain.generator, class, kind)
        .with_context(|| format!("generate artifacts for {}", class.name))?;
    let plan = toolchain.engine.plan_class(generated.selection(), snapshot);
    let merged = apply(snapshot, &plan);
    info!(
        class = %class.name,
        instructions = plan.instructions.len(),
        members = merged.members.len(),
        "planned merge"
    );
    Ok(PlanOutcome { plan, merged })
}

/// Insertable text: constants first, then each member separated by a blank line.
pub fn render_artifacts(generated: &GeneratedSet) -> String {
    let mut sections: Vec<String> = Vec::new();
    if let Some(schema) = &generated.schema {
        sections.push(
            schema
                .constants
                .iter()
                .map(GeneratedConstant::declaration)
                .collect(),
        );
        sections.extend(schema.members().into_iter().map(|member| member.text));
    }
    if let Some(parcelable) = &generated.parcelable {
        sections.extend(parcelable.members().into_iter().map(|member| member.text));
    }
    sections.join("\n")
}

/// One line per instruction.
pub fn render_plan(plan: &EditPlan) -> String {
    if plan.is_noop() {
        return "no changes\n".to_string();
    }
    let mut out = String::new();
    for instruction in &plan.instructions {
        let line = match instruction {
            Instruction::Remove { member } => format!("remove {member}"),
            Instruction::Insert(insertion) if insertion.conflict => format!(
                "insert {} ({}) [conflict]",
                insertion.member, insertion.anchor
            ),
            Instruction::Insert(insertion) => {
                format!("insert {} ({})", insertion.member, insertion.anchor)
            }
            Instruction::ImplementInterface { interface } => format!("implement {interface}"),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}
