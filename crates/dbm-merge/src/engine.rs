//! Reconciliation of generated artifacts against existing declarations.

use dbm_generate::artifacts::PARCELABLE_INTERFACE;
use dbm_generate::{Artifacts, MemberArtifact, ParcelableArtifacts, SchemaArtifacts};
use dbm_model::options::DEFAULT_CONFLICT_NOTE;
use dbm_model::{
    ClassSnapshot, ExistingDeclaration, GeneratedConstant, GenerationOptions, Member, MemberKey,
};
use tracing::{debug, info, warn};

use crate::plan::{
    Anchor, ConstantDecision, Decision, EditPlan, Insertion, Instruction, MergePlan,
};

/// Artifact sets to merge into one class.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactSelection<'a> {
    pub schema: Option<&'a SchemaArtifacts>,
    pub parcelable: Option<&'a ParcelableArtifacts>,
}

impl<'a> From<&'a Artifacts> for ArtifactSelection<'a> {
    fn from(artifacts: &'a Artifacts) -> Self {
        Self {
            schema: Some(&artifacts.schema),
            parcelable: Some(&artifacts.parcelable),
        }
    }
}

/// Plans insertions of generated declarations into an existing class.
#[derive(Debug, Clone)]
pub struct MergeEngine {
    note: String,
}

impl Default for MergeEngine {
    fn default() -> Self {
        Self::new(DEFAULT_CONFLICT_NOTE)
    }
}

impl MergeEngine {
    /// `note` is the comment attached to conflict-annotated insertions.
    pub fn new(note: impl Into<String>) -> Self {
        Self { note: note.into() }
    }

    pub fn from_options(options: &GenerationOptions) -> Self {
        Self::new(options.conflict_note.clone())
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Plan constant declarations, in candidate order.
    ///
    /// A missing constant is inserted after the most recently processed
    /// declaration, or at the end of the class before any was processed. An
    /// existing constant with the same value is left alone. An existing
    /// constant with a different value keeps its value, and an annotated copy
    /// is inserted right after it. When several declarations share the
    /// identifier, one holding the candidate's value counts as a match;
    /// otherwise the first is the conflict anchor.
    pub fn plan_constants(
        &self,
        candidates: &[GeneratedConstant],
        existing: &[ExistingDeclaration],
    ) -> MergePlan {
        let mut plan = MergePlan::default();
        let mut last_processed: Option<Anchor> = None;

        for candidate in candidates {
            let key = MemberKey::field(&candidate.identifier);
            let same_name: Vec<&ExistingDeclaration> = existing
                .iter()
                .filter(|decl| decl.identifier == candidate.identifier)
                .collect();

            let matching = same_name.iter().position(|decl| {
                decl.literal
                    .as_deref()
                    .is_some_and(|literal| candidate.matches_literal(literal))
            });

            let decision = if same_name.is_empty() {
                let anchor = last_processed.take().unwrap_or(Anchor::EndOfClass);
                last_processed = Some(Anchor::AfterPlanned {
                    index: plan.insertions.len(),
                });
                plan.insertions.push(Insertion {
                    anchor,
                    member: key,
                    text: candidate.declaration(),
                    literal: Some(candidate.literal()),
                    conflict: false,
                });
                Decision::Insert
            } else if let Some(occurrence) = matching {
                last_processed = Some(Anchor::AfterExisting {
                    member: key,
                    occurrence,
                });
                Decision::Unchanged
            } else {
                let annotated = candidate.annotate(&self.note);
                warn!(
                    identifier = %candidate.identifier,
                    existing = same_name[0].literal.as_deref().unwrap_or("<non-literal>"),
                    generated = %candidate.literal(),
                    "conflicting declaration; inserting annotated copy"
                );
                last_processed = Some(Anchor::AfterPlanned {
                    index: plan.insertions.len(),
                });
                plan.insertions.push(Insertion {
                    anchor: Anchor::AfterExisting {
                        member: key,
                        occurrence: 0,
                    },
                    member: MemberKey::field(&candidate.identifier),
                    text: annotated.declaration(),
                    literal: Some(annotated.literal()),
                    conflict: true,
                });
                Decision::Conflicting
            };

            debug!(
                identifier = %candidate.identifier,
                decision = decision.display_name(),
                "merge decision"
            );
            plan.decisions.push(ConstantDecision {
                identifier: candidate.identifier.clone(),
                decision,
            });
        }
        plan
    }

    /// Full edit plan for one class.
    ///
    /// Instructions come in this order: constant insertions, schema member
    /// insertions, Parcelable member removals, Parcelable member appends, and
    /// finally the interface declaration. The default constructor is only
    /// appended when no constructor survives the removals.
    pub fn plan_class(&self, selection: ArtifactSelection<'_>, snapshot: &ClassSnapshot) -> EditPlan {
        let mut plan = EditPlan::default();
        let mut inserted = 0usize;

        if let Some(schema) = selection.schema {
            let constants = self.plan_constants(&schema.constants, &snapshot.declarations());
            inserted += constants.insertions.len();
            plan.instructions
                .extend(constants.insertions.into_iter().map(Instruction::Insert));
            plan.decisions = constants.decisions;

            for artifact in schema.members() {
                if let Some(insertion) = self.reconcile_member(&artifact, snapshot) {
                    inserted += 1;
                    plan.instructions.push(Instruction::Insert(insertion));
                }
            }
        }

        if let Some(parcelable) = selection.parcelable {
            for member in parcelable.replaced_members() {
                if snapshot.contains(&member) {
                    debug!(member = %member, "replacing existing parcelable member");
                    plan.instructions.push(Instruction::Remove { member });
                }
            }
            let default_constructor =
                MemberKey::method(&parcelable.class_name, Vec::<String>::new());
            let keeps_constructor = declares_constructor(snapshot, parcelable);
            for artifact in parcelable.members() {
                if keeps_constructor && artifact.member == default_constructor {
                    debug!(member = %artifact.member, "class declares a constructor; skipping default");
                    continue;
                }
                inserted += 1;
                plan.instructions.push(Instruction::Insert(Insertion {
                    anchor: Anchor::EndOfClass,
                    member: artifact.member,
                    text: artifact.text,
                    literal: None,
                    conflict: false,
                }));
            }
            if !snapshot.implements(PARCELABLE_INTERFACE) {
                plan.instructions.push(Instruction::ImplementInterface {
                    interface: PARCELABLE_INTERFACE.to_string(),
                });
            }
        }

        info!(
            instructions = plan.instructions.len(),
            insertions = inserted,
            conflicts = plan.conflicts(),
            "planned class edits"
        );
        plan
    }

    /// Schema members are compared by text, ignoring whitespace.
    fn reconcile_member(&self, artifact: &MemberArtifact, snapshot: &ClassSnapshot) -> Option<Insertion> {
        let annotated = format!("//{}\n{}", self.note, artifact.text);
        let same_key: Vec<_> = snapshot
            .members
            .iter()
            .filter(|member| member.key() == artifact.member)
            .collect();

        if same_key.is_empty() {
            debug!(member = %artifact.member, "member missing; appending");
            return Some(Insertion {
                anchor: Anchor::EndOfClass,
                member: artifact.member.clone(),
                text: artifact.text.clone(),
                literal: None,
                conflict: false,
            });
        }

        let identical = same_key.iter().any(|member| {
            member.text().is_some_and(|text| {
                same_text(text, &artifact.text) || same_text(text, &annotated)
            })
        });
        if identical {
            debug!(member = %artifact.member, "member unchanged");
            return None;
        }

        warn!(member = %artifact.member, "member differs; inserting annotated copy");
        Some(Insertion {
            anchor: Anchor::AfterExisting {
                member: artifact.member.clone(),
                occurrence: 0,
            },
            member: artifact.member.clone(),
            text: annotated,
            literal: None,
            conflict: true,
        })
    }
}

/// A constructor that is not among the replaced Parcelable members.
fn declares_constructor(snapshot: &ClassSnapshot, parcelable: &ParcelableArtifacts) -> bool {
    let replaced = parcelable.replaced_members();
    snapshot.members.iter().any(|member| match member {
        Member::Method(method) => {
            method.name == parcelable.class_name && !replaced.contains(&member.key())
        }
        Member::Field(_) => false,
    })
}

fn same_text(left: &str, right: &str) -> bool {
    left.chars()
        .filter(|c| !c.is_whitespace())
        .eq(right.chars().filter(|c| !c.is_whitespace()))
}
