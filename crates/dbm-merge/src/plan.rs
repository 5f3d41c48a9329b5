//! Merge plans and edit instructions.

use std::fmt;

use dbm_model::{ExistingDeclaration, ExistingMethod, Member, MemberKey};
use serde::{Deserialize, Serialize};

/// Where an insertion goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anchor {
    /// Append as the last member of the class.
    EndOfClass,
    /// After the `occurrence`-th existing member declared under `member`.
    AfterExisting { member: MemberKey, occurrence: usize },
    /// After the n-th insertion of the same plan.
    AfterPlanned { index: usize },
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfClass => write!(f, "end of class"),
            Self::AfterExisting { member, occurrence: 0 } => write!(f, "after {member}"),
            Self::AfterExisting { member, occurrence } => {
                write!(f, "after {member} (#{})", occurrence + 1)
            }
            Self::AfterPlanned { index } => write!(f, "after insertion #{}", index + 1),
        }
    }
}

/// One declaration to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insertion {
    pub anchor: Anchor,
    pub member: MemberKey,
    pub text: String,
    /// Quoted initializer for constant declarations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
    /// Inserted next to a differing declaration and flagged for review.
    pub conflict: bool,
}

impl Insertion {
    /// The member a host holds after applying this insertion.
    pub fn to_member(&self) -> Member {
        match &self.member {
            MemberKey::Field { name } => Member::Field(ExistingDeclaration {
                identifier: name.clone(),
                literal: self.literal.clone(),
                text: Some(self.text.clone()),
            }),
            MemberKey::Method { name, parameters } => Member::Method(ExistingMethod {
                name: name.clone(),
                parameters: parameters.clone(),
                text: Some(self.text.clone()),
            }),
        }
    }
}

/// Outcome for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// No declaration under this name; inserted.
    Insert,
    /// An identical declaration exists; nothing emitted.
    Unchanged,
    /// A differing declaration exists; an annotated copy is inserted after it.
    Conflicting,
}

impl Decision {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Unchanged => "unchanged",
            Self::Conflicting => "conflict",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantDecision {
    pub identifier: String,
    pub decision: Decision,
}

/// Ordered insertion plan for generated constants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePlan {
    pub insertions: Vec<Insertion>,
    /// One entry per candidate, in candidate order.
    pub decisions: Vec<ConstantDecision>,
}

impl MergePlan {
    pub fn is_noop(&self) -> bool {
        self.insertions.is_empty()
    }

    pub fn conflicts(&self) -> impl Iterator<Item = &Insertion> {
        self.insertions.iter().filter(|insertion| insertion.conflict)
    }

    pub fn count(&self, decision: Decision) -> usize {
        self.decisions
            .iter()
            .filter(|entry| entry.decision == decision)
            .count()
    }
}

/// One edit a host performs on the class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    /// Delete every existing member declared under the key.
    Remove { member: MemberKey },
    Insert(Insertion),
    /// Add a canonical interface name to the implements list.
    ImplementInterface { interface: String },
}

/// Ordered edits for one class. Hosts apply instructions in order.
///
/// [`Anchor::AfterPlanned`] indices count only `Insert` instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPlan {
    pub instructions: Vec<Instruction>,
    #[serde(default)]
    pub decisions: Vec<ConstantDecision>,
}

impl EditPlan {
    pub fn is_noop(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn insertions(&self) -> impl Iterator<Item = &Insertion> {
        self.instructions.iter().filter_map(|instruction| match instruction {
            Instruction::Insert(insertion) => Some(insertion),
            _ => None,
        })
    }

    pub fn removals(&self) -> impl Iterator<Item = &MemberKey> {
        self.instructions.iter().filter_map(|instruction| match instruction {
            Instruction::Remove { member } => Some(member),
            _ => None,
        })
    }

    pub fn conflicts(&self) -> usize {
        self.insertions().filter(|insertion| insertion.conflict).count()
    }
}
