//! Merge planning for generated declarations.
//!
//! - **plan**: anchors, insertions and edit instructions
//! - **engine**: reconciliation of generated artifacts against a class snapshot
//! - **apply**: reference application of an edit plan to a snapshot
//!
//! Planning never fails and never deletes a user's declaration. The only
//! removals are the Parcelable members, which are regenerated as a whole.

pub mod apply;
pub mod engine;
pub mod plan;

pub use apply::apply;
pub use engine::{ArtifactSelection, MergeEngine};
pub use plan::{Anchor, ConstantDecision, Decision, EditPlan, Insertion, Instruction, MergePlan};
