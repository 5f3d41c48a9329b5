//! Reference application of an edit plan.
//!
//! Produces the snapshot a host would hold after applying the plan in order.
//! Anchors that no longer resolve fall back to the end of the class.

use dbm_model::{ClassSnapshot, Member};
use tracing::debug;

use crate::plan::{Anchor, EditPlan, Instruction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Existing,
    Planned(usize),
}

pub fn apply(snapshot: &ClassSnapshot, plan: &EditPlan) -> ClassSnapshot {
    let mut slots: Vec<(Origin, Member)> = snapshot
        .members
        .iter()
        .cloned()
        .map(|member| (Origin::Existing, member))
        .collect();
    let mut interfaces = snapshot.interfaces.clone();
    let mut planned = 0usize;

    for instruction in &plan.instructions {
        match instruction {
            Instruction::Remove { member } => {
                slots.retain(|(_, existing)| &existing.key() != member);
            }
            Instruction::Insert(insertion) => {
                let position = match &insertion.anchor {
                    Anchor::EndOfClass => None,
                    Anchor::AfterExisting { member, occurrence } => slots
                        .iter()
                        .enumerate()
                        .filter(|(_, (origin, existing))| {
                            *origin == Origin::Existing && &existing.key() == member
                        })
                        .nth(*occurrence)
                        .map(|(idx, _)| idx + 1),
                    Anchor::AfterPlanned { index } => slots
                        .iter()
                        .position(|(origin, _)| *origin == Origin::Planned(*index))
                        .map(|idx| idx + 1),
                };
                let position = position.unwrap_or_else(|| {
                    if insertion.anchor != Anchor::EndOfClass {
                        debug!(anchor = %insertion.anchor, "anchor not found; appending");
                    }
                    slots.len()
                });
                slots.insert(position, (Origin::Planned(planned), insertion.to_member()));
                planned += 1;
            }
            Instruction::ImplementInterface { interface } => {
                if !interfaces.contains(interface) {
                    interfaces.push(interface.clone());
                }
            }
        }
    }

    ClassSnapshot {
        members: slots.into_iter().map(|(_, member)| member).collect(),
        interfaces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Insertion;
    use dbm_model::{ExistingDeclaration, MemberKey};

    fn field(identifier: &str) -> Member {
        Member::Field(ExistingDeclaration::new(identifier))
    }

    fn insert(anchor: Anchor, identifier: &str) -> Instruction {
        Instruction::Insert(Insertion {
            anchor,
            member: MemberKey::field(identifier),
            text: String::new(),
            literal: None,
            conflict: false,
        })
    }

    fn names(snapshot: &ClassSnapshot) -> Vec<String> {
        snapshot.members.iter().map(|m| m.key().to_string()).collect()
    }

    #[test]
    fn anchors_resolve_in_order() {
        let snapshot = ClassSnapshot::new().with_member(field("A")).with_member(field("Z"));
        let plan = EditPlan {
            instructions: vec![
                insert(
                    Anchor::AfterExisting {
                        member: MemberKey::field("A"),
                        occurrence: 0,
                    },
                    "B",
                ),
                insert(Anchor::AfterPlanned { index: 0 }, "C"),
                insert(Anchor::EndOfClass, "END"),
            ],
            decisions: Vec::new(),
        };
        assert_eq!(names(&apply(&snapshot, &plan)), vec!["A", "B", "C", "Z", "END"]);
    }

    #[test]
    fn removals_and_interfaces() {
        let snapshot = ClassSnapshot::new()
            .with_member(field("CREATOR"))
            .with_member(field("A"));
        let plan = EditPlan {
            instructions: vec![
                Instruction::Remove {
                    member: MemberKey::field("CREATOR"),
                },
                insert(Anchor::EndOfClass, "CREATOR"),
                Instruction::ImplementInterface {
                    interface: "android.os.Parcelable".to_string(),
                },
            ],
            decisions: Vec::new(),
        };
        let after = apply(&snapshot, &plan);
        assert_eq!(names(&after), vec!["A", "CREATOR"]);
        assert!(after.implements("android.os.Parcelable"));
    }
}
