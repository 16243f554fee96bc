//! Id-keyed comparison of container contents.

use std::collections::HashMap;

use ahash::RandomState;

use view_schema::{FortressMember, UnitMember};

use crate::relation::{capitalize, Findings, Subset};
use crate::report::{Report, Silent};

/// Something that can sit inside a container.
pub trait Member: Subset + PartialEq + Sized {
    fn member_id(&self) -> i32;
    fn member_label(&self) -> &'static str;
    /// This member under another id.
    fn rekeyed(&self, id: i32) -> Self;
}

impl Member for FortressMember {
    fn member_id(&self) -> i32 {
        self.id()
    }

    fn member_label(&self) -> &'static str {
        self.label()
    }

    fn rekeyed(&self, id: i32) -> Self {
        self.with_id(id)
    }
}

impl Member for UnitMember {
    fn member_id(&self) -> i32 {
        self.id()
    }

    fn member_label(&self) -> &'static str {
        self.label()
    }

    fn rekeyed(&self, id: i32) -> Self {
        self.with_id(id)
    }
}

/// Every member the view lists must be present in the master and fit it;
/// members the view leaves out are fine. Anonymous members (negative ids)
/// need a master member of the same kind that accepts them under its own id.
pub(crate) fn members_are_subset<M: Member>(
    findings: &mut Findings<'_>,
    general: &[M],
    specific: &[M],
) {
    let by_id: HashMap<i32, &M, RandomState> = general
        .iter()
        .filter(|member| member.member_id() >= 0)
        .map(|member| (member.member_id(), member))
        .collect();
    for member in specific {
        let id = member.member_id();
        if id < 0 {
            anonymous_member(findings, general, member);
            continue;
        }
        match by_id.get(&id) {
            None => findings.fail(format!("extra {} #{id}", member.member_label())),
            Some(ours) => findings.nested(|report| ours.is_subset(member, report)),
        }
    }
}

fn anonymous_member<M: Member>(findings: &mut Findings<'_>, general: &[M], member: &M) {
    let same_kind: Vec<&M> = general
        .iter()
        .filter(|ours| ours.member_label() == member.member_label())
        .collect();
    match same_kind.as_slice() {
        [] => findings.fail(format!("extra anonymous {}", member.member_label())),
        [only] => findings.nested(|report| fits_rekeyed(*only, member, report)),
        [first, ..] => {
            if !same_kind
                .iter()
                .any(|ours| fits_rekeyed(*ours, member, &Silent))
            {
                findings.nested(|report| fits_rekeyed(*first, member, report));
            }
        }
    }
}

fn fits_rekeyed<M: Member>(general: &M, specific: &M, report: &dyn Report) -> bool {
    general.is_subset(&specific.rekeyed(general.member_id()), report)
}

/// A member whose id matches but whose kind does not.
pub(crate) fn different_member_types(
    report: &dyn Report,
    general_label: &str,
    specific_label: &str,
    id: i32,
) -> bool {
    Findings::entity(report, general_label, id).fail(format!(
        "different member types: master has {general_label}, view has {specific_label}"
    ));
    false
}

impl Subset for FortressMember {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        match (self, specific) {
            (FortressMember::Unit(ours), FortressMember::Unit(theirs)) => {
                ours.is_subset(theirs, report)
            }
            (FortressMember::Implement(ours), FortressMember::Implement(theirs)) => {
                ours.is_subset(theirs, report)
            }
            (FortressMember::ResourcePile(ours), FortressMember::ResourcePile(theirs)) => {
                ours.is_subset(theirs, report)
            }
            (ours, theirs) => {
                different_member_types(report, ours.label(), theirs.label(), theirs.id())
            }
        }
    }
}

impl Subset for UnitMember {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        match (self, specific) {
            (UnitMember::Worker(ours), UnitMember::Worker(theirs)) => {
                ours.is_subset(theirs, report)
            }
            (UnitMember::Animal(ours), UnitMember::Animal(theirs)) => {
                ours.is_subset(theirs, report)
            }
            (UnitMember::Implement(ours), UnitMember::Implement(theirs)) => {
                ours.is_subset(theirs, report)
            }
            (UnitMember::ResourcePile(ours), UnitMember::ResourcePile(theirs)) => {
                ours.is_subset(theirs, report)
            }
            (ours, theirs) => {
                different_member_types(report, ours.label(), theirs.label(), theirs.id())
            }
        }
    }
}

/// Label used for a container's own lines, e.g. `Fortress #3 (Keep)`.
pub(crate) fn container_subject(kind: &str, id: i32, name: &str) -> String {
    format!("{} #{id} ({name})", capitalize(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DiagnosticBuffer;
    use view_schema::{Animal, Implement, Quantity, ResourcePile, Worker};

    #[test]
    fn omitted_members_are_fine_extra_ones_are_not() {
        let buffer = DiagnosticBuffer::new();
        let general: Vec<UnitMember> = vec![
            Worker::new(1, "Bo", "human").into(),
            Implement::new(2, "cart", 1).into(),
        ];
        let omitted: Vec<UnitMember> = vec![Implement::new(2, "cart", 1).into()];
        let mut findings = Findings::new(&buffer, "Unit #9");
        members_are_subset(&mut findings, &general, &omitted);
        assert!(findings.finish());

        let added: Vec<UnitMember> = vec![Animal::new(3, "mule", "domesticated", 1).into()];
        let mut findings = Findings::new(&buffer, "Unit #9");
        members_are_subset(&mut findings, &general, &added);
        assert!(!findings.finish());
        assert_eq!(buffer.lines(), vec!["Unit #9: extra animal #3".to_string()]);
    }

    #[test]
    fn same_id_different_type() {
        let buffer = DiagnosticBuffer::new();
        let ours = UnitMember::from(Worker::new(1, "Bo", "human"));
        let theirs = UnitMember::from(Implement::new(1, "cart", 1));
        assert!(!ours.is_subset(&theirs, &buffer));
        insta::assert_debug_snapshot!(buffer.lines(), @r###"
        [
            "Worker #1: different member types: master has worker, view has implement",
        ]
        "###);
    }

    #[test]
    fn anonymous_members_match_by_content_not_id() {
        let buffer = DiagnosticBuffer::new();
        let general: Vec<UnitMember> = vec![Implement::new(-1, "rope", 3).into()];
        let fewer: Vec<UnitMember> = vec![Implement::new(-4, "rope", 2).into()];
        let mut findings = Findings::new(&buffer, "Unit #9");
        members_are_subset(&mut findings, &general, &general);
        members_are_subset(&mut findings, &general, &fewer);
        assert!(findings.finish());

        let more: Vec<UnitMember> = vec![
            Implement::new(-1, "rope", 5).into(),
            Animal::new(-1, "mule", "domesticated", 1).into(),
        ];
        let mut findings = Findings::new(&buffer, "Unit #9");
        members_are_subset(&mut findings, &general, &more);
        assert!(!findings.finish());
        insta::assert_debug_snapshot!(buffer.lines(), @r###"
        [
            "Unit #9: Implement #-1: count is larger than in the master (5 > 3)",
            "Unit #9: extra anonymous animal",
        ]
        "###);
    }

    #[test]
    fn redacted_anonymous_pile_fits_its_fortress() {
        let buffer = DiagnosticBuffer::new();
        let general: Vec<FortressMember> = vec![ResourcePile::new(
            -1,
            "food",
            "grain",
            Quantity::new(30, "bushels"),
        )
        .with_created(6)
        .into()];
        let redacted: Vec<FortressMember> = general.iter().map(FortressMember::redacted).collect();
        let mut findings = Findings::new(&buffer, "Fortress #3 (Keep)");
        members_are_subset(&mut findings, &general, &redacted);
        assert!(findings.finish());
        assert!(buffer.is_empty());
    }
}
