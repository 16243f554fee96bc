use view_schema::Unit;

use crate::members::{container_subject, members_are_subset};
use crate::relation::{Findings, Subset};
use crate::report::Report;

impl Subset for Unit {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::new(report, container_subject("unit", self.id, &self.name));
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.require(self.owner.id == specific.owner.id, || {
            format!(
                "owner differs: master has {}, view has {}",
                self.owner, specific.owner
            )
        });
        findings.same("kind", &self.kind, &specific.kind);
        findings.same("name", &self.name, &specific.name);
        members_are_subset(&mut findings, &self.members, &specific.members);
        findings.finish()
    }
}
