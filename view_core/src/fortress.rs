use view_schema::Fortress;

use crate::members::{container_subject, members_are_subset};
use crate::relation::{Findings, Subset};
use crate::report::Report;

/// Unlike settlements, a fortress view gets no leniency on name or owner.
impl Subset for Fortress {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings =
            Findings::new(report, container_subject("fortress", self.id, &self.name));
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.require(self.owner.id == specific.owner.id, || {
            format!(
                "owner differs: master has {}, view has {}",
                self.owner, specific.owner
            )
        });
        findings.same("name", &self.name, &specific.name);
        findings.same("size", &self.size, &specific.size);
        members_are_subset(&mut findings, &self.members, &specific.members);
        findings.finish()
    }
}
