//! Equipment and stored goods.

use view_schema::{Implement, ResourcePile};

use crate::relation::{Findings, Subset};
use crate::report::Report;

impl Subset for Implement {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "implement", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("kind", &self.kind, &specific.kind);
        findings.at_most_known("count", self.count, specific.count);
        findings.finish()
    }
}

impl Subset for ResourcePile {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "resource pile", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        pile_contents_are_subset(&mut findings, self, specific);
        findings.finish()
    }
}

/// Everything about a pile except its identity, for piles (such as a
/// community's yearly production) matched by what they hold.
pub(crate) fn pile_contents_are_subset(
    findings: &mut Findings<'_>,
    general: &ResourcePile,
    specific: &ResourcePile,
) {
    findings.same("kind", &general.kind, &specific.kind);
    findings.same("contents", &general.contents, &specific.contents);
    findings.nested(|report| general.quantity.is_subset(&specific.quantity, report));
    if let Some(created) = specific.created {
        findings.require(general.created == Some(created), || match general.created {
            Some(ours) => format!("created on turn {created} in the view but {ours} in the master"),
            None => format!("view knows a creation turn ({created}) the master lacks"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DiagnosticBuffer;
    use view_schema::Quantity;

    fn wheat(quantity: i32) -> ResourcePile {
        ResourcePile::new(20, "food", "wheat", Quantity::new(quantity, "bushels"))
    }

    #[test]
    fn pile_may_be_smaller_and_undated() {
        let buffer = DiagnosticBuffer::new();
        let master = wheat(40).with_created(3);
        assert!(master.is_subset(&wheat(12), &buffer));
        assert!(master.is_subset(&master.redacted(), &buffer));
        assert!(buffer.is_empty());
    }

    #[test]
    fn pile_problems_are_all_reported() {
        let buffer = DiagnosticBuffer::new();
        let master = wheat(40);
        let mut view = wheat(41).with_created(2);
        view.contents = "rye".into();
        assert!(!master.is_subset(&view, &buffer));
        insta::assert_debug_snapshot!(buffer.lines(), @r###"
        [
            "Resource pile #20: contents differs: master has wheat, view has rye",
            "Resource pile #20: Quantity: view has more (41 bushels) than the master (40 bushels)",
            "Resource pile #20: view knows a creation turn (2) the master lacks",
        ]
        "###);
    }

    #[test]
    fn implement_count() {
        let buffer = DiagnosticBuffer::new();
        let master = Implement::new(21, "plow", 2);
        assert!(master.is_subset(&Implement::new(21, "plow", 1), &buffer));
        assert!(!master.is_subset(&Implement::new(21, "plow", 3), &buffer));
        assert!(!master.is_subset(&Implement::new(21, "axe", 2), &buffer));
        assert_eq!(buffer.len(), 2);
    }
}
