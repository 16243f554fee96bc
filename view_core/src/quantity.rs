use view_schema::Quantity;

use crate::relation::{Findings, Subset};
use crate::report::Report;

/// Same units, and no more of them than the master has.
impl Subset for Quantity {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::new(report, "Quantity");
        if self.units != specific.units {
            findings.fail(format!(
                "units differ: master counts {}, view counts {}",
                self.units, specific.units
            ));
            return findings.finish();
        }
        findings.require(specific.number <= self.number, || {
            format!("view has more ({specific}) than the master ({self})")
        });
        findings.finish()
    }
}
