//! Living fixtures whose size the view may underestimate or not know.

use view_schema::{Animal, Grove, Meadow, Shrub};

use crate::relation::{Findings, Subset};
use crate::report::Report;

impl Subset for Grove {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let label = if self.orchard { "orchard" } else { "grove" };
        let mut findings = Findings::entity(report, label, self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("kind", &self.kind, &specific.kind);
        findings.same_flag("orchard", self.orchard, specific.orchard);
        findings.same_flag("cultivated", self.cultivated, specific.cultivated);
        findings.at_most_known("population", self.population, specific.population);
        findings.finish()
    }
}

impl Subset for Meadow {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let label = if self.field { "field" } else { "meadow" };
        let mut findings = Findings::entity(report, label, self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("kind", &self.kind, &specific.kind);
        findings.same_flag("field", self.field, specific.field);
        findings.same_flag("cultivated", self.cultivated, specific.cultivated);
        findings.same("status", &self.status, &specific.status);
        findings.at_most_known("acreage", self.acres, specific.acres);
        findings.finish()
    }
}

impl Subset for Shrub {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "shrub", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("kind", &self.kind, &specific.kind);
        findings.at_most_known("population", self.population, specific.population);
        findings.finish()
    }
}

impl Subset for Animal {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "animal", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("kind", &self.kind, &specific.kind);
        findings.same_flag("talking", self.talking, specific.talking);
        findings.same("status", &self.status, &specific.status);
        if let Some(born) = specific.born {
            findings.require(self.born == Some(born), || match self.born {
                Some(ours) => format!("born on turn {born} in the view but {ours} in the master"),
                None => format!("view knows a birth turn ({born}) the master lacks"),
            });
        }
        findings.at_most_known("population", self.population, specific.population);
        findings.finish()
    }
}
