//! Terrain features, minerals and markers: fixtures with nothing nested in them.

use view_schema::{
    AnimalTracks, Cache, Forest, Ground, Landmark, Mine, MineralVein, StoneDeposit, TextNote,
};

use crate::relation::{Findings, Subset};
use crate::report::Report;

impl Subset for Ground {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "ground", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("kind", &self.kind, &specific.kind);
        findings.same_flag("exposed", self.exposed, specific.exposed);
        findings.finish()
    }
}

impl Subset for Forest {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "forest", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("kind", &self.kind, &specific.kind);
        findings.same_flag("planted in rows", self.rows, specific.rows);
        findings.at_most_known("acreage", self.acres, specific.acres);
        findings.finish()
    }
}

/// Mountains, hills and oases carry nothing but their identity.
pub(crate) fn landmark_is_subset(
    label: &str,
    general: &Landmark,
    specific: &Landmark,
    report: &dyn Report,
) -> bool {
    Findings::entity(report, label, general.id).same_id(general.id, specific.id)
}

impl Subset for MineralVein {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "mineral vein", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("kind", &self.kind, &specific.kind);
        findings.same_flag("exposed", self.exposed, specific.exposed);
        findings.finish()
    }
}

impl Subset for StoneDeposit {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "stone deposit", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("stone", &self.stone, &specific.stone);
        findings.finish()
    }
}

impl Subset for Mine {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "mine", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("kind", &self.kind, &specific.kind);
        findings.same("status", &self.status, &specific.status);
        findings.finish()
    }
}

impl Subset for TextNote {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "text note", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("text", &self.text, &specific.text);
        findings.require(self.turn == specific.turn, || {
            format!(
                "turn differs: master has {:?}, view has {:?}",
                self.turn, specific.turn
            )
        });
        findings.finish()
    }
}

impl Subset for Cache {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "cache", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("kind", &self.kind, &specific.kind);
        findings.same("contents", &self.contents, &specific.contents);
        findings.finish()
    }
}

impl Subset for AnimalTracks {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "animal tracks", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("kind", &self.kind, &specific.kind);
        findings.finish()
    }
}
