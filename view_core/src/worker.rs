//! Workers and their job and skill trees.

use view_schema::{Job, Skill, Worker};

use crate::relation::{Findings, Subset};
use crate::report::Report;

impl Subset for Worker {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::entity(report, "worker", self.id);
        if !findings.same_id(self.id, specific.id) {
            return false;
        }
        findings.same("name", &self.name, &specific.name);
        findings.same("race", &self.race, &specific.race);
        if let Some(stats) = &specific.stats {
            match &self.stats {
                None => findings.fail("view has stats the master lacks"),
                Some(ours) => findings.require(ours == stats, || "stats differ".to_string()),
            }
        }
        for job in specific.jobs.iter().filter(|job| !job.is_empty()) {
            match self.jobs.iter().find(|ours| ours.name == job.name) {
                None => findings.fail(format!("has job {}, which the master does not", job.name)),
                Some(ours) => findings.nested(|report| ours.is_subset(job, report)),
            }
        }
        findings.finish()
    }
}

/// A view may know a job at a lower level than the master; at the same
/// level its skills must each fit the master's.
impl Subset for Job {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::new(report, format!("Job {}", self.name));
        if self.name != specific.name {
            findings.fail(format!("non-corresponding job {}", specific.name));
            return false;
        }
        if specific.level > self.level {
            findings.fail(format!(
                "level is higher than in the master ({} > {})",
                specific.level, self.level
            ));
        } else if specific.level == self.level {
            for skill in &specific.skills {
                match self.skill(&skill.name) {
                    Some(ours) => findings.nested(|report| ours.is_subset(skill, report)),
                    None if skill.is_empty() => {}
                    None => findings.fail(format!(
                        "has skill {}, which the master does not",
                        skill.name
                    )),
                }
            }
        }
        findings.finish()
    }
}

/// Level first; hours only break the tie.
impl Subset for Skill {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::new(report, format!("Skill {}", self.name));
        if self.name != specific.name {
            findings.fail(format!("non-corresponding skill {}", specific.name));
            return false;
        }
        if specific.level > self.level {
            findings.fail(format!(
                "level is higher than in the master ({} > {})",
                specific.level, self.level
            ));
        } else if specific.level == self.level && specific.hours > self.hours {
            findings.fail(format!(
                "more hours than in the master ({} > {})",
                specific.hours, self.hours
            ));
        }
        findings.finish()
    }
}
