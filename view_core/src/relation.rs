//! The subset relation and the bookkeeping shared by its implementations.

use std::fmt::Display;

use crate::report::Report;

/// Whether `specific` is a view of `self` that a player could legitimately
/// hold: every fact it states is consistent with `self`, though it may
/// omit or blur facts that `self` has.
///
/// Every discrepancy found is written to `report`; a `false` result always
/// comes with at least one line. Checks never stop at the first problem
/// unless the two values turn out to describe different things entirely.
pub trait Subset {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool;
}

/// Accumulates discrepancies for one entity, labelling each line with the
/// entity it concerns.
pub(crate) struct Findings<'a> {
    report: &'a dyn Report,
    subject: String,
    consistent: bool,
}

impl<'a> Findings<'a> {
    pub(crate) fn new(report: &'a dyn Report, subject: impl Display) -> Self {
        Self {
            report,
            subject: subject.to_string(),
            consistent: true,
        }
    }

    /// Labels lines with `<kind> #<id>`.
    pub(crate) fn entity(report: &'a dyn Report, kind: &str, id: i32) -> Self {
        Self::new(report, format!("{} #{}", capitalize(kind), id))
    }

    pub(crate) fn fail(&mut self, problem: impl Display) {
        self.report.line(format!("{}: {}", self.subject, problem));
        self.consistent = false;
    }

    pub(crate) fn require(&mut self, holds: bool, problem: impl FnOnce() -> String) {
        if !holds {
            self.fail(problem());
        }
    }

    /// The two sides must agree on `field`.
    pub(crate) fn same<T>(&mut self, field: &str, general: &T, specific: &T)
    where
        T: PartialEq + Display + ?Sized,
    {
        if general != specific {
            self.fail(format!(
                "{field} differs: master has {general}, view has {specific}"
            ));
        }
    }

    /// A yes/no attribute the two sides must agree on.
    pub(crate) fn same_flag(&mut self, field: &str, general: bool, specific: bool) {
        if general != specific {
            self.fail(format!(
                "{field} differs: master says {}, view says {}",
                yes_no(general),
                yes_no(specific)
            ));
        }
    }

    /// An identifier the two sides must share; returns whether they do.
    pub(crate) fn same_id(&mut self, general: i32, specific: i32) -> bool {
        if general == specific {
            true
        } else {
            self.fail(format!("different ids: master #{general}, view #{specific}"));
            false
        }
    }

    /// A count that may only shrink in the view. A negative master value
    /// means the master itself does not know, so any view value fits.
    pub(crate) fn at_most_known<T>(&mut self, field: &str, general: T, specific: T)
    where
        T: PartialOrd + Display + Default,
    {
        if general >= T::default() && specific > general {
            self.fail(format!(
                "{field} is larger than in the master ({specific} > {general})"
            ));
        }
    }

    /// Runs a nested check whose lines are prefixed with this entity.
    pub(crate) fn nested(&mut self, check: impl FnOnce(&dyn Report) -> bool) {
        let scoped = crate::report::Scoped::new(self.report, self.subject.clone());
        if !check(&scoped) {
            self.consistent = false;
        }
    }

    pub(crate) fn finish(self) -> bool {
        self.consistent
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub(crate) fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DiagnosticBuffer;

    #[test]
    fn findings_keep_going_after_first_problem() {
        let buffer = DiagnosticBuffer::new();
        let mut findings = Findings::entity(&buffer, "mineral vein", 4);
        findings.same("kind", "gold", "silver");
        findings.same_flag("exposed", true, false);
        findings.at_most_known("population", 3, 2);
        assert!(!findings.finish());
        insta::assert_debug_snapshot!(buffer.lines(), @r###"
        [
            "Mineral vein #4: kind differs: master has gold, view has silver",
            "Mineral vein #4: exposed differs: master says yes, view says no",
        ]
        "###);
    }

    #[test]
    fn unknown_master_count_accepts_anything() {
        let buffer = DiagnosticBuffer::new();
        let mut findings = Findings::entity(&buffer, "grove", 1);
        findings.at_most_known("population", -1, 50);
        assert!(findings.finish());
        assert!(buffer.is_empty());
    }
}
