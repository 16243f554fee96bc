//! Towns, cities and fortifications, and the community detail they may carry.

use view_schema::{CommunityStats, Player, Settlement};

use crate::relation::{capitalize, Findings, Subset};
use crate::report::Report;
use crate::stock::pile_contents_are_subset;

/// A view that does not know a settlement's name records it under this one.
pub const UNKNOWN_NAME: &str = "unknown";

/// Owner rule for settlements.
///
/// | master owner | view owner  | same id | fits |
/// |--------------|-------------|---------|------|
/// | any          | any         | yes     | yes  |
/// | owned        | owned       | no      | no   |
/// | owned        | independent | no      | yes  |
/// | independent  | independent | no      | yes  |
/// | independent  | owned       | no      | no   |
pub fn owner_matches(general: &Player, specific: &Player) -> bool {
    general.id == specific.id || specific.independent
}

/// Rules shared by the whole settlement family; `label` names the variant
/// ("town", "city", "fortification") in report lines.
pub fn settlement_is_subset(
    label: &str,
    general: &Settlement,
    specific: &Settlement,
    report: &dyn Report,
) -> bool {
    let mut findings = Findings::entity(report, label, general.id);
    if !findings.same_id(general.id, specific.id) {
        return false;
    }
    findings.require(
        specific.name == UNKNOWN_NAME || specific.name == general.name,
        || {
            format!(
                "name differs: master has {}, view has {}",
                general.name, specific.name
            )
        },
    );
    findings.same("status", &general.status, &specific.status);
    findings.same("size", &general.size, &specific.size);
    findings.require(owner_matches(&general.owner, &specific.owner), || {
        format!(
            "owner differs: master has {}, view has {}",
            general.owner, specific.owner
        )
    });
    match (&general.population, &specific.population) {
        (_, None) => {}
        (None, Some(_)) => findings.fail("view has community details the master lacks"),
        (Some(ours), Some(theirs)) => findings.nested(|report| ours.is_subset(theirs, report)),
    }
    findings.finish()
}

impl Subset for Settlement {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        settlement_is_subset("settlement", self, specific, report)
    }
}

impl Subset for CommunityStats {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut findings = Findings::new(report, "Community");
        findings.at_most_known("population", self.population, specific.population);
        for field in specific.worked_fields.difference(&self.worked_fields) {
            findings.fail(format!("works field #{field}, which the master does not"));
        }
        for (skill, level) in &specific.skill_levels {
            match self.skill_levels.get(skill) {
                None => findings.fail(format!("has skill {skill}, which the master does not")),
                Some(ours) => findings.require(level <= ours, || {
                    format!("{skill} level is higher than in the master ({level} > {ours})")
                }),
            }
        }
        let flows = [
            ("produces", &self.yearly_production, &specific.yearly_production),
            ("consumes", &self.yearly_consumption, &specific.yearly_consumption),
        ];
        for (verb, ours, theirs) in flows {
            for pile in theirs {
                let counterpart = ours
                    .iter()
                    .find(|candidate| candidate.kind == pile.kind && candidate.contents == pile.contents);
                match counterpart {
                    None => findings.fail(format!(
                        "{verb} {} {}, which the master does not",
                        pile.quantity, pile.contents
                    )),
                    Some(matched) => findings.nested(|report| {
                        let mut nested = Findings::new(report, capitalize(verb));
                        pile_contents_are_subset(&mut nested, matched, pile);
                        nested.finish()
                    }),
                }
            }
        }
        findings.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DiagnosticBuffer;
    use view_schema::{Quantity, ResourcePile, TownSize, TownStatus};

    fn town(name: &str, owner: Player) -> Settlement {
        Settlement::new(5, name, TownStatus::Active, TownSize::Medium, owner)
    }

    fn owned(id: i32) -> Player {
        Player::new(id, format!("Player {id}"))
    }

    fn fits(general: Player, specific: Player) -> bool {
        town("riverside", general).is_subset(&town("riverside", specific), &DiagnosticBuffer::new())
    }

    #[test]
    fn owner_same_id_fits() {
        assert!(fits(owned(1), owned(1)));
        assert!(fits(Player::independent(0), Player::independent(0)));
    }

    #[test]
    fn owner_owned_vs_other_owned_rejected() {
        assert!(!fits(owned(1), owned(2)));
    }

    #[test]
    fn owner_owned_vs_independent_fits() {
        assert!(fits(owned(1), Player::independent(0)));
    }

    #[test]
    fn owner_independent_vs_other_independent_fits() {
        assert!(fits(Player::independent(0), Player::independent(9)));
    }

    #[test]
    fn owner_independent_vs_owned_rejected() {
        assert!(!fits(Player::independent(0), owned(1)));
    }

    #[test]
    fn unknown_name_matches_only_from_the_view_side() {
        let buffer = DiagnosticBuffer::new();
        let named = town("riverside", owned(1)).with_dc(10);
        let unnamed = town(UNKNOWN_NAME, owned(1)).with_dc(3);
        assert!(named.is_subset(&unnamed, &buffer));
        assert!(buffer.is_empty());
        assert!(!unnamed.is_subset(&named, &buffer));
        insta::assert_debug_snapshot!(buffer.lines(), @r###"
        [
            "Settlement #5: name differs: master has unknown, view has riverside",
        ]
        "###);
    }

    #[test]
    fn status_size_and_owner_reported_together() {
        let buffer = DiagnosticBuffer::new();
        let master = town("riverside", owned(1));
        let view = Settlement::new(5, "riverside", TownStatus::Burned, TownSize::Large, owned(2));
        assert!(!settlement_is_subset("city", &master, &view, &buffer));
        assert_eq!(buffer.len(), 3);
        assert!(buffer.mentions("City #5: owner differs"));
    }

    #[test]
    fn community_details_are_optional_in_the_view() {
        let buffer = DiagnosticBuffer::new();
        let mut stats = CommunityStats::new(120);
        stats.worked_fields.extend([30, 31]);
        stats.skill_levels.insert("farming".into(), 4);
        stats.yearly_production.push(ResourcePile::new(
            -1,
            "food",
            "wheat",
            Quantity::new(200, "bushels"),
        ));
        let master = town("riverside", owned(1)).with_population(stats);
        assert!(master.is_subset(&town("riverside", owned(1)), &buffer));
        assert!(master.is_subset(&master, &buffer));
        assert!(buffer.is_empty());

        let bare = town("riverside", owned(1));
        assert!(!bare.is_subset(&master, &buffer));
        assert!(buffer.mentions("community details the master lacks"));
    }

    #[test]
    fn community_statistics_compare_by_content() {
        let buffer = DiagnosticBuffer::new();
        let mut master = CommunityStats::new(120);
        master.worked_fields.insert(30);
        master.skill_levels.insert("farming".into(), 4);
        master.yearly_consumption.push(ResourcePile::new(
            -1,
            "food",
            "bread",
            Quantity::new(50, "loaves"),
        ));

        let mut view = CommunityStats::new(100);
        view.worked_fields.insert(30);
        view.skill_levels.insert("farming".into(), 3);
        view.yearly_consumption.push(ResourcePile::new(
            -2,
            "food",
            "bread",
            Quantity::new(40, "loaves"),
        ));
        assert!(master.is_subset(&view, &buffer));
        assert!(buffer.is_empty());

        view.worked_fields.insert(31);
        view.skill_levels.insert("mining".into(), 1);
        view.yearly_production.push(ResourcePile::new(
            -3,
            "food",
            "fish",
            Quantity::new(1, "pounds"),
        ));
        assert!(!master.is_subset(&view, &buffer));
        insta::assert_debug_snapshot!(buffer.lines(), @r###"
        [
            "Community: works field #31, which the master does not",
            "Community: has skill mining, which the master does not",
            "Community: produces 1 pounds fish, which the master does not",
        ]
        "###);
    }
}
