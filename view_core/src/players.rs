use view_schema::PlayerCollection;

use crate::relation::Subset;
use crate::report::Report;

/// Every player the view knows must exist in the master with the same
/// name and independence; which player is current is not compared.
impl Subset for PlayerCollection {
    fn is_subset(&self, specific: &Self, report: &dyn Report) -> bool {
        let mut consistent = true;
        for player in specific.iter() {
            match self.get(player.id) {
                None => {
                    report.line(format!("Extra player {player}"));
                    consistent = false;
                }
                Some(ours) if ours != player => {
                    report.line(format!(
                        "Player #{} differs: master has {ours}, view has {player}",
                        player.id
                    ));
                    consistent = false;
                }
                Some(_) => {}
            }
        }
        consistent
    }
}
