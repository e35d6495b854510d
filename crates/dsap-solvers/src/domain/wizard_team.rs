//! Highest-ability wizard team
//!
//! Wizards form a tree rooted at [`ROOT_WIZARD_ID`], apprentices being
//! children. A team may not contain a wizard together with any of their
//! direct apprentices, which makes this a maximum-weight independent set
//! on a tree:
//!
//! ```text
//! selected(w)   = ability(w) + Σ unselected(a)
//! unselected(w) = Σ max(selected(a), unselected(a))
//! ```
//!
//! summed over the direct apprentices `a` of `w`.
//!
//! The calculators assume the guild is a tree; `infra::guild_io` checks
//! that for every loaded file.

use crate::constants::ROOT_WIZARD_ID;
use crate::domain::strategy::Strategy;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// A single guild member
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wizard {
    pub id: u32,
    pub ability: i32,
    pub apprentice_ids: Vec<u32>,
}

impl Wizard {
    pub fn new(id: u32, ability: i32, apprentice_ids: Vec<u32>) -> Self {
        Self {
            id,
            ability,
            apprentice_ids,
        }
    }
}

/// All wizards of a guild, keyed by id
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardGuild {
    wizards: BTreeMap<u32, Wizard>,
}

impl WizardGuild {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a wizard, returning the one it replaced if the id was taken
    pub fn insert(&mut self, wizard: Wizard) -> Option<Wizard> {
        self.wizards.insert(wizard.id, wizard)
    }

    pub fn get(&self, id: u32) -> Option<&Wizard> {
        self.wizards.get(&id)
    }

    pub fn len(&self) -> usize {
        self.wizards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wizards.is_empty()
    }

    /// Wizards in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Wizard> + '_ {
        self.wizards.values()
    }

    /// Apprentices of `id` that are present in the guild
    ///
    /// Loaded guilds never list an undefined apprentice (the loader reports
    /// `FormatError::UnknownApprentice`); guilds assembled in code may, and
    /// such ids are skipped.
    fn apprentices(&self, id: u32) -> impl Iterator<Item = &Wizard> + '_ {
        self.get(id)
            .into_iter()
            .flat_map(|w| w.apprentice_ids.iter())
            .filter_map(|&a| self.get(a))
    }
}

impl FromIterator<Wizard> for WizardGuild {
    fn from_iter<I: IntoIterator<Item = Wizard>>(iter: I) -> Self {
        let mut guild = Self::new();
        for wizard in iter {
            guild.insert(wizard);
        }
        guild
    }
}

/// Best team ability for the guild rooted at [`ROOT_WIZARD_ID`]
///
/// A guild without the root wizard has an empty best team.
pub fn highest_team_ability(guild: &WizardGuild, strategy: Strategy) -> i64 {
    match strategy {
        Strategy::Recursive => highest_team_ability_recursive(guild),
        Strategy::Memoized => highest_team_ability_memoized(guild),
        Strategy::Iterative => highest_team_ability_iterative(guild),
    }
}

/// Mutual recursion over `selected` / `unselected`, no caching
pub fn highest_team_ability_recursive(guild: &WizardGuild) -> i64 {
    if guild.get(ROOT_WIZARD_ID).is_none() {
        return 0;
    }
    selected(guild, ROOT_WIZARD_ID).max(unselected(guild, ROOT_WIZARD_ID))
}

fn selected(guild: &WizardGuild, id: u32) -> i64 {
    let ability = guild.get(id).map_or(0, |w| i64::from(w.ability));
    ability
        + guild
            .apprentices(id)
            .map(|a| unselected(guild, a.id))
            .sum::<i64>()
}

fn unselected(guild: &WizardGuild, id: u32) -> i64 {
    guild
        .apprentices(id)
        .map(|a| selected(guild, a.id).max(unselected(guild, a.id)))
        .sum()
}

/// Recursion caching `(selected, unselected)` per wizard
pub fn highest_team_ability_memoized(guild: &WizardGuild) -> i64 {
    if guild.get(ROOT_WIZARD_ID).is_none() {
        return 0;
    }
    let mut memo = FxHashMap::default();
    memo.reserve(guild.len());
    let (sel, unsel) = team_memoized(guild, ROOT_WIZARD_ID, &mut memo);
    sel.max(unsel)
}

fn team_memoized(
    guild: &WizardGuild,
    id: u32,
    memo: &mut FxHashMap<u32, (i64, i64)>,
) -> (i64, i64) {
    if let Some(&pair) = memo.get(&id) {
        return pair;
    }

    let mut sel = guild.get(id).map_or(0, |w| i64::from(w.ability));
    let mut unsel = 0;
    for apprentice in guild.apprentices(id) {
        let (a_sel, a_unsel) = team_memoized(guild, apprentice.id, memo);
        sel += a_unsel;
        unsel += a_sel.max(a_unsel);
    }

    memo.insert(id, (sel, unsel));
    (sel, unsel)
}

/// Post-order traversal with an explicit stack
///
/// Does not recurse, so arbitrarily deep guilds are fine.
pub fn highest_team_ability_iterative(guild: &WizardGuild) -> i64 {
    if guild.get(ROOT_WIZARD_ID).is_none() {
        return 0;
    }

    // Pre-order ids; children always appear after their parent
    let mut order = Vec::with_capacity(guild.len());
    let mut stack = vec![ROOT_WIZARD_ID];
    while let Some(id) = stack.pop() {
        order.push(id);
        stack.extend(guild.apprentices(id).map(|a| a.id));
    }

    let mut teams: FxHashMap<u32, (i64, i64)> = FxHashMap::default();
    teams.reserve(order.len());
    for &id in order.iter().rev() {
        let mut sel = guild.get(id).map_or(0, |w| i64::from(w.ability));
        let mut unsel = 0;
        for apprentice in guild.apprentices(id) {
            let (a_sel, a_unsel) = teams.get(&apprentice.id).copied().unwrap_or((0, 0));
            sel += a_unsel;
            unsel += a_sel.max(a_unsel);
        }
        teams.insert(id, (sel, unsel));
    }

    teams
        .get(&ROOT_WIZARD_ID)
        .map_or(0, |&(sel, unsel)| sel.max(unsel))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(id: u32, ability: i32, apprentices: &[u32]) -> Wizard {
        Wizard::new(id, ability, apprentices.to_vec())
    }

    fn guild(wizards: Vec<Wizard>) -> WizardGuild {
        wizards.into_iter().collect()
    }

    fn all_strategies(guild: &WizardGuild) -> [i64; 3] {
        Strategy::ALL.map(|s| highest_team_ability(guild, s))
    }

    #[test]
    fn test_ten_wizard_tree() {
        let g = guild(vec![
            w(1, 31, &[2, 3, 4]),
            w(2, 46, &[]),
            w(3, 25, &[5, 6]),
            w(4, 6, &[7]),
            w(5, 82, &[8, 9]),
            w(6, 15, &[10]),
            w(7, 12, &[]),
            w(8, 17, &[]),
            w(9, 4, &[]),
            w(10, 48, &[]),
        ]);
        assert_eq!(all_strategies(&g), [188, 188, 188]);
    }

    #[test]
    fn test_chain() {
        let g = guild(vec![
            w(1, 19, &[2]),
            w(2, 16, &[3]),
            w(3, 8, &[4]),
            w(4, 17, &[5]),
            w(5, 15, &[6]),
            w(6, 6, &[]),
        ]);
        assert_eq!(all_strategies(&g), [42, 42, 42]);
    }

    #[test]
    fn test_single_wizard() {
        let g = guild(vec![w(1, 7, &[])]);
        assert_eq!(all_strategies(&g), [7, 7, 7]);
    }

    #[test]
    fn test_root_beats_apprentices() {
        let g = guild(vec![w(1, 100, &[2, 3]), w(2, 10, &[]), w(3, 20, &[])]);
        assert_eq!(all_strategies(&g), [100, 100, 100]);
    }

    #[test]
    fn test_apprentices_beat_root() {
        let g = guild(vec![w(1, 10, &[2, 3]), w(2, 10, &[]), w(3, 20, &[])]);
        assert_eq!(all_strategies(&g), [30, 30, 30]);
    }

    #[test]
    fn test_empty_guild() {
        assert_eq!(all_strategies(&WizardGuild::new()), [0, 0, 0]);
    }

    #[test]
    fn test_extreme_abilities_do_not_overflow() {
        let g = guild(vec![
            w(1, i32::MAX, &[2]),
            w(2, i32::MAX, &[3]),
            w(3, i32::MAX, &[]),
        ]);
        assert_eq!(all_strategies(&g), [2 * i64::from(i32::MAX); 3]);
    }

    #[test]
    fn test_insert_reports_replaced() {
        let mut g = WizardGuild::new();
        assert!(g.insert(Wizard::new(1, 5, vec![])).is_none());
        let old = g.insert(Wizard::new(1, 6, vec![])).unwrap();
        assert_eq!(old.ability, 5);
        assert_eq!(g.len(), 1);
    }
}
