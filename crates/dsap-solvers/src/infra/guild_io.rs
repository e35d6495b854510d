//! Wizard guild file I/O
//!
//! Format: the number of wizards on the first line, then one line per
//! wizard:
//!
//! ```text
//! <id> <ability>[: <apprentice id> <apprentice id> ...]
//! ```
//!
//! Wizards without apprentices may omit the `:` or leave the list empty.

use crate::constants::{APPRENTICE_SEPARATOR, ROOT_WIZARD_ID};
use crate::domain::input_format::{FormatError, LoadError};
use crate::domain::wizard_team::{Wizard, WizardGuild};
use crate::infra::line_reader::{
    LineReader, join_values, parse_id, parse_integer, read_input, split_horizontal,
};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

/// Load a wizard guild file
pub fn load_guild(path: impl AsRef<Path>) -> Result<WizardGuild, LoadError> {
    let text = read_input(path.as_ref())?;
    let guild = parse_guild(&text)?;
    debug!(
        "loaded guild of {} wizards from {}",
        guild.len(),
        path.as_ref().display()
    );
    Ok(guild)
}

/// Parse wizard guild text
///
/// Besides the line format, checks that ids are unique and that a
/// non-empty guild is a single tree rooted at the root wizard.
pub fn parse_guild(text: &str) -> Result<WizardGuild, FormatError> {
    let mut reader = LineReader::new(text);
    let count = reader.next_count()?;

    let mut guild = WizardGuild::new();
    for _ in 0..count {
        let line = reader.next_line()?;
        let wizard = parse_wizard(line, reader.line_number())?;
        let id = wizard.id;
        if guild.insert(wizard).is_some() {
            return Err(FormatError::DuplicateWizard {
                line: reader.line_number(),
                id,
            });
        }
    }
    reader.finish()?;

    check_references(&guild)?;
    Ok(guild)
}

fn parse_wizard(line: &str, line_number: usize) -> Result<Wizard, FormatError> {
    let sections: Vec<&str> = line.split(APPRENTICE_SEPARATOR).collect();
    if sections.len() > 2 {
        return Err(FormatError::WizardSections {
            line: line_number,
            found: sections.len(),
            content: line.to_string(),
        });
    }

    let details: Vec<&str> = split_horizontal(sections[0]).collect();
    if details.len() != 2 {
        return Err(FormatError::TokenCount {
            line: line_number,
            expected: 2,
            found: details.len(),
            content: sections[0].to_string(),
        });
    }
    let id = parse_id(details[0], line_number)?;
    let ability = parse_integer(details[1], line_number)?;

    let apprentice_ids = match sections.get(1) {
        Some(list) => split_horizontal(list)
            .map(|token| parse_id(token, line_number))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(Wizard::new(id, ability, apprentice_ids))
}

/// Check that the wizards form a single tree under the root
///
/// With every apprentice defined, each non-root wizard listed at most once
/// and every wizard reachable from the root, the guild is a tree.
fn check_references(guild: &WizardGuild) -> Result<(), FormatError> {
    if guild.is_empty() {
        return Ok(());
    }
    if guild.get(ROOT_WIZARD_ID).is_none() {
        return Err(FormatError::MissingRoot {
            root: ROOT_WIZARD_ID,
        });
    }

    let mut masters: FxHashMap<u32, u32> = FxHashMap::default();
    for wizard in guild.iter() {
        for &apprentice in &wizard.apprentice_ids {
            if guild.get(apprentice).is_none() {
                return Err(FormatError::UnknownApprentice {
                    wizard: wizard.id,
                    apprentice,
                });
            }
            if apprentice == ROOT_WIZARD_ID {
                return Err(FormatError::ApprenticedRoot {
                    root: ROOT_WIZARD_ID,
                    master: wizard.id,
                });
            }
            if let Some(first) = masters.insert(apprentice, wizard.id) {
                return Err(FormatError::MultipleMasters {
                    apprentice,
                    first,
                    second: wizard.id,
                });
            }
        }
    }

    // Every wizard has at most one master here, so the walk visits each once
    let mut reached: FxHashSet<u32> = FxHashSet::default();
    let mut stack = vec![ROOT_WIZARD_ID];
    while let Some(id) = stack.pop() {
        reached.insert(id);
        if let Some(wizard) = guild.get(id) {
            stack.extend(wizard.apprentice_ids.iter().copied());
        }
    }

    match guild.iter().find(|w| !reached.contains(&w.id)) {
        Some(wizard) => Err(FormatError::Unreachable { wizard: wizard.id }),
        None => Ok(()),
    }
}

/// Serialize a guild to its file format, wizards in ascending id order
pub fn serialize_guild(guild: &WizardGuild) -> String {
    let mut out = format!("{}\n", guild.len());
    for wizard in guild.iter() {
        out.push_str(&format!("{} {}", wizard.id, wizard.ability));
        if !wizard.apprentice_ids.is_empty() {
            out.push(APPRENTICE_SEPARATOR);
            out.push(' ');
            out.push_str(&join_values(&wizard.apprentice_ids));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guild() {
        let guild = parse_guild("3\n1 31: 2 3\n2 46\n3 25:\n").unwrap();
        assert_eq!(guild.len(), 3);
        assert_eq!(guild.get(1), Some(&Wizard::new(1, 31, vec![2, 3])));
        assert_eq!(guild.get(2), Some(&Wizard::new(2, 46, vec![])));
        assert_eq!(guild.get(3), Some(&Wizard::new(3, 25, vec![])));
    }

    #[test]
    fn test_serialize_guild() {
        let guild: WizardGuild = [
            Wizard::new(2, 5, vec![]),
            Wizard::new(1, -4, vec![2]),
        ]
        .into_iter()
        .collect();
        let text = serialize_guild(&guild);
        assert_eq!(text, "2\n1 -4: 2\n2 5\n");
        assert_eq!(parse_guild(&text).unwrap(), guild);
    }

    #[test]
    fn test_empty_guild() {
        assert!(parse_guild("0\n").unwrap().is_empty());
    }

    #[test]
    fn test_too_many_sections() {
        assert!(matches!(
            parse_guild("1\n1 3: 2: 4\n"),
            Err(FormatError::WizardSections {
                line: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_details_token_count() {
        assert!(matches!(
            parse_guild("1\n1 3 7: \n"),
            Err(FormatError::TokenCount {
                line: 2,
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_bad_apprentice_id() {
        assert!(matches!(
            parse_guild("2\n1 3: two\n2 1\n"),
            Err(FormatError::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn test_duplicate_wizard() {
        assert_eq!(
            parse_guild("2\n1 3\n1 4\n"),
            Err(FormatError::DuplicateWizard { line: 3, id: 1 })
        );
    }

    #[test]
    fn test_unknown_apprentice() {
        assert_eq!(
            parse_guild("1\n1 3: 9\n"),
            Err(FormatError::UnknownApprentice {
                wizard: 1,
                apprentice: 9
            })
        );
    }

    #[test]
    fn test_missing_root() {
        assert_eq!(
            parse_guild("1\n2 3\n"),
            Err(FormatError::MissingRoot { root: 1 })
        );
    }

    #[test]
    fn test_shared_apprentice() {
        assert_eq!(
            parse_guild("4\n1 0: 2 3\n2 0: 4\n3 0: 4\n4 10\n"),
            Err(FormatError::MultipleMasters {
                apprentice: 4,
                first: 2,
                second: 3
            })
        );
    }

    #[test]
    fn test_apprentice_listed_twice() {
        assert!(matches!(
            parse_guild("2\n1 0: 2 2\n2 7\n"),
            Err(FormatError::MultipleMasters { apprentice: 2, .. })
        ));
    }

    #[test]
    fn test_root_as_own_apprentice() {
        assert_eq!(
            parse_guild("1\n1 5: 1\n"),
            Err(FormatError::ApprenticedRoot { root: 1, master: 1 })
        );
    }

    #[test]
    fn test_self_cycle_below_root() {
        assert!(matches!(
            parse_guild("2\n1 0: 2\n2 3: 2\n"),
            Err(FormatError::MultipleMasters { apprentice: 2, .. })
        ));
    }

    #[test]
    fn test_detached_cycle() {
        assert_eq!(
            parse_guild("3\n1 4\n2 5: 3\n3 6: 2\n"),
            Err(FormatError::Unreachable { wizard: 2 })
        );
    }

    #[test]
    fn test_detached_wizard() {
        assert_eq!(
            parse_guild("2\n1 4\n2 5\n"),
            Err(FormatError::Unreachable { wizard: 2 })
        );
    }

    #[test]
    fn test_ability_out_of_range() {
        assert!(matches!(
            parse_guild("1\n1 5000000000000000000\n"),
            Err(FormatError::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn test_fewer_lines_than_declared() {
        assert_eq!(
            parse_guild("2\n1 3\n"),
            Err(FormatError::MissingLine { line: 3 })
        );
    }
}
