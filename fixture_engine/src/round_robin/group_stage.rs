//! Expansion of several round-robin groups into match plans.

use std::collections::{HashMap, HashSet};

use super::pairing::generate_group_pairings;
use crate::errors::{FixtureError, FixtureResult};
use crate::models::{Group, MatchOrigin, MatchPlan, MatchType, Participant};

/// Generate unscheduled match plans for every group of a stage
///
/// Groups are expanded in the given order. Each side is a `SeedRef` whose
/// seed is the entry's 1-based position in its group. Match ids follow
/// `{group_id}-r{round}-m{k}` where `k` counts matches within that round of
/// the group.
///
/// # Errors
///
/// * `NoGroupsProvided` - empty group list
/// * `DuplicateGroup` - two groups with the same id
/// * `DuplicateEntry` - an entry placed in two groups (or twice in one)
/// * `InsufficientEntries` - a group with fewer than two entries
pub fn generate_group_stage(stage_id: &str, groups: &[Group]) -> FixtureResult<Vec<MatchPlan>> {
    if groups.is_empty() {
        return Err(FixtureError::NoGroupsProvided);
    }

    let mut group_ids = HashSet::with_capacity(groups.len());
    let mut placed = HashSet::new();
    for group in groups {
        if !group_ids.insert(group.id.as_str()) {
            return Err(FixtureError::DuplicateGroup(group.id.clone()));
        }
        for entry_id in &group.entry_ids {
            if !placed.insert(entry_id.as_str()) {
                return Err(FixtureError::DuplicateEntry(entry_id.clone()));
            }
        }
    }

    let mut matches = Vec::new();
    for group in groups {
        let pairings = generate_group_pairings(&group.entry_ids, group.round_robin_mode)?;
        let positions: HashMap<&str, u32> = group
            .entry_ids
            .iter()
            .zip(1..)
            .map(|(entry_id, position)| (entry_id.as_str(), position))
            .collect();
        let side = |entry_id: String| Participant::SeedRef {
            seed: positions.get(entry_id.as_str()).copied().unwrap_or_default(),
            entry_id: Some(entry_id),
        };

        let mut current_round = 0;
        let mut position = 0;
        for pairing in pairings {
            if pairing.round_number != current_round {
                current_round = pairing.round_number;
                position = 0;
            }
            position += 1;

            matches.push(MatchPlan {
                id: format!("{}-r{}-m{}", group.id, pairing.round_number, position),
                stage_id: stage_id.to_string(),
                origin: MatchOrigin::Group {
                    group_id: group.id.clone(),
                },
                round_number: pairing.round_number,
                match_type: MatchType::Group,
                home: side(pairing.home),
                away: side(pairing.away),
                kickoff_at: None,
                venue_id: None,
            });
        }

        log::debug!(
            "Generated {} round robin for group {} ({} entries)",
            group.round_robin_mode,
            group.id,
            group.entry_ids.len()
        );
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryId;

    fn ids(names: &[&str]) -> Vec<EntryId> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_groups_expand_in_order() {
        let groups = vec![
            Group::new("g-a", "A", ids(&["a1", "a2", "a3", "a4"])),
            Group::new("g-b", "B", ids(&["b1", "b2", "b3"])).double(),
        ];
        let matches = generate_group_stage("league", &groups).unwrap();

        assert_eq!(matches.len(), 6 + 6);
        assert!(matches[..6].iter().all(|m| m.group_id() == Some("g-a")));
        assert!(matches[6..].iter().all(|m| m.group_id() == Some("g-b")));
        assert!(matches.iter().all(|m| m.match_type == MatchType::Group));
        assert!(matches.iter().all(|m| m.stage_id == "league"));
    }

    #[test]
    fn test_match_ids_count_within_round() {
        let groups = vec![Group::new("g", "A", ids(&["w", "x", "y", "z"]))];
        let matches = generate_group_stage("s", &groups).unwrap();

        let match_ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            match_ids,
            vec!["g-r1-m1", "g-r1-m2", "g-r2-m1", "g-r2-m2", "g-r3-m1", "g-r3-m2"]
        );
    }

    #[test]
    fn test_sides_hold_group_entries() {
        let groups = vec![Group::new("g", "A", ids(&["x", "y", "z"]))];
        let matches = generate_group_stage("s", &groups).unwrap();

        for m in &matches {
            let home = m.home.entry_id().unwrap();
            let away = m.away.entry_id().unwrap();
            assert_ne!(home, away);
            assert!(["x", "y", "z"].contains(&home));
            assert!(["x", "y", "z"].contains(&away));
        }
    }

    #[test]
    fn test_group_position_becomes_seed() {
        let groups = vec![Group::new("g", "A", ids(&["x", "y"]))];
        let matches = generate_group_stage("s", &groups).unwrap();

        assert_eq!(
            matches[0].home,
            Participant::SeedRef {
                seed: 2,
                entry_id: Some("y".to_string())
            }
        );
        assert_eq!(
            matches[0].away,
            Participant::SeedRef {
                seed: 1,
                entry_id: Some("x".to_string())
            }
        );
    }

    #[test]
    fn test_empty_stage_rejected() {
        let err = generate_group_stage("s", &[]).unwrap_err();
        assert!(matches!(err, FixtureError::NoGroupsProvided));
    }

    #[test]
    fn test_duplicate_group_rejected() {
        let groups = vec![
            Group::new("g", "A", ids(&["a", "b"])),
            Group::new("g", "B", ids(&["c", "d"])),
        ];
        let err = generate_group_stage("s", &groups).unwrap_err();
        assert!(matches!(err, FixtureError::DuplicateGroup(ref id) if id == "g"));
    }

    #[test]
    fn test_entry_in_two_groups_rejected() {
        let groups = vec![
            Group::new("g1", "A", ids(&["a", "b"])),
            Group::new("g2", "B", ids(&["b", "c"])),
        ];
        let err = generate_group_stage("s", &groups).unwrap_err();
        assert!(matches!(err, FixtureError::DuplicateEntry(ref id) if id == "b"));
    }

    #[test]
    fn test_small_group_fails_whole_stage() {
        let groups = vec![
            Group::new("g1", "A", ids(&["a", "b", "c"])),
            Group::new("g2", "B", ids(&["d"])),
        ];
        let err = generate_group_stage("s", &groups).unwrap_err();
        assert!(matches!(err, FixtureError::InsufficientEntries(1)));
    }
}
