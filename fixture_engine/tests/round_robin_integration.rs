//! Integration tests for round-robin group stages
//!
//! These tests cover pairing generation, slot assignment across several
//! groups and the resulting fixture codes.

#[cfg(test)]
mod round_robin_tests {
    use chrono::{DateTime, TimeZone, Utc};
    use fixture_engine::{
        EntryId, FixtureError, Group, RoundRobinMode, SlotConfig, VenueSlot, assemble_groups,
        assign_slots, generate_group_pairings, generate_group_stage,
    };
    use std::collections::{BTreeMap, BTreeSet, HashMap};

    fn entries(prefix: &str, n: usize) -> Vec<EntryId> {
        (1..=n).map(|i| format!("{prefix}{i}")).collect()
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 20, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_pair_counts_for_many_sizes() {
        for n in 2..=12 {
            let ids = entries("e", n);

            let single = generate_group_pairings(&ids, RoundRobinMode::Single).unwrap();
            assert_eq!(single.len(), n * (n - 1) / 2, "single, n = {n}");

            let double = generate_group_pairings(&ids, RoundRobinMode::Double).unwrap();
            assert_eq!(double.len(), n * (n - 1), "double, n = {n}");

            let mut meetings: HashMap<(&str, &str), usize> = HashMap::new();
            for p in &double {
                *meetings.entry((p.home.as_str(), p.away.as_str())).or_default() += 1;
            }
            // Every ordered pair exactly once means each pair met twice with sides swapped
            assert!(meetings.values().all(|&count| count == 1));
            assert_eq!(meetings.len(), n * (n - 1));
        }
    }

    #[test]
    fn test_odd_group_never_references_placeholder() {
        let ids = entries("odd", 7);
        let pairings = generate_group_pairings(&ids, RoundRobinMode::Double).unwrap();
        let known: BTreeSet<&str> = ids.iter().map(String::as_str).collect();

        assert!(pairings.iter().all(|p| known.contains(p.home.as_str())));
        assert!(pairings.iter().all(|p| known.contains(p.away.as_str())));
        assert!(pairings.iter().all(|p| p.home != p.away));
    }

    #[test]
    fn test_two_groups_share_venues_round_by_round() {
        let groups = vec![
            Group::new("north", "N", entries("n", 4)),
            Group::new("south", "S", entries("s", 4)),
        ];
        let venues = vec![
            VenueSlot::new("field-1"),
            VenueSlot::new("field-2"),
            VenueSlot::new("field-3"),
        ];
        let config = SlotConfig::new(start(), 25, 5);

        let matches = generate_group_stage("spring", &groups).unwrap();
        let matches = assign_slots(matches, &venues, &config).unwrap();
        let fixtures = assemble_groups(&groups, matches).unwrap();

        assert_eq!(fixtures.len(), 12);

        // Each round holds 4 matches: a wave of 3 and a wave of 1
        let mut waves: BTreeMap<DateTime<Utc>, Vec<&str>> = BTreeMap::new();
        for f in &fixtures {
            waves
                .entry(f.plan.kickoff_at.unwrap())
                .or_default()
                .push(f.plan.venue_id.as_deref().unwrap());
        }
        let sizes: Vec<usize> = waves.values().map(Vec::len).collect();
        assert_eq!(sizes, vec![3, 1, 3, 1, 3, 1]);
        for venues_in_wave in waves.values() {
            let unique: BTreeSet<&&str> = venues_in_wave.iter().collect();
            assert_eq!(unique.len(), venues_in_wave.len());
        }

        let first_wave: Vec<&str> = fixtures[..3].iter().map(|f| f.code.as_str()).collect();
        assert_eq!(first_wave, vec!["N-01", "N-02", "S-01"]);
    }

    #[test]
    fn test_group_codes_are_two_digit_and_sequential() {
        let groups = vec![Group::new("big", "B", entries("b", 6)).double()];
        let matches = generate_group_stage("s", &groups).unwrap();
        let fixtures = assemble_groups(&groups, matches).unwrap();

        let mut codes: Vec<&str> = fixtures.iter().map(|f| f.code.as_str()).collect();
        codes.sort_unstable();
        let expected: Vec<String> = (1..=30).map(|i| format!("B-{i:02}")).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_scheduling_errors_leave_no_output() {
        let groups = vec![Group::new("g", "A", entries("a", 4))];
        let matches = generate_group_stage("s", &groups).unwrap();
        let venues = vec![VenueSlot::new("v")];

        assert!(matches!(
            assign_slots(matches.clone(), &[], &SlotConfig::default()),
            Err(FixtureError::NoVenuesProvided)
        ));
        assert!(matches!(
            assign_slots(matches.clone(), &venues, &SlotConfig::new(start(), 0, 5)),
            Err(FixtureError::InvalidDuration(0))
        ));
        assert!(matches!(
            assign_slots(matches, &venues, &SlotConfig::new(start(), 30, -1)),
            Err(FixtureError::InvalidBreak(-1))
        ));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let groups = vec![
            Group::new("a", "A", entries("a", 5)).double(),
            Group::new("b", "B", entries("b", 6)),
        ];
        let first = generate_group_stage("s", &groups).unwrap();
        let second = generate_group_stage("s", &groups).unwrap();
        assert_eq!(first, second);
    }
}
