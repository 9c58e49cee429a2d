//! End-to-end flow: roster sync, entries, squads, lineups, chips, stats,
//! scoring, and standings across two gameweeks.

use chrono::{Duration, Utc};
use league_rules::{Chip, LineupCandidate, SquadViolation};
use league_service::{LeagueService, ServiceConfig, ServiceError};
use roster_catalog::{PlayerId, RosterFeedRecord};
use scoring_engine::{Points, StatFeedRecord};

/// Players 1-15 form a legal squad (2 QB, 5 RB, 5 WR, 1 TE, 1 K, 1 DST);
/// 16-18 are spare RB/WR/WR for transfers.
const SQUAD_GW1: [PlayerId; 15] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
const STARTERS: [PlayerId; 9] = [1, 3, 4, 5, 8, 9, 13, 14, 15];

fn roster() -> Vec<RosterFeedRecord> {
    let positions = [
        "QB", "QB", "RB", "RB", "RB", "RB", "RB", "WR", "WR", "WR", "WR", "WR", "TE", "K", "DST",
        "RB", "WR", "WR",
    ];
    positions
        .iter()
        .enumerate()
        .map(|(i, position)| RosterFeedRecord {
            external_id: format!("p{}", i + 1),
            name: format!("Player {}", i + 1),
            team: "BAL".to_string(),
            position: position.to_string(),
            is_active: true,
            depth_chart_order: None,
            years_experience: 0,
        })
        .collect()
}

fn stat(external_id: &str) -> StatFeedRecord {
    serde_json::from_value(serde_json::json!({ "external_id": external_id }))
        .expect("empty stat record parses")
}

fn service_with_roster() -> LeagueService {
    let service = LeagueService::new(ServiceConfig::default());
    let report = service.sync_roster(&roster()).unwrap();
    assert_eq!(report.inserted, 18);
    service
}

fn lineup(captain: PlayerId, vice: PlayerId, bench: &[PlayerId]) -> LineupCandidate {
    LineupCandidate {
        starters: STARTERS.to_vec(),
        bench: bench.to_vec(),
        captain,
        vice_captain: vice,
    }
}

#[test]
fn test_two_gameweek_season() {
    let service = service_with_roster();
    let now = Utc::now();

    let gw1 = service.create_gameweek(now + Duration::hours(1));
    let gw2 = service.create_gameweek(now + Duration::weeks(1));

    let alpha = service.register_entry("Alice", "Aardvarks");
    let bravo = service.register_entry("Bob", "Bulldogs");

    // --- GW1: drafts are free ---
    let draft = service.submit_squad(alpha.id, gw1.id, &SQUAD_GW1, None, now).unwrap();
    assert_eq!(draft.revision, 1);
    assert_eq!(draft.assessment.hit_points, 0);
    assert_eq!(draft.budget_remaining, alpha.budget - draft.total_cost);
    service.submit_squad(bravo.id, gw1.id, &SQUAD_GW1, None, now).unwrap();

    let bench = [2, 6, 7, 10, 11, 12];
    service.submit_lineup(alpha.id, gw1.id, &lineup(3, 1, &bench), None, now).unwrap();
    service.submit_lineup(bravo.id, gw1.id, &lineup(8, 9, &bench), None, now).unwrap();

    // --- GW1 stats ---
    let mut qb = stat("p1");
    qb.pass_yd = 250; // +10
    qb.pass_td = 2; // +8
    let mut rb = stat("p3");
    rb.rush_yd = 120; // +12
    rb.rush_td = 1; // +6
    let mut wr1 = stat("p8");
    wr1.rec = 5; // +2.5
    wr1.rec_yd = 70; // +7
    let mut wr2 = stat("p9");
    wr2.rec = 4; // +2
    wr2.rec_yd = 55; // +5
    let mut kicker = stat("p14");
    kicker.fg_made = 1; // +3
    kicker.xp_made = 2; // +2
    let mut dst = stat("p15");
    dst.dst_sacks = 2; // +2
    dst.points_allowed = 3; // +7
    let week1 = vec![qb, rb, wr1, wr2, kicker, dst];

    service.ingest_stat_lines(gw1.id, &week1).unwrap();

    // Scoring refuses an open gameweek
    assert!(matches!(
        service.run_scoring(gw1.id),
        Err(ServiceError::GameweekNotFinished { gameweek: 1 })
    ));

    service.finish_gameweek(gw1.id).unwrap();

    // Stats are immutable once the gameweek closes
    assert!(matches!(
        service.ingest_stat_lines(gw1.id, &[stat("p1")]),
        Err(ServiceError::GameweekFinished { gameweek: 1 })
    ));

    // Starter bases: 18 + 18 + 9.5 + 7 + 5 + 9 = 66.5
    let scored = service.run_scoring(gw1.id).unwrap();
    assert_eq!(scored.len(), 2);
    // Alpha captained the RB (18 base, doubled)
    assert_eq!(scored[0].score.total, Points::from_tenths(845));
    // Bravo captained a WR (9.5 base, doubled)
    assert_eq!(scored[1].score.total, Points::from_tenths(760));

    // Re-running the batch changes nothing
    service.run_scoring(gw1.id).unwrap();
    let table = service.standings();
    assert_eq!(table[0].team_name, "Aardvarks");
    assert_eq!(table[0].cumulative_points, Points::from_tenths(845));
    assert_eq!(table[1].cumulative_points, Points::from_tenths(760));

    // --- GW2: transfers and chips ---
    // Lineup before squad is a state conflict
    assert!(matches!(
        service.submit_lineup(bravo.id, gw2.id, &lineup(8, 9, &bench), None, now),
        Err(ServiceError::SquadNotSet { .. })
    ));

    // Alpha swaps three players; the bank rolled to 2 after GW1, so one
    // transfer is paid: hit = 4
    let squad_gw2: [PlayerId; 15] = [1, 2, 3, 4, 5, 6, 16, 8, 9, 10, 17, 18, 13, 14, 15];
    let moved = service.submit_squad(alpha.id, gw2.id, &squad_gw2, None, now).unwrap();
    assert_eq!(moved.assessment.changes, 3);
    assert_eq!(moved.assessment.free_used, 2);
    assert_eq!(moved.assessment.hit_points, 4);

    // A writer that never saw revision 1 loses; the stored squad stands
    assert!(matches!(
        service.submit_squad(alpha.id, gw2.id, &squad_gw2, None, now),
        Err(ServiceError::RevisionConflict { found: Some(1), .. })
    ));
    // Resubmitting against the current revision supersedes it
    let resubmitted = service.submit_squad(alpha.id, gw2.id, &squad_gw2, Some(1), now).unwrap();
    assert_eq!(resubmitted.revision, 2);

    // Bravo keeps the same squad (no changes, no hit) and plays the
    // triple captain
    let kept = service.submit_squad(bravo.id, gw2.id, &SQUAD_GW1, None, now).unwrap();
    assert_eq!(kept.assessment.changes, 0);
    assert_eq!(kept.assessment.hit_points, 0);
    service.activate_chip(bravo.id, gw2.id, Chip::TripleCaptain).unwrap();

    service
        .submit_lineup(alpha.id, gw2.id, &lineup(3, 1, &[2, 6, 16, 10, 17, 18]), None, now)
        .unwrap();
    service.submit_lineup(bravo.id, gw2.id, &lineup(8, 9, &bench), None, now).unwrap();

    let mut rb2 = stat("p3");
    rb2.rush_yd = 35; // +3
    let mut wr = stat("p8");
    wr.rec = 2; // +1
    wr.rec_td = 1; // +6
    service.ingest_stat_lines(gw2.id, &[rb2, wr]).unwrap();
    service.finish_gameweek(gw2.id).unwrap();

    // Both lineups field players 3 (base 3) and 8 (base 7)
    let scored = service.run_scoring(gw2.id).unwrap();
    // Alpha: 10 + 3 captain bonus - 4 hit
    assert_eq!(scored[0].score.total, Points::from_points(9));
    // Bravo: 10 + 14 triple-captain bonus
    assert_eq!(scored[1].score.total, Points::from_points(24));

    // Bravo overtakes on cumulative points
    let table = service.standings();
    assert_eq!(table[0].team_name, "Bulldogs");
    assert_eq!(table[0].cumulative_points, Points::from_points(100));
    assert_eq!(table[1].team_name, "Aardvarks");
    assert_eq!(table[1].cumulative_points, Points::from_tenths(935));
}

#[test]
fn test_wildcard_suspends_deadline_and_cost() {
    let service = service_with_roster();
    let now = Utc::now();

    let gw1 = service.create_gameweek(now + Duration::hours(1));
    let entry = service.register_entry("Cara", "Cheetahs");
    service.submit_squad(entry.id, gw1.id, &SQUAD_GW1, None, now).unwrap();
    service.finish_gameweek(gw1.id).unwrap();

    // GW2's deadline has already passed
    let gw2 = service.create_gameweek(now - Duration::hours(1));
    let squad_gw2: [PlayerId; 15] = [1, 2, 3, 4, 5, 6, 16, 8, 9, 10, 17, 18, 13, 14, 15];

    let rejection = service.submit_squad(entry.id, gw2.id, &squad_gw2, None, now).unwrap_err();
    match rejection {
        ServiceError::SquadRejected(rejection) => {
            assert!(rejection
                .violations
                .contains(&SquadViolation::DeadlinePassed { gameweek: gw2.id }));
        }
        other => panic!("expected a squad rejection, got {other}"),
    }

    // The wildcard suspends the deadline and makes the rebuild free
    service.activate_chip(entry.id, gw2.id, Chip::Wildcard).unwrap();
    let submission = service.submit_squad(entry.id, gw2.id, &squad_gw2, None, now).unwrap();
    assert_eq!(submission.assessment.changes, 3);
    assert_eq!(submission.assessment.hit_points, 0);
    assert_eq!(submission.assessment.free_used, 0);

    // Second season use of the same chip is refused
    let gw3 = service.create_gameweek(now + Duration::weeks(1));
    assert!(matches!(
        service.activate_chip(entry.id, gw3.id, Chip::Wildcard),
        Err(ServiceError::Chip(_))
    ));
}

#[test]
fn test_bench_boost_counts_bench_points() {
    let service = service_with_roster();
    let now = Utc::now();

    let gw1 = service.create_gameweek(now + Duration::hours(1));
    let entry = service.register_entry("Dana", "Drakes");
    service.submit_squad(entry.id, gw1.id, &SQUAD_GW1, None, now).unwrap();
    service.activate_chip(entry.id, gw1.id, Chip::BenchBoost).unwrap();
    service
        .submit_lineup(entry.id, gw1.id, &lineup(3, 1, &[2, 6, 7, 10, 11, 12]), None, now)
        .unwrap();

    // Captain scores 6; benched QB throws for 75 yards
    let mut rb = stat("p3");
    rb.rush_td = 1;
    let mut benched = stat("p2");
    benched.pass_yd = 75; // +3
    service.ingest_stat_lines(gw1.id, &[rb, benched]).unwrap();
    service.finish_gameweek(gw1.id).unwrap();

    let scored = service.run_scoring(gw1.id).unwrap();
    assert_eq!(scored[0].score.bench_points, Points::from_points(3));
    // 6 doubled + 3 bench
    assert_eq!(scored[0].score.total, Points::from_points(15));
}
