// Integration tests for the recommendation quiz
//
// This test suite validates the complete workflow through the public API:
// 1. Create a quiz session
// 2. Answer questions in arbitrary order, including overwrites
// 3. Read the recommendation after each mutation
// 4. Verify the outcomes against the decision rules

use driveguide::quiz::{
    AnswerSet, Budget, Capacity, Choice, DriveKind, Portability, PrimaryUse, QuizSession,
    recommend,
};

/// Helper that replays a list of selections through a fresh session.
fn run_session(choices: &[Choice]) -> QuizSession {
    let mut session = QuizSession::new();
    for choice in choices {
        session.select(*choice);
    }
    session
}

#[test]
fn test_speed_focused_mobile_buyer_gets_ssd() {
    let session = run_session(&[
        Choice::Budget(Budget::Flexible),
        Choice::PrimaryUse(PrimaryUse::OsAndApps),
        Choice::Capacity(Capacity::Sub1Tb),
        Choice::Portability(Portability::Mobile),
    ]);

    let recommendation = session.recommendation().unwrap();
    assert_eq!(recommendation.kind, DriveKind::Ssd);
    assert_eq!(recommendation.title, "Recommendation: SSD");
}

#[test]
fn test_bulk_storage_buyer_on_a_budget_gets_hdd() {
    let session = run_session(&[
        Choice::Budget(Budget::Tight),
        Choice::PrimaryUse(PrimaryUse::Gaming),
        Choice::Capacity(Capacity::MultiTb),
        Choice::Portability(Portability::Stationary),
    ]);

    let recommendation = session.recommendation().unwrap();
    assert_eq!(recommendation.kind, DriveKind::Hdd);
}

#[test]
fn test_middle_of_the_road_gamer_gets_hybrid() {
    let session = run_session(&[
        Choice::Budget(Budget::Flexible),
        Choice::PrimaryUse(PrimaryUse::Gaming),
        Choice::Capacity(Capacity::OneToFourTb),
        Choice::Portability(Portability::Mobile),
    ]);

    assert_eq!(session.recommendation().unwrap().kind, DriveKind::Hybrid);
}

#[test]
fn test_tight_budget_overrides_ssd_leaning_answers() {
    // OS use on a laptop would normally point at an SSD; the tight budget
    // raises the HDD signal instead, landing on Hybrid.
    let session = run_session(&[
        Choice::Budget(Budget::Tight),
        Choice::PrimaryUse(PrimaryUse::OsAndApps),
        Choice::Capacity(Capacity::Sub1Tb),
        Choice::Portability(Portability::Mobile),
    ]);

    assert_eq!(session.recommendation().unwrap().kind, DriveKind::Hybrid);
}

#[test]
fn test_no_recommendation_until_final_answer() {
    let mut session = QuizSession::new();

    session.select(Choice::Budget(Budget::Moderate));
    assert!(session.recommendation().is_none());

    session.select(Choice::PrimaryUse(PrimaryUse::Editing));
    assert!(session.recommendation().is_none());

    session.select(Choice::Portability(Portability::Mobile));
    // Capacity is still missing, so there is nothing to show
    assert!(session.recommendation().is_none());

    session.select(Choice::Capacity(Capacity::Sub1Tb));
    assert!(session.recommendation().is_some());
}

#[test]
fn test_overwriting_an_answer_can_change_the_outcome() {
    let mut session = run_session(&[
        Choice::Budget(Budget::Flexible),
        Choice::PrimaryUse(PrimaryUse::OsAndApps),
        Choice::Capacity(Capacity::Sub1Tb),
        Choice::Portability(Portability::Mobile),
    ]);
    assert_eq!(session.recommendation().unwrap().kind, DriveKind::Ssd);

    // Re-answering the budget question flips the outcome
    session.select(Choice::Budget(Budget::Tight));
    assert_eq!(session.recommendation().unwrap().kind, DriveKind::Hybrid);

    // And flipping it back restores the original recommendation
    session.select(Choice::Budget(Budget::Flexible));
    assert_eq!(session.recommendation().unwrap().kind, DriveKind::Ssd);
}

#[test]
fn test_clearing_the_session_suppresses_the_recommendation() {
    let mut session = run_session(&[
        Choice::Budget(Budget::Moderate),
        Choice::PrimaryUse(PrimaryUse::Archive),
        Choice::Capacity(Capacity::MultiTb),
        Choice::Portability(Portability::Stationary),
    ]);
    assert!(session.recommendation().is_some());

    session.clear();

    assert!(session.recommendation().is_none());
    assert_eq!(session.answers(), &AnswerSet::default());
}

#[test]
fn test_every_complete_session_produces_one_of_three_outcomes() {
    let mut seen_kinds = std::collections::HashSet::new();

    for budget in Budget::ALL {
        for primary_use in PrimaryUse::ALL {
            for capacity in Capacity::ALL {
                for portability in Portability::ALL {
                    let session = run_session(&[
                        Choice::Budget(budget),
                        Choice::PrimaryUse(primary_use),
                        Choice::Capacity(capacity),
                        Choice::Portability(portability),
                    ]);

                    let recommendation = session
                        .recommendation()
                        .expect("complete session must recommend");
                    assert!(matches!(
                        recommendation.kind,
                        DriveKind::Ssd | DriveKind::Hdd | DriveKind::Hybrid
                    ));
                    seen_kinds.insert(recommendation.kind);
                }
            }
        }
    }

    // The answer space reaches all three outcomes
    assert_eq!(seen_kinds.len(), 3);
}

#[test]
fn test_session_and_direct_engine_agree() {
    let answers = AnswerSet {
        budget: Some(Budget::Moderate),
        primary_use: Some(PrimaryUse::Editing),
        capacity: Some(Capacity::OneToFourTb),
        portability: Some(Portability::Mobile),
    };

    let session = run_session(&[
        Choice::Budget(Budget::Moderate),
        Choice::PrimaryUse(PrimaryUse::Editing),
        Choice::Capacity(Capacity::OneToFourTb),
        Choice::Portability(Portability::Mobile),
    ]);

    assert_eq!(session.recommendation(), recommend(&answers));
}
