//! Integration tests for the session state machine

use memory_puzzle::core::{Board, CueLog, GameSession, Layout, ManualClock, WinBonus};
use memory_puzzle::types::{
    Feedback, GameAction, LoopControl, Phase, SoundCue, FEEDBACK_TICKS, RESOLVE_DELAY_TICKS,
};

const DEAL: [u8; 16] = [3, 3, 0, 1, 0, 1, 2, 2, 4, 5, 4, 5, 6, 7, 6, 7];

fn session_with(deal: &[u8]) -> (GameSession, CueLog, ManualClock) {
    let board = Board::from_pair_ids(4, deal, Layout::nominal()).unwrap();
    let log = CueLog::new();
    let clock = ManualClock::new();
    let session = GameSession::from_board(board, 12345)
        .with_sound(Box::new(log.clone()))
        .with_clock(Box::new(clock.clone()));
    (session, log, clock)
}

fn settle(session: &mut GameSession) {
    for _ in 0..RESOLVE_DELAY_TICKS {
        session.tick();
    }
}

fn try_pair(session: &mut GameSession, a: usize, b: usize) {
    assert!(session.select(a), "select {a}");
    assert!(session.select(b), "select {b}");
    settle(session);
}

/// Index pairs of the current board, one per pair id.
fn solution(session: &GameSession) -> Vec<(usize, usize)> {
    let cards = session.board().cards();
    (0..session.total_pairs())
        .map(|id| {
            let mut it = cards
                .iter()
                .enumerate()
                .filter(|(_, c)| c.pair_id() as usize == id)
                .map(|(i, _)| i);
            (it.next().unwrap(), it.next().unwrap())
        })
        .collect()
}

#[test]
fn test_scenario_matching_pair() {
    let (mut s, _, _) = session_with(&DEAL);
    assert_eq!(s.board().card(0).unwrap().pair_id(), 3);
    assert_eq!(s.board().card(1).unwrap().pair_id(), 3);

    try_pair(&mut s, 0, 1);

    assert!(s.board().card(0).unwrap().is_matched());
    assert!(s.board().card(1).unwrap().is_matched());
    assert_eq!(s.score(), 10);
    assert_eq!(s.matches_found(), 1);
    assert_eq!(s.attempts(), 1);
}

#[test]
fn test_scenario_mismatched_pair() {
    let (mut s, _, _) = session_with(&DEAL);
    try_pair(&mut s, 2, 3);

    for i in [2, 3] {
        let card = s.board().card(i).unwrap();
        assert!(!card.is_flipped());
        assert!(!card.is_matched());
    }
    assert_eq!(s.score(), 0);
    assert_eq!(s.attempts(), 1);
    assert_eq!(s.matches_found(), 0);
    assert!(s.selection().is_empty());
}

#[test]
fn test_third_selection_while_resolving_changes_nothing() {
    let (mut s, log, _) = session_with(&DEAL);
    s.select(0);
    s.select(2);
    let before = s.snapshot();
    let cues = log.cues();

    assert!(!s.select(5));
    assert!(!s.on_pointer_down(400, 400));

    assert_eq!(s.snapshot(), before);
    assert_eq!(log.cues(), cues);
}

#[test]
fn test_matched_cards_stay_matched_for_the_rest_of_the_game() {
    let (mut s, _, _) = session_with(&DEAL);
    try_pair(&mut s, 0, 1);
    try_pair(&mut s, 2, 4);
    try_pair(&mut s, 3, 6);

    assert!(s.board().card(0).unwrap().is_matched());
    assert!(s.board().card(1).unwrap().is_matched());
    assert!(!s.select(0));
    assert!(!s.select(1));
    assert_eq!(s.matches_found(), 2);
    assert_eq!(s.attempts(), 3);
}

#[test]
fn test_feedback_lifecycle() {
    let (mut s, _, _) = session_with(&DEAL);
    try_pair(&mut s, 0, 1);
    let snap = s.snapshot();
    assert_eq!(snap.active_feedback(), Some(Feedback::Success));
    assert_eq!(snap.feedback_ticks, FEEDBACK_TICKS - 1);

    for _ in 0..FEEDBACK_TICKS {
        s.tick();
    }
    assert_eq!(s.snapshot().active_feedback(), None);

    try_pair(&mut s, 2, 3);
    assert_eq!(s.snapshot().active_feedback(), Some(Feedback::Failure));
}

#[test]
fn test_perfect_game_win_bonus() {
    let (mut s, log, clock) = session_with(&DEAL);
    clock.advance_secs(30);
    for (a, b) in solution(&s) {
        try_pair(&mut s, a, b);
    }

    assert!(s.is_won());
    assert_eq!(s.phase(), Phase::Won);
    // 8 * 10 + (300 - 30) + (16 - 8) * 5
    assert_eq!(
        s.win_bonus(),
        Some(WinBonus {
            time: 270,
            efficiency: 40,
            total: 310
        })
    );
    assert_eq!(s.score(), 80 + 310);
    assert_eq!(log.cues().iter().filter(|c| **c == SoundCue::Win).count(), 1);
}

#[test]
fn test_sloppy_slow_game_gets_no_bonus() {
    let (mut s, _, clock) = session_with(&DEAL);
    // 16 misses push attempts past 2 * total_pairs.
    for _ in 0..16 {
        try_pair(&mut s, 2, 3);
    }
    clock.advance_secs(301);
    for (a, b) in solution(&s) {
        try_pair(&mut s, a, b);
    }

    assert!(s.is_won());
    assert_eq!(s.attempts(), 24);
    assert_eq!(
        s.win_bonus(),
        Some(WinBonus {
            time: 0,
            efficiency: 0,
            total: 0
        })
    );
    assert_eq!(s.score(), 80);
    assert_eq!(s.efficiency_pct(), 66);
}

#[test]
fn test_score_increase_on_final_match() {
    let (mut s, _, clock) = session_with(&DEAL);
    let pairs = solution(&s);
    try_pair(&mut s, 2, 3);
    for &(a, b) in &pairs[..7] {
        try_pair(&mut s, a, b);
    }
    let before = s.score();
    clock.advance_secs(100);
    let (a, b) = pairs[7];
    try_pair(&mut s, a, b);

    // attempts = 9: 10 + (300 - 100) + (16 - 9) * 5
    assert_eq!(s.score() - before, 10 + 200 + 35);
}

#[test]
fn test_restart_from_won_deals_fresh_board() {
    let mut s = GameSession::new(4, 2024).unwrap();
    for (a, b) in solution(&s) {
        try_pair(&mut s, a, b);
    }
    assert!(s.is_won());

    assert_eq!(s.apply_action(GameAction::Restart), LoopControl::Continue);

    assert_eq!(s.phase(), Phase::Idle);
    assert_eq!(s.score(), 0);
    assert_eq!(s.attempts(), 0);
    assert_eq!(s.matches_found(), 0);
    assert_eq!(s.win_bonus(), None);
    assert!(!s.is_won());
    assert_eq!(s.board().pair_counts(), vec![2; 8]);
    assert!(s
        .board()
        .cards()
        .iter()
        .all(|c| !c.is_flipped() && !c.is_matched()));

    // The fresh board is playable to completion again.
    for (a, b) in solution(&s) {
        try_pair(&mut s, a, b);
    }
    assert!(s.is_won());
    assert_eq!(s.episode_id(), 1);
}

#[test]
fn test_snapshot_reflects_session() {
    let (mut s, _, _) = session_with(&DEAL);
    try_pair(&mut s, 0, 1);
    s.select(2);

    let snap = s.snapshot();
    assert_eq!(snap.grid_size, 4);
    assert_eq!(snap.cards.len(), 16);
    assert_eq!(snap.score, 10);
    assert_eq!(snap.matches_found, 1);
    assert_eq!(snap.total_pairs, 8);
    assert_eq!(snap.progress_pct, 12);
    assert_eq!(snap.cards[0].face, Some(3));
    assert!(snap.cards[0].matched);
    assert_eq!(snap.cards[2].face, Some(0));
    assert_eq!(snap.cards[5].face, None);
    assert!(snap.playable());
}

#[test]
fn test_flip_animation_completes_after_selection() {
    let (mut s, _, _) = session_with(&DEAL);
    s.select(0);
    assert!(s.is_animating());
    for _ in 0..10 {
        s.tick();
    }
    let card = s.board().card(0).unwrap();
    assert_eq!(card.flip_progress(), 1.0);
    assert!(card.is_face_visible());
}
