use memory_puzzle::core::{Board, GameSession, GameSnapshot, ManualClock};
use memory_puzzle::term::{FrameBuffer, GameView, Rgb, Viewport};
use memory_puzzle::types::{pair_color, RESOLVE_DELAY_TICKS};

const DEAL: [u8; 16] = [3, 3, 0, 1, 0, 1, 2, 2, 4, 5, 4, 5, 6, 7, 6, 7];

fn session_for(viewport: Viewport) -> GameSession {
    let view = GameView::new();
    let board = Board::from_pair_ids(4, &DEAL, view.layout_for(4, viewport)).unwrap();
    GameSession::from_board(board, 1).with_clock(Box::new(ManualClock::new()))
}

fn settle(session: &mut GameSession, ticks: u32) {
    for _ in 0..ticks {
        session.tick();
    }
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_string(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_draws_title_hud_and_hints() {
    let vp = Viewport::new(80, 24);
    let mut session = session_for(vp);
    settle(&mut session, 10);
    let fb = GameView::new().render(&session.snapshot(), vp);

    assert!(fb.row_string(0).contains("Memory Puzzle"));
    let hud = fb.row_string(1);
    assert!(hud.contains("Score: 0"));
    assert!(hud.contains("Attempts: 0"));
    assert!(hud.contains("Time: 0s"));
    assert!(hud.contains("Matches: 0/8"));
    assert!(fb.row_string(2).contains("0%"));
    assert!(fb.row_string(22).contains("Click cards to flip them"));
    assert!(fb.row_string(23).contains("Press R to restart"));
}

#[test]
fn term_view_draws_card_borders_at_layout_rects() {
    let vp = Viewport::new(80, 24);
    let mut session = session_for(vp);
    settle(&mut session, 10);
    let snap = session.snapshot();
    let fb = GameView::new().render(&snap, vp);

    for card in &snap.cards {
        let r = card.rect;
        assert_eq!(fb.get(r.x, r.y).unwrap().ch, '┌');
        assert_eq!(fb.get(r.x + r.w - 1, r.y + r.h - 1).unwrap().ch, '┘');
    }
}

#[test]
fn term_view_shows_face_color_once_flipped() {
    let vp = Viewport::new(80, 24);
    let mut session = session_for(vp);
    settle(&mut session, 10);
    session.select(0);
    settle(&mut session, 10);

    let snap = session.snapshot();
    let fb = GameView::new().render(&snap, vp);
    let r = snap.cards[0].rect;
    let inside = fb.get(r.x + 1, r.y + 1).unwrap();
    assert_eq!(inside.style.bg, Rgb::from(pair_color(3)));

    let hidden = snap.cards[2].rect;
    assert_ne!(
        fb.get(hidden.x + 1, hidden.y + 1).unwrap().style.bg,
        Rgb::from(pair_color(0))
    );
}

#[test]
fn term_view_squishes_card_mid_flip() {
    let vp = Viewport::new(80, 24);
    let mut session = session_for(vp);
    settle(&mut session, 10);
    session.select(0);
    // 3 ticks = 0.45 progress: the back is nearly edge-on.
    settle(&mut session, 3);

    let snap = session.snapshot();
    let fb = GameView::new().render(&snap, vp);
    let r = snap.cards[0].rect;
    // Left edge column is background again.
    assert_ne!(fb.get(r.x, r.y).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_feedback_after_resolution() {
    let vp = Viewport::new(80, 24);
    let mut session = session_for(vp);
    session.select(0);
    session.select(1);
    settle(&mut session, RESOLVE_DELAY_TICKS);

    let fb = GameView::new().render(&session.snapshot(), vp);
    assert!(fb.row_string(3).contains("MATCH!"));
    assert!(fb.row_string(1).contains("Score: 10"));
    assert!(fb.row_string(2).contains("12%"));

    session.select(2);
    session.select(3);
    settle(&mut session, RESOLVE_DELAY_TICKS);
    let fb = GameView::new().render(&session.snapshot(), vp);
    assert!(fb.row_string(3).contains("Try Again"));
}

#[test]
fn term_view_draws_win_overlay() {
    let vp = Viewport::new(80, 24);
    let mut session = session_for(vp);
    for id in 0..8u8 {
        let idx: Vec<usize> = DEAL
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p == id)
            .map(|(i, _)| i)
            .collect();
        session.select(idx[0]);
        session.select(idx[1]);
        settle(&mut session, RESOLVE_DELAY_TICKS);
    }
    assert!(session.is_won());

    let fb = GameView::new().render(&session.snapshot(), vp);
    let text = screen_text(&fb);
    assert!(text.contains("Congratulations!"));
    assert!(text.contains("Final Score: 420"));
    assert!(text.contains("Attempts: 8"));
    assert!(text.contains("Efficiency: 200%"));
    assert!(text.contains("Press R to play again"));
    assert!(!text.contains("Click cards to flip them"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let snap = GameSnapshot::default();
    let fb = GameView::new().render(&snap, Viewport::new(3, 2));
    assert_eq!((fb.width(), fb.height()), (3, 2));
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let vp = Viewport::new(80, 24);
    let session = session_for(vp);
    let view = GameView::new();
    let mut fb = FrameBuffer::new(10, 10);
    view.render_into(&session.snapshot(), vp, &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    assert_eq!(fb, view.render(&session.snapshot(), vp));
}
