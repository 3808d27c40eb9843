//! End-to-end match scenarios driven through the controller.

use noughts_core::{
    Difficulty, Engine, Highlight, MatchConfig, MatchController, MatchEvent, Outcome, Phase,
    PlayerSpec, Position, RoundOpener, Sign, TaskKind, Verdict, classify,
};

fn human_match(config: MatchConfig) -> MatchController {
    MatchController::start(config, PlayerSpec::Human, PlayerSpec::Human, Engine::seeded(0))
}

fn marks(events: &[MatchEvent]) -> Vec<(usize, Sign)> {
    events
        .iter()
        .filter_map(|event| match event {
            MatchEvent::MarkPlaced { position, sign } => Some((position.to_index(), *sign)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_top_row_win_concludes_match_at_max_score() {
    let mut game = human_match(MatchConfig::new(1, 10));
    game.drain_events();

    for cell in [0, 3, 1, 4, 2] {
        assert!(game.cell_activated(cell));
    }
    let events = game.drain_events();

    assert_eq!(
        marks(&events),
        vec![
            (0, Sign::Cross),
            (3, Sign::Nought),
            (1, Sign::Cross),
            (4, Sign::Nought),
            (2, Sign::Cross),
        ]
    );
    assert_eq!(
        classify(game.board(), Position::TopRight),
        Outcome::Win(noughts_core::rules::LINES[0])
    );

    let tail = &events[events.len() - 4..];
    assert_eq!(
        tail,
        &[
            MatchEvent::CellsHighlighted {
                cells: vec![Position::TopLeft, Position::TopCenter, Position::TopRight],
                kind: Highlight::Win,
            },
            MatchEvent::ScoreChanged {
                sign: Sign::Cross,
                value: 1
            },
            MatchEvent::BoardLocked(true),
            MatchEvent::MatchConcluded(Verdict::Winner(Sign::Cross)),
        ]
    );
    assert_eq!(*game.player(Sign::Cross).score(), 1);
    assert_eq!(*game.player(Sign::Nought).score(), 0);
    assert_eq!(game.phase(), Phase::MatchOver);
    assert!(game.take_scheduled().is_empty());

    // Terminal: further input is ignored.
    assert!(!game.cell_activated(5));
}

#[test]
fn test_canonical_draw() {
    let mut game = human_match(MatchConfig::default());
    game.drain_events();

    // Ends as X O X / X O O / O X X.
    for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert!(game.cell_activated(cell));
        if cell != 8 {
            assert!(
                !game
                    .drain_events()
                    .iter()
                    .any(|e| matches!(e, MatchEvent::CellsHighlighted { .. })),
                "round ended early at {cell}"
            );
        }
    }

    let events = game.drain_events();
    assert!(events.contains(&MatchEvent::CellsHighlighted {
        cells: Position::ALL.to_vec(),
        kind: Highlight::Draw,
    }));
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, MatchEvent::ScoreChanged { .. }))
    );
    assert_eq!(*game.player(Sign::Cross).score(), 0);
    assert_eq!(*game.player(Sign::Nought).score(), 0);
    assert_eq!(game.phase(), Phase::RoundResolving);

    let pending = game.take_scheduled();
    assert_eq!(pending.len(), 1);
    assert_eq!(*pending[0].kind(), TaskKind::NextRound);
    assert_eq!(*pending[0].delay(), game.config().round_delay());
}

#[test]
fn test_play_again_resets_everything() {
    let mut game = human_match(MatchConfig::new(1, 10));
    for cell in [0, 3, 1, 4, 2] {
        game.cell_activated(cell);
    }
    assert_eq!(game.phase(), Phase::MatchOver);

    game.play_again();
    let view = game.view();
    assert_eq!(*view.phase(), Phase::AwaitingMove);
    assert_eq!(*view.round(), 1);
    assert!(view.board().is_empty());
    assert_eq!(*view.cross().score(), 0);
    assert_eq!(*view.nought().score(), 0);
    assert_eq!(*view.verdict(), None);
    assert_eq!(*view.turn(), Sign::Cross);
    assert!(*view.editable());
}

#[test]
fn test_next_round_events() {
    let mut game = human_match(MatchConfig::new(3, 10).with_round_opener(RoundOpener::Alternate));
    for cell in [0, 3, 1, 4, 2] {
        game.cell_activated(cell);
    }
    game.drain_events();
    let task = game.take_scheduled().remove(0);
    assert!(game.fire(task));
    assert_eq!(
        game.drain_events(),
        vec![
            MatchEvent::BoardCleared,
            MatchEvent::RoundChanged(2),
            MatchEvent::TurnChanged(Sign::Nought),
            MatchEvent::BoardLocked(false),
        ]
    );
    // The same task cannot fire twice.
    assert!(!game.fire(task));
}

#[test]
fn test_impossible_against_itself_always_ties() {
    for seed in 0..5 {
        let mut game = MatchController::start(
            MatchConfig::default(),
            PlayerSpec::Bot(Difficulty::Impossible),
            PlayerSpec::Bot(Difficulty::Impossible),
            Engine::seeded(seed),
        );
        game.settle();
        assert_eq!(game.phase(), Phase::MatchOver);
        assert_eq!(game.verdict(), Some(Verdict::Tie));
        assert_eq!(game.round(), *game.config().max_rounds());
        assert!(
            game.drain_events()
                .iter()
                .all(|e| !matches!(e, MatchEvent::CellsHighlighted { kind: Highlight::Win, .. }))
        );
    }
}

#[test]
fn test_impossible_never_loses_to_easy() {
    for seed in 0..10 {
        let mut game = MatchController::start(
            MatchConfig::default(),
            PlayerSpec::Bot(Difficulty::Easy),
            PlayerSpec::Bot(Difficulty::Impossible),
            Engine::seeded(seed),
        );
        game.settle();
        assert_eq!(*game.player(Sign::Cross).score(), 0);
        assert_ne!(game.verdict(), Some(Verdict::Winner(Sign::Cross)));
    }
}

#[test]
fn test_bot_then_human_turns() {
    let mut game = MatchController::start(
        MatchConfig::default(),
        PlayerSpec::Bot(Difficulty::Hard),
        PlayerSpec::Human,
        Engine::seeded(3),
    );
    assert!(!game.is_editable());
    let tasks = game.take_scheduled();
    assert_eq!(tasks.len(), 1);
    assert_eq!(*tasks[0].kind(), TaskKind::BotMove);
    assert_eq!(*tasks[0].delay(), game.config().bot_delay());

    assert!(game.fire(tasks[0]));
    assert_eq!(game.board().ply(), 1);
    assert_eq!(game.turn(), Sign::Nought);
    assert!(game.is_editable());
    assert!(game.take_scheduled().is_empty());

    let free = game.board().empty_cells()[0].to_index();
    assert!(game.cell_activated(free));
    assert!(!game.is_editable());
    assert_eq!(game.take_scheduled().len(), 1);
}

#[test]
fn test_scores_never_exceed_max() {
    for seed in 0..20 {
        let mut game = MatchController::start(
            MatchConfig::new(2, 5),
            PlayerSpec::Bot(Difficulty::Normal),
            PlayerSpec::Bot(Difficulty::Hard),
            Engine::seeded(seed),
        );
        game.settle();
        let view = game.view();
        assert_eq!(*view.phase(), Phase::MatchOver);
        assert!(*view.cross().score() <= 2);
        assert!(*view.nought().score() <= 2);
        assert!(*view.round() <= 5);
        assert!(view.verdict().is_some());
    }
}
