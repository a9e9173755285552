//! Game integration tests.

#![allow(clippy::float_cmp)]

use std::time::Duration;

use jouster::{
    Board, BoardError, Card, DECK_SIZE, Deck, Game, GameOptions, GameState, InspectTarget,
    MoveOutcome, Pile, RejectReason, Score, SelectOutcome, SetupError,
};

fn card(label: &str) -> Card {
    label.parse().unwrap()
}

fn cards(labels: &[&str]) -> Vec<Card> {
    labels.iter().map(|label| card(label)).collect()
}

fn layout(piles: &[&[&str]], deck: &[&str]) -> Game {
    let piles = piles
        .iter()
        .map(|labels| Pile::from_cards(cards(labels)).unwrap())
        .collect();
    Game::from_layout(
        GameOptions::default(),
        "fixture",
        Board::from_piles(piles, 3).unwrap(),
        Deck::from_draw_order(cards(deck)),
    )
    .unwrap()
}

fn tops(game: &Game) -> Vec<String> {
    game.board()
        .piles()
        .iter()
        .map(|pile| pile.top().to_string())
        .collect()
}

/// Plays the first available move, scanning piles in index order.
fn play_greedy_move(game: &mut Game) -> Option<MoveOutcome> {
    let (source, target) = (0..game.board().len()).find_map(|index| {
        game.board()
            .matching_targets(index)
            .first()
            .map(|&target| (index, target))
    })?;
    Some(game.attempt_move(source, target).unwrap())
}

#[test]
fn new_game_deals_twelve_piles_from_seed() {
    let game = Game::new(GameOptions::default(), "abc123").unwrap();

    assert_eq!(game.seed(), "abc123");
    assert_eq!(
        tops(&game),
        ["7H", "2C", "2H", "2D", "8D", "7S", "QS", "3D", "KH", "QH", "AH", "8C"]
    );
    assert_eq!(game.deck_remaining(), DECK_SIZE - 12);
    assert_eq!(game.inspect(InspectTarget::Deck).unwrap()[0], card("8H"));
    assert_eq!(game.state(), GameState::Idle);
    assert!(!game.is_over());
    assert_eq!(game.result(), None);
}

#[test]
fn setup_rejects_empty_seed_and_bad_options() {
    assert_eq!(
        Game::new(GameOptions::default(), "").unwrap_err(),
        SetupError::EmptySeed
    );
    assert_eq!(
        Game::new(GameOptions::default().with_piles(0), "abc123").unwrap_err(),
        SetupError::InvalidPileCount(0)
    );
    assert_eq!(
        Game::new(GameOptions::default().with_piles(53), "abc123").unwrap_err(),
        SetupError::InvalidPileCount(53)
    );
    assert_eq!(
        Game::new(GameOptions::default().with_columns(1), "abc123").unwrap_err(),
        SetupError::InvalidColumns(1)
    );
}

#[test]
fn layouts_must_match_their_options() {
    let board = |columns| {
        Board::from_piles(
            vec![Pile::new(card("AH")), Pile::new(card("AS"))],
            columns,
        )
    };
    let deck = || Deck::from_draw_order(Vec::new());

    assert_eq!(board(0).unwrap_err(), SetupError::InvalidColumns(0));
    assert_eq!(
        Game::from_layout(GameOptions::default(), "fixture", board(4).unwrap(), deck())
            .unwrap_err(),
        SetupError::ColumnMismatch {
            options: 3,
            board: 4,
        }
    );
    let four_wide = GameOptions::default().with_columns(4);
    assert_eq!(
        Game::from_layout(four_wide.with_piles(0), "fixture", board(4).unwrap(), deck())
            .unwrap_err(),
        SetupError::InvalidPileCount(0)
    );
    assert_eq!(
        Game::from_layout(four_wide, "", board(4).unwrap(), deck()).unwrap_err(),
        SetupError::EmptySeed
    );

    let game = Game::from_layout(four_wide, "fixture", board(4).unwrap(), deck()).unwrap();
    assert_eq!(game.options(), four_wide);
    assert!(game.board().has_any_move());
}

#[test]
fn restart_keeps_the_validated_layout() {
    let options = GameOptions::default().with_piles(9).with_columns(4);
    let mut game = Game::new(options, "abc123").unwrap();

    game.restart();
    assert_eq!(game.options(), options);
    assert_eq!(game.board().columns(), 4);
    assert_eq!(game.board().len(), 9);

    game.restart_with_seed("other").unwrap();
    assert_eq!(game.board().columns(), 4);
    assert_eq!(game.deck_remaining(), DECK_SIZE - 9);
}

#[test]
fn seeded_simple_merge_replenishes_from_deck() {
    let mut game = Game::new(GameOptions::default(), "abc123").unwrap();

    let outcome = game.attempt_move(2, 1).unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Accepted {
            target: 1,
            dealt: Some(card("8H")),
        }
    );
    assert_eq!(game.board().pile(1).unwrap().cards(), &cards(&["2C", "2H"])[..]);
    assert_eq!(game.board().len(), 12);
    assert_eq!(
        tops(&game),
        ["7H", "2H", "2D", "8D", "7S", "QS", "3D", "KH", "QH", "AH", "8C", "8H"]
    );
    assert_eq!(game.deck_remaining(), DECK_SIZE - 13);
}

#[test]
fn merge_without_deck_shrinks_board() {
    let mut game = layout(&[&["7H"], &["2C"], &["2H"], &["KS"]], &[]);

    let outcome = game.attempt_move(2, 1).unwrap();

    assert_eq!(outcome, MoveOutcome::Accepted { target: 1, dealt: None });
    assert_eq!(tops(&game), ["7H", "2H", "KS"]);
    assert_eq!(game.board().len(), 3);
}

#[test]
fn rejected_moves_leave_board_unchanged() {
    let mut game = layout(
        &[&["AH"], &["2C"], &["3D"], &["4S"], &["5H"], &["6H"]],
        &["9D"],
    );
    let before = game.board().clone();

    // 1 is neither the left neighbor (4) nor the pile above (2) of pile 5.
    assert_eq!(
        game.attempt_move(5, 1),
        Ok(MoveOutcome::Rejected(RejectReason::NotAdjacent))
    );
    assert_eq!(
        game.attempt_move(2, 1),
        Ok(MoveOutcome::Rejected(RejectReason::NoMatch))
    );
    assert_eq!(
        game.attempt_move(1, 2),
        Ok(MoveOutcome::Rejected(RejectReason::NotAdjacent))
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.deck_remaining(), 1);
}

#[test]
fn invalid_indices_are_errors_and_clear_selection() {
    let mut game = layout(&[&["AH"], &["2H"], &["KC"]], &[]);
    assert_eq!(
        game.attempt_move(7, 1),
        Err(BoardError::InvalidIndex { index: 7, len: 3 })
    );
    assert_eq!(
        game.select(3),
        Err(BoardError::InvalidIndex { index: 3, len: 3 })
    );
    assert_eq!(game.state(), GameState::Idle);

    game.select(1).unwrap();
    let before = game.board().clone();
    assert_eq!(
        game.select(5),
        Err(BoardError::InvalidIndex { index: 5, len: 3 })
    );
    assert_eq!(game.selected(), None);
    assert_eq!(game.board(), &before);

    game.select(2).unwrap();
    assert_eq!(
        game.attempt_move(2, 9),
        Err(BoardError::InvalidIndex { index: 9, len: 3 })
    );
    assert_eq!(game.state(), GameState::Idle);
}

#[test]
fn selection_state_machine() {
    let mut game = layout(&[&["7H"], &["2C"], &["2H"], &["KS"]], &["QD"]);

    assert_eq!(game.select(2), Ok(SelectOutcome::Selected(2)));
    assert_eq!(game.state(), GameState::Selected { index: 2 });
    assert_eq!(game.valid_targets(), [1]);

    // Same pile again is a move onto itself.
    assert_eq!(
        game.select(2),
        Ok(SelectOutcome::Moved(MoveOutcome::Rejected(
            RejectReason::NotAdjacent
        )))
    );
    assert_eq!(game.state(), GameState::Idle);
    assert!(game.valid_targets().is_empty());

    // Adjacent but not matching clears the selection too.
    game.select(3).unwrap();
    assert_eq!(
        game.select(2),
        Ok(SelectOutcome::Moved(MoveOutcome::Rejected(RejectReason::NoMatch)))
    );
    assert_eq!(game.selected(), None);

    game.select(2).unwrap();
    assert_eq!(
        game.select(1),
        Ok(SelectOutcome::Moved(MoveOutcome::Accepted {
            target: 1,
            dealt: Some(card("QD")),
        }))
    );
    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(tops(&game), ["7H", "2H", "KS", "QD"]);
}

#[test]
fn clear_selection_returns_to_idle() {
    let mut game = layout(&[&["7H"], &["7C"]], &[]);
    game.select(1).unwrap();
    game.clear_selection();
    assert_eq!(game.state(), GameState::Idle);
}

#[test]
fn inspect_is_read_only_and_top_first() {
    let mut game = layout(&[&["7H"], &["2C", "9C", "2H"], &["KS"]], &["QD", "JD"]);
    game.select(2).unwrap();
    let before = game.board().clone();

    assert_eq!(
        game.inspect(InspectTarget::Pile(1)),
        Ok(cards(&["2H", "9C", "2C"]))
    );
    assert_eq!(game.inspect(InspectTarget::Deck), Ok(cards(&["QD", "JD"])));
    assert_eq!(
        game.inspect(InspectTarget::Pile(3)),
        Err(BoardError::InvalidIndex { index: 3, len: 3 })
    );

    assert_eq!(game.selected(), Some(2));
    assert_eq!(game.board(), &before);
    assert_eq!(game.deck_remaining(), 2);
}

#[test]
fn game_over_with_cards_left_in_deck() {
    // 2H onto 2C, then the dealt 5S sees 9D (left) and KD (above): no match.
    let mut game = layout(&[&["KD"], &["2C"], &["2H"], &["9D"]], &["5S", "KC", "QC"]);

    assert!(game.attempt_move(2, 1).unwrap().is_accepted());

    assert!(game.is_over());
    assert_eq!(game.state(), GameState::GameOver);
    let result = game.result().unwrap();
    assert_eq!(result.piles_left, 4);
    assert_eq!(result.min_pile_size, 1);
    assert_eq!(result.deck_remaining, 2);
    assert_eq!(result.score, Score::from_board(4, 1));
}

#[test]
fn exhausted_deck_without_moves_ends_at_once() {
    let game = layout(
        &[
            &["AH", "2H"],
            &["3C", "4C"],
            &["5D", "6D"],
            &["7S", "8S"],
            &["9H", "10H", "JH"],
            &["KC", "JD", "QS"],
            &["3S", "9C", "QD", "KS", "6H"],
            &["AC", "2C", "5C", "8C", "9S"],
            &["2D", "3D", "4D", "7D", "KD"],
            &["6C", "4S", "AS", "QH", "10C"],
        ],
        &[],
    );

    assert!(game.is_over());
    let result = game.result().unwrap();
    assert_eq!(result.piles_left, 10);
    assert_eq!(result.min_pile_size, 2);
    assert_eq!(result.deck_remaining, 0);
    assert!((result.score.value() - 80.843_195_266).abs() < 1e-6);
    assert_eq!(result.score.to_string(), "80.8");
}

#[test]
fn intents_after_game_over_are_ignored() {
    let mut game = layout(&[&["AH"], &["2C"], &["3D"]], &["4S"]);
    assert!(game.is_over());
    let before = game.board().clone();

    assert_eq!(game.select(1), Ok(SelectOutcome::Ignored));
    assert_eq!(game.select(99), Ok(SelectOutcome::Ignored));
    assert_eq!(
        game.attempt_move(1, 0),
        Ok(MoveOutcome::Rejected(RejectReason::GameOver))
    );
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.board(), &before);
    assert_eq!(game.deck_remaining(), 1);
    assert_eq!(game.inspect(InspectTarget::Deck), Ok(cards(&["4S"])));
}

#[test]
fn score_formula() {
    let score = Score::from_board(10, 2);
    let raw = 52.0 - 10.0 + 2.0 / 52.0;
    assert_eq!(score.value(), 100.0 * raw / 52.0);
    assert!((score.value() - 80.844).abs() < 1e-3);

    assert_eq!(Score::from_board(0, 0).value(), 0.0);
    assert_eq!(Score::from_board(53, 1).value(), 0.0);
    assert_eq!(Score::from_board(1, 52).value(), 100.0);
}

#[test]
fn greedy_playthrough_is_reproducible() {
    let mut game = Game::new(GameOptions::default(), "abc123").unwrap();
    let mut moves = 0;

    while let Some(outcome) = play_greedy_move(&mut game) {
        assert!(outcome.is_accepted());
        moves += 1;
        assert_eq!(game.board().card_count() + game.deck_remaining(), DECK_SIZE);
    }

    assert_eq!(moves, 47);
    assert!(game.is_over());
    let result = game.result().unwrap();
    assert_eq!(result.piles_left, 5);
    assert_eq!(result.min_pile_size, 4);
    assert_eq!(result.deck_remaining, 0);
    assert!((result.score.value() - 90.532_544_378_698_22).abs() < 1e-9);
    assert_eq!(tops(&game), ["8H", "JS", "4C", "9S", "7D"]);
}

#[test]
fn game_over_flag_tracks_move_availability() {
    for entropy in 0..50 {
        let mut game = Game::with_fresh_seed(GameOptions::default(), entropy).unwrap();
        loop {
            assert_eq!(game.is_over(), !game.board().has_any_move());
            if play_greedy_move(&mut game).is_none() {
                break;
            }
        }
        assert!(game.is_over(), "seed {:?}", game.seed());
    }
}

#[test]
fn restart_replays_the_same_deal() {
    let mut game = Game::new(GameOptions::default(), "abc123").unwrap();
    let dealt = game.board().clone();
    game.attempt_move(2, 1).unwrap();
    game.select(0).unwrap();

    game.restart();

    assert_eq!(game.seed(), "abc123");
    assert_eq!(game.board(), &dealt);
    assert_eq!(game.deck_remaining(), DECK_SIZE - 12);
    assert_eq!(game.state(), GameState::Idle);
}

#[test]
fn restart_with_new_seed() {
    let mut game = Game::new(GameOptions::default(), "abc123").unwrap();

    assert_eq!(game.restart_with_seed(""), Err(SetupError::EmptySeed));
    assert_eq!(game.seed(), "abc123");

    game.restart_with_seed("other").unwrap();
    assert_eq!(game.seed(), "other");
    assert_eq!(
        game.board(),
        Game::new(GameOptions::default(), "other").unwrap().board()
    );

    game.restart_fresh(9);
    assert_eq!(game.seed().len(), 6);
    assert_ne!(game.seed(), "other");
}

#[test]
fn view_reflects_session() {
    let mut game = layout(&[&["7H"], &["2C"], &["2H"], &["KS"]], &["QD"]);
    game.select(2).unwrap();

    let view = game.view();
    assert_eq!(view.piles.len(), 4);
    assert_eq!(view.deck_remaining, 1);
    assert_eq!(view.selected, Some(2));
    assert_eq!(view.valid_targets, [1]);
    assert!(view.result.is_none());
}

#[test]
fn caller_driven_clock_times_the_game() {
    let dealt_at = Duration::from_secs(100);
    let mut game = Game::new_at(GameOptions::default(), "abc123", dealt_at).unwrap();
    assert_eq!(game.elapsed(), Some(Duration::ZERO));

    game.tick(dealt_at - Duration::from_secs(1));
    assert_eq!(game.elapsed(), Some(Duration::ZERO));

    let mut now = dealt_at + Duration::from_secs(3);
    game.tick(now);
    assert_eq!(game.view().elapsed, Some(Duration::from_secs(3)));

    loop {
        now += Duration::from_secs(1);
        game.tick(now);
        if play_greedy_move(&mut game).is_none() {
            break;
        }
    }

    // 47 moves, the last one played at 50 seconds.
    let result = game.result().unwrap();
    assert_eq!(result.elapsed, Some(Duration::from_secs(50)));
    game.tick(dealt_at + Duration::from_secs(1000));
    assert_eq!(game.elapsed(), Some(Duration::from_secs(50)));
    assert_eq!(game.view().elapsed, Some(Duration::from_secs(50)));

    game.restart();
    assert_eq!(game.elapsed(), Some(Duration::ZERO));
    game.tick(dealt_at + Duration::from_secs(1002));
    assert_eq!(game.elapsed(), Some(Duration::from_secs(2)));
}

#[cfg(feature = "std")]
#[test]
fn system_clock_ignores_ticks() {
    let mut game = Game::new(GameOptions::default(), "abc123").unwrap();
    game.tick(Duration::from_secs(1_000_000));
    assert!(game.elapsed().unwrap() < Duration::from_secs(1_000));
}

#[cfg(not(feature = "std"))]
#[test]
fn elapsed_is_unknown_without_a_clock() {
    let game = Game::new(GameOptions::default(), "abc123").unwrap();
    assert_eq!(game.elapsed(), None);
}

#[cfg(feature = "std")]
#[test]
fn elapsed_freezes_at_game_over() {
    let game = layout(&[&["AH"], &["2C"]], &[]);
    let frozen = game.result().unwrap().elapsed;
    assert!(frozen.is_some());
    std::thread::sleep(Duration::from_millis(5));
    assert_eq!(game.elapsed(), frozen);
}
