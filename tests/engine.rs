extern crate tic_tac_toe;

use tic_tac_toe::game::{Board, Game, GameState, Mark, Position, BOARD_SIZE, WINNING_LINES};

fn play(moves: &[Position]) -> Game {
    let mut game = Game::new();
    for &position in moves {
        assert!(game.make_move(position), "move {} was rejected", position);
    }
    game
}

#[test]
fn out_of_range_placement_changes_nothing() {
    let mut board = Board::new();
    board.place_mark(5, Mark::O);
    let before = board.state();
    for position in (0..1).chain(10..64) {
        assert!(!board.place_mark(position, Mark::X));
        assert!(!board.place_mark(position, Mark::O));
    }
    assert_eq!(board.state(), before);
}

#[test]
fn second_placement_is_rejected() {
    for position in 1..=BOARD_SIZE {
        let mut board = Board::new();
        assert!(board.place_mark(position, Mark::O));
        assert!(!board.place_mark(position, Mark::X));
        assert_eq!(board.mark(position), Some(Mark::O));
    }
}

#[test]
fn clear_empties_any_board() {
    let mut board = Board::new();
    for position in [2, 4, 6, 8] {
        board.place_mark(position, Mark::X);
    }
    board.clear();
    assert_eq!(board.state(), [None; BOARD_SIZE]);
    assert!((1..=BOARD_SIZE).all(|p| board.is_empty(p)));
}

#[test]
fn x_wins_top_row() {
    let game = play(&[1, 4, 2, 5, 3]);
    assert_eq!(game.state(), GameState::XWon);
    assert_eq!(game.winner(), Some(Mark::X));
    let x = Some(Mark::X);
    let o = Some(Mark::O);
    assert_eq!(
        game.current_board(),
        [x, x, x, o, o, None, None, None, None]
    );
}

#[test]
fn full_board_without_line_is_draw() {
    let game = play(&[1, 2, 3, 4, 6, 5, 7, 9, 8]);
    assert_eq!(game.state(), GameState::Draw);
    assert_eq!(game.winner(), None);
    let board = game.current_board();
    assert!(board.iter().all(Option::is_some));
    for line in WINNING_LINES {
        let marks: Vec<_> = line.iter().map(|p| board[p - 1]).collect();
        assert!(!(marks[0] == marks[1] && marks[1] == marks[2]));
    }
}

#[test]
fn finished_game_ignores_moves() {
    for moves in [&[1, 4, 2, 5, 3][..], &[1, 2, 3, 4, 6, 5, 7, 9, 8][..]] {
        let mut game = play(moves);
        let snapshot = game.clone();
        for position in 0..=10 {
            assert!(!game.make_move(position));
        }
        assert_eq!(game, snapshot);
    }
}

#[test]
fn mutating_copy_leaves_original_untouched() {
    let original = play(&[5, 1, 9]);
    let board = original.current_board();
    let player = original.current_player();
    let state = original.state();

    let mut copy = original.clone();
    copy.make_move(3);
    copy.make_move(7);
    copy.reset();
    copy.make_move(2);

    assert_eq!(original.current_board(), board);
    assert_eq!(original.current_player(), player);
    assert_eq!(original.state(), state);
}

#[test]
fn snapshot_does_not_follow_game() {
    let mut game = play(&[1]);
    let snapshot = game.current_board();
    game.make_move(2);
    game.reset();
    assert_eq!(snapshot[0], Some(Mark::X));
    assert_eq!(snapshot[1], None);
}
