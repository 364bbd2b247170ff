//! Outcome detection checked against brute force and random play.
//!
//! - `line_winner` is compared with a hand-written oracle on every one of the
//!   3^9 ways to fill a 3x3 board with X, O or nothing
//! - GameState invariants are checked along seeded random games

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use tictactoe_core::{Board, Coordinate, GameState, Piece, Status};

/// The 8 lines of a 3x3 board as row-major indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Decode `n` in base 3 into cells: 0 = empty, 1 = X, 2 = O.
fn assignment(mut n: usize) -> [u8; 9] {
    let mut cells = [0u8; 9];
    for cell in cells.iter_mut() {
        *cell = (n % 3) as u8;
        n /= 3;
    }
    cells
}

fn oracle_owns_line(cells: &[u8; 9], who: u8) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == who))
}

fn build(cells: &[u8; 9], x: &Piece, o: &Piece) -> Board {
    let mut board = Board::default();
    for (i, &cell) in cells.iter().enumerate() {
        let piece = match cell {
            1 => x.clone(),
            2 => o.clone(),
            _ => continue,
        };
        board.place(Coordinate::from_index(i, 3), piece).unwrap();
    }
    board
}

#[test]
fn test_line_winner_matches_oracle_on_every_board() {
    let x = Piece::new("X");
    let o = Piece::new("O");
    let mut winning_boards = 0;

    for n in 0..3usize.pow(9) {
        let cells = assignment(n);
        let board = build(&cells, &x, &o);

        let x_owns = oracle_owns_line(&cells, 1);
        let o_owns = oracle_owns_line(&cells, 2);

        match board.line_winner() {
            Some(piece) if *piece == x => assert!(x_owns, "board {}", board),
            Some(piece) if *piece == o => assert!(o_owns, "board {}", board),
            Some(piece) => panic!("unexpected winner {} on {}", piece, board),
            None => assert!(!x_owns && !o_owns, "missed line on {}", board),
        }

        if let Some(line) = board.winning_line() {
            winning_boards += 1;
            assert_eq!(line.coordinates.len(), 3);
            for coordinate in &line.coordinates {
                assert_eq!(board.occupant(*coordinate), Some(&line.piece));
            }
        }

        let full = cells.iter().all(|&cell| cell != 0);
        assert_eq!(board.is_full(), full);
        assert_eq!(board.is_draw(), full && !x_owns && !o_owns);
    }

    assert!(winning_boards > 0);
}

#[test]
fn test_game_state_invariants_along_random_games() {
    let mut rng = StdRng::seed_from_u64(0x7ac7_0e);
    let x = Piece::new("X");
    let o = Piece::new("O");

    for _ in 0..500 {
        let mut game = GameState::new(x.clone(), o.clone()).unwrap();

        loop {
            // over <=> winner_exists || draw, and the two never coincide
            assert_eq!(game.over(), game.winner_exists() || game.draw());
            assert!(!(game.winner_exists() && game.draw()));

            // Repeated queries agree
            assert_eq!(game.board().line_winner(), game.board().line_winner());
            assert_eq!(game.draw(), game.draw());
            assert_eq!(game.over(), game.over());

            match game.status() {
                Status::Active => assert!(!game.over()),
                Status::Draw => assert!(game.draw()),
                Status::Win(piece) => assert_eq!(game.winner(), Ok(&piece)),
            }

            if game.over() {
                break;
            }

            let moves = game.legal_moves();
            assert_eq!(moves.len(), 9 - game.board().occupied_count());
            let &coordinate = moves.choose(&mut rng).unwrap();

            let before = game.clone();
            let mover = game.piece_to_move().clone();
            let next = game.apply(coordinate).unwrap();

            // The original is untouched
            assert_eq!(game, before);
            assert_eq!(game.piece_to_move(), &mover);
            assert!(game.board().is_vacant(coordinate));

            assert_eq!(next.board().occupant(coordinate), Some(&mover));
            assert_ne!(next.piece_to_move(), &mover);
            game = next;
        }
    }
}

#[test]
fn test_top_row_win_scenario() {
    let game = GameState::with_board(
        Piece::new("X"),
        Piece::new("O"),
        "XXX/OO./...".parse().unwrap(),
    )
    .unwrap();

    assert_eq!(game.status(), Status::Win(Piece::new("X")));
    assert_eq!(game.winner().unwrap(), &Piece::new("X"));
    assert_eq!(
        game.winning_line().unwrap(),
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(0, 2)
        ]
    );
}

#[test]
fn test_full_board_draw_scenario() {
    let game = GameState::with_board(
        Piece::new("X"),
        Piece::new("O"),
        "XOX/XOO/OXX".parse().unwrap(),
    )
    .unwrap();

    assert!(game.draw());
    assert!(!game.winner_exists());
    assert_eq!(game.status(), Status::Draw);
}
