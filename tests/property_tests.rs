//! Property tests over random playouts of both games.

use proptest::prelude::*;

use board_rules::core::{AlignmentConfig, BoardConfig, GameRng, Grid, Player, Position, DISABLED};
use board_rules::games::{OthelloBoard, OthelloGame, TicTacToeBoard, TicTacToeGame};
use board_rules::rules::{BoardRules, Game};

/// Forbidden cells for an Othello board, never touching the centre 2x2.
fn othello_forbidden(n: usize, picks: &[(usize, usize)]) -> Vec<Position> {
    let half = n / 2;
    picks
        .iter()
        .map(|&(r, c)| Position::new(r % n, c % n))
        .filter(|p| !((half - 1..=half).contains(&p.row) && (half - 1..=half).contains(&p.col)))
        .collect()
}

fn alignment_forbidden(n: usize, picks: &[(usize, usize)]) -> Vec<Position> {
    picks.iter().map(|&(r, c)| Position::new(r % n, c % n)).collect()
}

/// Walk a random game, calling `check` on every (grid, player) reached.
fn walk<G: Game>(game: &G, seed: u64, mut check: impl FnMut(&Grid, Player, &[bool])) {
    let mut rng = GameRng::new(seed);
    let mut grid = game.initial_grid();
    let mut player = Player::White;

    for _ in 0..200 {
        let valids = game.valid_moves(&grid, player);
        check(&grid, player, &valids);
        if game.game_ended(&grid, player).is_terminal() {
            return;
        }
        let actions: Vec<usize> = valids
            .iter()
            .enumerate()
            .filter_map(|(a, &ok)| ok.then_some(a))
            .collect();
        let action = actions[rng.gen_index(actions.len())];
        let (next, next_player) = game.next_state(&grid, player, action);
        grid = next;
        player = next_player;
    }
}

/// Pass-only, or only moves and each one legal on the board.
fn check_valids(valids: &[bool], n: usize, is_legal: impl Fn(Position) -> bool) {
    let pass = valids[n * n];
    let moves: Vec<usize> = valids[..n * n]
        .iter()
        .enumerate()
        .filter_map(|(i, &ok)| ok.then_some(i))
        .collect();

    assert_ne!(pass, !moves.is_empty(), "exactly one of pass or moves");
    for index in moves {
        assert!(is_legal(Position::from_index(index, n)));
    }
}

fn check_canonical<G: Game>(game: &G, grid: &Grid) {
    for player in [Player::White, Player::Black] {
        let once = game.canonical_form(grid, player);
        assert_eq!(game.canonical_form(&once, player), *grid);
        for (a, b) in grid.cells().iter().zip(once.cells()) {
            if *a == DISABLED {
                assert_eq!(*b, DISABLED);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn othello_playouts_hold_invariants(
        half in 1usize..=4,
        picks in prop::collection::vec((0usize..8, 0usize..8), 0..6),
        seed in any::<u64>(),
    ) {
        let n = half * 2;
        let forbidden = othello_forbidden(n, &picks);
        let config = BoardConfig::new(n).with_forbidden_positions(&forbidden).unwrap();
        let game = OthelloGame::new(config.clone()).unwrap();

        walk(&game, seed, |grid, player, valids| {
            let board = OthelloBoard::new(grid.clone());
            check_valids(valids, n, |pos| board.is_legal_move(pos, player));
            check_canonical(&game, grid);
            assert!(grid.check_mask(&config.forbidden).is_ok());
        });
    }

    #[test]
    fn tictactoe_playouts_hold_invariants(
        n in 3usize..=6,
        k in 2usize..=6,
        picks in prop::collection::vec((0usize..6, 0usize..6), 0..5),
        seed in any::<u64>(),
    ) {
        let winning_amount = k.min(n);
        let config = AlignmentConfig::new(n)
            .with_winning_amount(winning_amount)
            .with_forbidden_positions(&alignment_forbidden(n, &picks))
            .unwrap();
        let game = TicTacToeGame::new(config.clone()).unwrap();
        let mask = &config.board.forbidden;

        walk(&game, seed, |grid, player, valids| {
            let board = TicTacToeBoard::new(grid.clone(), winning_amount, mask);
            check_valids(valids, n, |pos| board.is_legal_move(pos, player));
            check_canonical(&game, grid);
            assert!(grid.check_mask(mask).is_ok());
        });
    }

    #[test]
    fn open_board_expands_to_eight(
        n in 2usize..=7,
        seed in any::<u64>(),
    ) {
        let config = AlignmentConfig::new(n).with_winning_amount(n);
        let game = TicTacToeGame::new(config).unwrap();
        let mut rng = GameRng::new(seed);
        let mut grid = game.initial_grid();
        let mut player = Player::White;
        for _ in 0..rng.gen_index(n * n) {
            let open: Vec<usize> = (0..n * n).filter(|&i| grid.cells()[i] == 0).collect();
            let action = open[rng.gen_index(open.len())];
            let (next, next_player) = game.next_state(&grid, player, action);
            grid = next;
            player = next_player;
        }

        let policy: Vec<f32> = (0..=n * n).map(|i| i as f32).collect();
        let pairs = game.symmetries(&grid, &policy);
        prop_assert_eq!(pairs.len(), 8);
        for (image, pi) in pairs {
            prop_assert_eq!(image.count(1), grid.count(1));
            prop_assert_eq!(image.count(-1), grid.count(-1));
            prop_assert_eq!(pi[n * n], (n * n) as f32);
            for (i, &value) in image.cells().iter().enumerate() {
                prop_assert_eq!(value, grid.cells()[pi[i] as usize]);
            }
        }
    }
}
