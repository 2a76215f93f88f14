//! Uniform random move selection

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::Board;

/// Pick any empty cell with equal probability.
///
/// # Panics
///
/// Panics if the board has no empty cells.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> usize {
    let empty = board.empty_cells();
    match empty.choose(rng) {
        Some(&pos) => pos,
        None => panic!("random_move on a full board"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_move_is_empty_cell() {
        let board = Board::from_codes([1, 2, 0, 1, 0, 2, 0, 1, 2]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pos = random_move(&board, &mut rng);
            assert!(!board.occupied(pos));
        }
    }

    #[test]
    fn test_random_move_single_choice() {
        let board = Board::from_codes([1, 2, 1, 1, 2, 2, 2, 1, 0]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_move(&board, &mut rng), 8);
    }

    #[test]
    fn test_random_move_covers_all_cells() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[random_move(&board, &mut rng)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_random_move_full_board_panics() {
        let board = Board::from_codes([1, 2, 1, 1, 2, 2, 2, 1, 1]);
        let mut rng = StdRng::seed_from_u64(0);
        random_move(&board, &mut rng);
    }
}
