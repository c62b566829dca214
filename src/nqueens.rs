//! N-Queens solved by depth-first backtracking.
//!
//! The board is a column index per row; a prefix of placed rows is enough
//! to prune, so the search carries no other state.

use crate::error::PracticumError;

pub const MAX_N: usize = 20;

/// True when a queen at `(row, col)` attacks none of the queens already
/// placed in rows `0..row`.
pub fn is_safe(board: &[usize], row: usize, col: usize) -> bool {
    board.iter().take(row).enumerate().all(|(i, &c)| {
        c != col && (c as i64 - col as i64).abs() != (i as i64 - row as i64).abs()
    })
}

/// Validate a requested board size against the solver limits.
pub fn check_size(n: i64) -> Result<usize, PracticumError> {
    if n <= 0 {
        return Err(PracticumError::BoardTooSmall);
    }
    if n > MAX_N as i64 {
        return Err(PracticumError::BoardTooLarge(MAX_N));
    }
    Ok(n as usize)
}

/// Search all placements row by row, invoking `on_solution` with each
/// complete board. Returns the solution count.
pub fn solve(n: usize, mut on_solution: impl FnMut(&[usize])) -> u64 {
    let mut board = vec![0usize; n];
    let mut count = 0;
    place(0, n, &mut board, &mut count, &mut on_solution);
    count
}

fn place(
    row: usize,
    n: usize,
    board: &mut [usize],
    count: &mut u64,
    on_solution: &mut impl FnMut(&[usize]),
) {
    if row == n {
        *count += 1;
        on_solution(board);
        return;
    }
    for col in 0..n {
        if is_safe(board, row, col) {
            board[row] = col;
            place(row + 1, n, board, count, on_solution);
        }
    }
}

/// Board rows as printed: two-space indent, `Q`/`.` cells, one trailing
/// space per cell.
pub fn render(board: &[usize]) -> Vec<String> {
    let n = board.len();
    board
        .iter()
        .map(|&queen_col| {
            let mut row = String::from("  ");
            for c in 0..n {
                row.push(if c == queen_col { 'Q' } else { '.' });
                row.push(' ');
            }
            row
        })
        .collect()
}
