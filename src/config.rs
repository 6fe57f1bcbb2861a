/// Side length of the square board.
pub const BOARD_SIZE: usize = 15;
/// Number of cells on the board, indexed row-major.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
/// Consecutive marks needed to win.
pub const WIN_LENGTH: usize = 5;

/// Environment variable holding the log level.
pub const LOG_ENV_VAR: &str = "GOMOKU_LOG";
