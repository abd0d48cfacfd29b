use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line reader over stdin for the interactive session
pub fn stdin_lines() -> Lines<BufReader<Stdin>> {
    BufReader::new(tokio::io::stdin()).lines()
}
