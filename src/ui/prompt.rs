use std::io::{self, Write};

/// Ask a yes/no question on stdout and read the answer from stdin.
/// Anything other than "y"/"yes" (case-insensitive) counts as no.
pub fn confirm(question: &str) -> io::Result<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}
