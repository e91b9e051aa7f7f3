//! "Guess the number" on the console.

use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

pub const RANGE: RangeInclusive<u32> = 1..=100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { attempts: u32 },
    /// Input ended before the number was found.
    Abandoned,
}

/// Plays one round against a secret drawn from `rng`. Every line read counts
/// as an attempt, including ones that are not a number.
pub fn play<R, W, G>(input: R, out: &mut W, rng: &mut G) -> io::Result<Outcome>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let secret = rng.random_range(RANGE);
    debug!("Secret number drawn.");
    play_with_secret(input, out, secret)
}

fn play_with_secret<R: BufRead, W: Write>(mut input: R, out: &mut W, secret: u32) -> io::Result<Outcome> {
    writeln!(out, "I picked a number from {} to {}. Try to guess it!", RANGE.start(), RANGE.end())?;

    let mut attempts = 0u32;
    let mut line = String::new();
    loop {
        write!(out, "Your guess: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(Outcome::Abandoned);
        }
        attempts += 1;

        let Ok(guess) = line.trim().parse::<i64>() else {
            writeln!(out, "Please enter a whole number.")?;
            continue;
        };
        match guess.cmp(&i64::from(secret)) {
            std::cmp::Ordering::Less => writeln!(out, "Too low.")?,
            std::cmp::Ordering::Greater => writeln!(out, "Too high.")?,
            std::cmp::Ordering::Equal => {
                writeln!(out, "Correct! You needed {attempts} attempts.")?;
                return Ok(Outcome::Solved { attempts });
            }
        }
    }
}

/// Runs the game on stdin / stdout.
pub fn run() -> io::Result<Outcome> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play(stdin.lock(), &mut stdout, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn transcript(input: &str, secret: u32) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = play_with_secret(input.as_bytes(), &mut out, secret).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn hints_then_solves() {
        let (outcome, text) = transcript("10\n90\n42\n", 42);
        assert_eq!(outcome, Outcome::Solved { attempts: 3 });
        assert!(text.contains("Too low."));
        assert!(text.contains("Too high."));
        assert!(text.contains("You needed 3 attempts"));
    }

    #[test]
    fn invalid_input_counts_and_is_reported() {
        let (outcome, text) = transcript("abc\n 7 \n", 7);
        assert_eq!(outcome, Outcome::Solved { attempts: 2 });
        assert!(text.contains("Please enter a whole number."));
    }

    #[test]
    fn eof_abandons() {
        let (outcome, _) = transcript("1\n2\n", 50);
        assert_eq!(outcome, Outcome::Abandoned);
    }

    #[test]
    fn seeded_secret_is_in_range_and_findable() {
        // Binary search always finds the secret within 7 guesses.
        let mut rng = StdRng::seed_from_u64(7);
        let secret = StdRng::seed_from_u64(7).random_range(RANGE);
        let (mut lo, mut hi) = (*RANGE.start(), *RANGE.end());
        let mut script = String::new();
        loop {
            let mid = (lo + hi) / 2;
            script.push_str(&format!("{mid}\n"));
            match mid.cmp(&secret) {
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid - 1,
                std::cmp::Ordering::Equal => break,
            }
        }
        let mut out = Vec::new();
        let outcome = play(script.as_bytes(), &mut out, &mut rng).unwrap();
        match outcome {
            Outcome::Solved { attempts } => assert!(attempts <= 7),
            Outcome::Abandoned => panic!("binary search script ran out"),
        }
    }
}
