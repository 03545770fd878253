//! Input files: two base sequences, each followed by its insertion indices.
//!
//! ```text
//! ACTG
//! 3
//! 6
//! 1
//! TACG
//! 1
//! 2
//! ```
//! Blank lines and surrounding whitespace are ignored. Lines of digits after
//! the first base are indices for `a`; the next line is the base of `b` and
//! every remaining line is an index for `b`.
use lsa_types::{generate::Recipe, Sequence};
use std::{num::ParseIntError, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("could not read input")]
    Io(#[from] std::io::Error),
    #[error("input has no {0} base sequence")]
    MissingSequence(&'static str),
    #[error("invalid insertion index {0:?}")]
    InvalidIndex(String, #[source] ParseIntError),
    #[error(transparent)]
    Generate(#[from] lsa_types::Error),
}

/// The parsed recipes for both sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub a: Recipe,
    pub b: Recipe,
}

impl Input {
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();

        let a_base = lines.next().ok_or(InputError::MissingSequence("first"))?;
        let mut a_indices = vec![];
        while let Some(line) = lines.next_if(|l| l.bytes().all(|c| c.is_ascii_digit())) {
            a_indices.push(parse_index(line)?);
        }

        let b_base = lines.next().ok_or(InputError::MissingSequence("second"))?;
        let b_indices = lines.map(parse_index).collect::<Result<_, _>>()?;

        Ok(Input {
            a: Recipe::new(a_base.as_bytes(), a_indices),
            b: Recipe::new(b_base.as_bytes(), b_indices),
        })
    }

    pub fn read(path: &Path) -> Result<Self, InputError> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Expand both recipes into the sequences to align.
    pub fn generate(&self) -> Result<(Sequence, Sequence), InputError> {
        Ok((self.a.expand()?, self.b.expand()?))
    }
}

fn parse_index(line: &str) -> Result<usize, InputError> {
    line.parse()
        .map_err(|e| InputError::InvalidIndex(line.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "ACTG\n3\n6\n1\nTACG\n1\n2\n9\n";

    #[test]
    fn parse_sample() {
        let input = Input::parse(SAMPLE).unwrap();
        assert_eq!(input.a, Recipe::new(b"ACTG", vec![3, 6, 1]));
        assert_eq!(input.b, Recipe::new(b"TACG", vec![1, 2, 9]));
        let (a, b) = input.generate().unwrap();
        assert_eq!(a, b"ACACTGACTACTGACTGGTGACTACTGACTGG");
        assert_eq!(Some(a.len()), input.a.expanded_len());
        assert_eq!(Some(b.len()), input.b.expanded_len());
    }

    #[test]
    fn whitespace_and_blank_lines() {
        let input = Input::parse("\n  AC \r\n\n 0\nGT\n\n  1  \n").unwrap();
        assert_eq!(input.a, Recipe::new(b"AC", vec![0]));
        assert_eq!(input.b, Recipe::new(b"GT", vec![1]));
    }

    #[test]
    fn without_indices() {
        let input = Input::parse("A\nC").unwrap();
        assert_eq!(input.generate().unwrap(), (b"A".to_vec(), b"C".to_vec()));
    }

    #[test]
    fn missing_sequences() {
        assert!(matches!(
            Input::parse(""),
            Err(InputError::MissingSequence("first"))
        ));
        assert!(matches!(
            Input::parse("ACGT\n1\n2\n"),
            Err(InputError::MissingSequence("second"))
        ));
    }

    #[test]
    fn bad_indices() {
        assert!(matches!(
            Input::parse("AC\nGT\nx\n"),
            Err(InputError::InvalidIndex(s, _)) if s == "x"
        ));
        let input = Input::parse("AC\n2\nGT\n").unwrap();
        assert!(matches!(
            input.generate(),
            Err(InputError::Generate(lsa_types::Error::InvalidInsertionIndex {
                index: 2,
                len: 2
            }))
        ));
    }
}
