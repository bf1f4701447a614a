use std::fmt;

use serde::{
  Deserialize,
  Serialize
};
use thiserror::Error;

pub const DEFAULT_MIN_TITLE_LEN: usize =
  5;

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum TitleError {
  #[error("title is empty")]
  Empty,

  #[error(
    "title has {len} characters, \
     needs more than {min}"
  )]
  TooShort { len: usize, min: usize }
}

/// Length gate shared by the add and
/// edit paths. A title passes when its
/// trimmed length is strictly greater
/// than `min_len_exclusive`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct TitleRule {
  pub min_len_exclusive: usize
}

impl Default for TitleRule {
  fn default() -> Self {
    Self {
      min_len_exclusive:
        DEFAULT_MIN_TITLE_LEN
    }
  }
}

impl TitleRule {
  pub fn new(
    min_len_exclusive: usize
  ) -> Self {
    Self { min_len_exclusive }
  }

  /// Length is counted in `char`s after
  /// `str::trim`, not UTF-16 units: one
  /// emoji counts as 1, and U+FEFF is
  /// not stripped.
  pub fn check(
    &self,
    title: &str
  ) -> Result<(), TitleError> {
    let len = trimmed_len(title);
    if len == 0 {
      return Err(TitleError::Empty);
    }
    if len <= self.min_len_exclusive {
      return Err(TitleError::TooShort {
        len,
        min: self.min_len_exclusive
      });
    }
    Ok(())
  }

  /// Text placed in the shared
  /// validation slot. Add and edit
  /// failures read the same.
  pub fn message(&self) -> String {
    format!(
      "Task should be greater than {} \
       characters and not empty",
      self.min_len_exclusive
    )
  }

  /// Live feedback under the edit
  /// input, independent of the shared
  /// slot.
  pub fn hint(
    &self,
    buffer: &str
  ) -> Option<EditHint> {
    match self.check(buffer) {
      | Ok(()) => None,
      | Err(TitleError::Empty) => {
        Some(EditHint::Empty)
      }
      | Err(TitleError::TooShort {
        min,
        ..
      }) => Some(EditHint::TooShort {
        min
      })
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum EditHint {
  Empty,
  TooShort { min: usize }
}

impl fmt::Display for EditHint {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | EditHint::Empty => {
        f.write_str(
          "Task should not be empty!"
        )
      }
      | EditHint::TooShort { min } => {
        write!(
          f,
          "Task should be greater \
           than {min} characters!"
        )
      }
    }
  }
}

fn trimmed_len(text: &str) -> usize {
  text.trim().chars().count()
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;

  #[test]
  fn boundary_at_default_threshold() {
    let rule = TitleRule::default();
    assert_eq!(
      rule.check("12345"),
      Err(TitleError::TooShort {
        len: 5,
        min: 5
      })
    );
    assert_eq!(
      rule.check("123456"),
      Ok(())
    );
    assert_eq!(
      rule.check("   \t "),
      Err(TitleError::Empty)
    );
    // surrounding whitespace does not
    // count toward the length
    assert!(
      rule.check("  abcde  ").is_err()
    );
  }

  #[test]
  fn counts_chars_not_bytes() {
    let rule = TitleRule::default();
    assert!(rule.check("ñandú").is_err());
    assert!(rule.check("ñandús").is_ok());
  }

  #[test]
  fn astral_chars_count_once_and_bom_is_kept()
  {
    let rule = TitleRule::default();
    assert_eq!(
      rule.check("😀😀😀"),
      Err(TitleError::TooShort {
        len: 3,
        min: 5
      })
    );
    assert_eq!(
      rule.check("\u{feff}abcde"),
      Ok(())
    );
  }

  #[test]
  fn message_matches_shared_slot_text()
  {
    assert_eq!(
      TitleRule::default().message(),
      "Task should be greater than 5 \
       characters and not empty"
    );
  }

  #[test]
  fn hints_follow_the_buffer() {
    let rule = TitleRule::default();
    assert_eq!(
      rule
        .hint("")
        .map(|h| h.to_string()),
      Some(
        "Task should not be empty!"
          .to_string()
      )
    );
    assert_eq!(
      rule
        .hint("abc")
        .map(|h| h.to_string()),
      Some(
        "Task should be greater than 5 \
         characters!"
          .to_string()
      )
    );
    assert_eq!(
      rule.hint("long enough"),
      None
    );
  }

  proptest! {
    #[test]
    fn check_agrees_with_trimmed_length(s in "\\PC{0,12}") {
      let rule = TitleRule::default();
      let expected = s.trim().chars().count() > 5;
      prop_assert_eq!(rule.check(&s).is_ok(), expected);
    }
  }
}
