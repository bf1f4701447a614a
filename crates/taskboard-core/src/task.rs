use std::collections::BTreeMap;

use serde::{
  Deserialize,
  Serialize
};

/// One row of the board, shaped like
/// the remote `{ id, title, completed }`
/// objects.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct Task {
  pub id:        u64,
  pub title:     String,
  #[serde(default)]
  pub completed: bool,

  /// Fields the server sent that the
  /// board does not use (`userId`, ...).
  #[serde(flatten)]
  pub extra:
    BTreeMap<String, serde_json::Value>
}

impl Task {
  pub fn new_incomplete(
    id: u64,
    title: String
  ) -> Self {
    Self {
      id,
      title,
      completed: false,
      extra: BTreeMap::new()
    }
  }

  pub fn status_label(
    &self
  ) -> &'static str {
    if self.completed {
      "Completed"
    } else {
      "Incomplete"
    }
  }
}
