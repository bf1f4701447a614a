use serde::{
  Deserialize,
  Serialize
};

use crate::task::Task;

/// How a newly added task gets its id.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
  /// Never hands out the same id twice
  /// in a session, deletes included.
  #[default]
  Monotonic,
  /// `len + 1`. Can collide with a
  /// surviving row after a delete.
  StoreLength
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct IdAllocator {
  policy:  IdPolicy,
  next_id: u64
}

impl IdAllocator {
  pub fn new(policy: IdPolicy) -> Self {
    Self {
      policy,
      next_id: 1
    }
  }

  /// Moves the counter past every id in
  /// `tasks`. The counter never goes
  /// backwards.
  pub fn observe(
    &mut self,
    tasks: &[Task]
  ) {
    if let Some(max) = tasks
      .iter()
      .map(|task| task.id)
      .max()
    {
      self.next_id = self
        .next_id
        .max(max.saturating_add(1));
    }
  }

  pub fn allocate(
    &mut self,
    tasks: &[Task]
  ) -> u64 {
    match self.policy {
      | IdPolicy::Monotonic => {
        self.observe(tasks);
        let id = self.next_id;
        self.next_id =
          self.next_id.saturating_add(1);
        id
      }
      | IdPolicy::StoreLength => {
        tasks.len() as u64 + 1
      }
    }
  }
}
