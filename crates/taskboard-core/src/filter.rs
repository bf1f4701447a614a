use crate::task::Task;

/// The two completion checkboxes.
///
/// The toggles are OR-combined: with
/// both on, every task matches one of
/// them and the whole board is shown.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct StatusFilter {
  pub show_completed:  bool,
  pub show_incomplete: bool
}

impl StatusFilter {
  pub fn is_active(&self) -> bool {
    self.show_completed
      || self.show_incomplete
  }

  pub fn matches(
    &self,
    task: &Task
  ) -> bool {
    !self.is_active()
      || (self.show_completed
        && task.completed)
      || (self.show_incomplete
        && !task.completed)
  }

  pub fn apply<'a>(
    self,
    tasks: &'a [Task]
  ) -> impl Iterator<Item = &'a Task>
  {
    tasks
      .iter()
      .filter(move |task| {
        self.matches(task)
      })
  }
}
