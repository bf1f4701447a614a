use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::config::BoardConfig;
use crate::filter::StatusFilter;
use crate::ids::{
  IdAllocator,
  IdPolicy
};
use crate::lifecycle::{
  FetchError,
  FetchTicket,
  LoadOutcome,
  LoadState
};
use crate::task::Task;
use crate::validate::{
  EditHint,
  TitleRule
};

/// The single edit session: which row is
/// being renamed and the text typed so
/// far.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct EditSession {
  pub id:     u64,
  pub buffer: String
}

/// Everything a user or the mount fetch
/// can do to the board.
#[derive(Debug, Clone)]
pub enum BoardAction {
  SetDraft(String),
  AddTask,
  ToggleTask(u64),
  StartEditing { id: u64, title: String },
  SetEditBuffer(String),
  CancelEditing,
  SaveEdit(u64),
  DeleteTask(u64),
  SetShowCompleted(bool),
  SetShowIncomplete(bool),
  Loaded {
    ticket: FetchTicket,
    result: Result<Vec<Task>, FetchError>
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Tone {
  Done,
  Open
}

/// Presentation facts for one visible
/// row.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct RowView {
  pub id:           u64,
  pub title:        String,
  pub completed:    bool,
  pub status_label: &'static str,
  pub editing:      bool,
  pub struck:       bool,
  pub tone:         Tone
}

/// Owner of the task list and all of the
/// transient UI state around it. Every
/// mutation goes through one of the
/// methods below (or [`dispatch`]).
///
/// [`dispatch`]: TaskBoard::dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBoard {
  tasks:              Vec<Task>,
  draft_title:        String,
  edit:               Option<EditSession>,
  validation_message: Option<String>,
  filter:             StatusFilter,
  rule:               TitleRule,
  ids:                IdAllocator,
  load_state:         LoadState
}

impl Default for TaskBoard {
  fn default() -> Self {
    Self::new(
      TitleRule::default(),
      IdPolicy::default()
    )
  }
}

impl TaskBoard {
  pub fn new(
    rule: TitleRule,
    policy: IdPolicy
  ) -> Self {
    Self {
      tasks: Vec::new(),
      draft_title: String::new(),
      edit: None,
      validation_message: None,
      filter: StatusFilter::default(),
      rule,
      ids: IdAllocator::new(policy),
      load_state: LoadState::Pending
    }
  }

  pub fn from_config(
    cfg: &BoardConfig
  ) -> Self {
    Self::new(
      cfg.title_rule(),
      cfg.ids.policy
    )
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn draft_title(&self) -> &str {
    &self.draft_title
  }

  pub fn active_edit_id(
    &self
  ) -> Option<u64> {
    self.edit.as_ref().map(|s| s.id)
  }

  pub fn edit_buffer(&self) -> &str {
    self
      .edit
      .as_ref()
      .map_or("", |s| s.buffer.as_str())
  }

  pub fn validation_message(
    &self
  ) -> Option<&str> {
    self.validation_message.as_deref()
  }

  pub fn filter(&self) -> StatusFilter {
    self.filter
  }

  pub fn load_state(&self) -> LoadState {
    self.load_state
  }

  pub fn set_draft(
    &mut self,
    text: String
  ) {
    self.draft_title = text;
  }

  pub fn set_edit_buffer(
    &mut self,
    text: String
  ) {
    match self.edit.as_mut() {
      | Some(session) => {
        session.buffer = text;
      }
      | None => {
        debug!(
          "edit buffer input with no \
           open session; ignored"
        );
      }
    }
  }

  pub fn set_show_completed(
    &mut self,
    on: bool
  ) {
    self.filter.show_completed = on;
  }

  pub fn set_show_incomplete(
    &mut self,
    on: bool
  ) {
    self.filter.show_incomplete = on;
  }

  /// Validates the draft and prepends a
  /// new incomplete task. Returns the new
  /// id on success.
  pub fn add_task(
    &mut self
  ) -> Option<u64> {
    if let Err(err) =
      self.rule.check(&self.draft_title)
    {
      debug!(reason = %err, "add rejected");
      self.validation_message =
        Some(self.rule.message());
      return None;
    }

    let id =
      self.ids.allocate(&self.tasks);
    let title = std::mem::take(
      &mut self.draft_title
    );
    self.tasks.insert(
      0,
      Task::new_incomplete(id, title)
    );
    self.validation_message = None;
    info!(
      id,
      total = self.tasks.len(),
      "task added"
    );
    Some(id)
  }

  pub fn toggle_task_status(
    &mut self,
    id: u64
  ) {
    if self.active_edit_id() == Some(id) {
      debug!(
        id,
        "toggle suppressed while editing"
      );
      return;
    }
    let mut hits = 0_usize;
    for task in self
      .tasks
      .iter_mut()
      .filter(|task| task.id == id)
    {
      task.completed = !task.completed;
      hits += 1;
    }
    if hits == 0 {
      debug!(
        id,
        "toggle missed; no such task"
      );
    } else {
      debug!(id, hits, "task toggled");
    }
  }

  pub fn start_editing_task(
    &mut self,
    id: u64,
    current_title: String
  ) {
    if let Some(prev) = &self.edit
      && prev.id != id
    {
      debug!(
        previous = prev.id,
        id,
        "replacing open edit session"
      );
    }
    self.edit = Some(EditSession {
      id,
      buffer: current_title
    });
  }

  pub fn cancel_editing_task(&mut self) {
    if let Some(session) = self.edit.take()
    {
      debug!(
        id = session.id,
        "edit cancelled"
      );
    }
  }

  /// Writes the edit buffer, untrimmed,
  /// into the matching task. A failed
  /// check keeps the session open.
  pub fn save_edited_task(
    &mut self,
    id: u64
  ) -> bool {
    let buffer = self.edit_buffer();
    if let Err(err) = self.rule.check(buffer)
    {
      debug!(
        id,
        reason = %err,
        "edit rejected"
      );
      self.validation_message =
        Some(self.rule.message());
      return false;
    }

    let title = self
      .edit
      .take()
      .map(|session| session.buffer)
      .unwrap_or_default();
    let mut hits = 0_usize;
    for task in self
      .tasks
      .iter_mut()
      .filter(|task| task.id == id)
    {
      task.title.clone_from(&title);
      hits += 1;
    }
    if hits == 0 {
      warn!(
        id,
        "saved edit for a task that \
         no longer exists"
      );
    } else {
      info!(id, hits, "task renamed");
    }
    self.validation_message = None;
    true
  }

  pub fn delete_task(&mut self, id: u64) {
    let before = self.tasks.len();
    self
      .tasks
      .retain(|task| task.id != id);
    if self.tasks.len() < before {
      info!(
        id,
        total = self.tasks.len(),
        "task deleted"
      );
    } else {
      debug!(
        id,
        "delete missed; no such task"
      );
    }
  }

  /// Applies the mount fetch result
  /// unless the component that asked for
  /// it is gone.
  #[tracing::instrument(skip_all)]
  pub fn apply_fetch(
    &mut self,
    ticket: &FetchTicket,
    result: Result<Vec<Task>, FetchError>
  ) -> LoadOutcome {
    if !ticket.is_current() {
      warn!(
        "dropping fetch result for an \
         unmounted board"
      );
      return LoadOutcome::Stale;
    }

    match result {
      | Ok(tasks) => {
        let count = tasks.len();
        self.ids.observe(&tasks);
        self.tasks = tasks;
        self.load_state =
          LoadState::Loaded { count };
        info!(
          count,
          "tasks loaded from source"
        );
        LoadOutcome::Applied { count }
      }
      | Err(err) => {
        error!(
          error = %err,
          "task fetch failed; keeping \
           current list"
        );
        self.load_state = LoadState::Failed;
        LoadOutcome::Failed(err)
      }
    }
  }

  pub fn dispatch(
    &mut self,
    action: BoardAction
  ) {
    match action {
      | BoardAction::SetDraft(text) => {
        self.set_draft(text)
      }
      | BoardAction::AddTask => {
        self.add_task();
      }
      | BoardAction::ToggleTask(id) => {
        self.toggle_task_status(id)
      }
      | BoardAction::StartEditing {
        id,
        title
      } => self.start_editing_task(id, title),
      | BoardAction::SetEditBuffer(
        text
      ) => self.set_edit_buffer(text),
      | BoardAction::CancelEditing => {
        self.cancel_editing_task()
      }
      | BoardAction::SaveEdit(id) => {
        self.save_edited_task(id);
      }
      | BoardAction::DeleteTask(id) => {
        self.delete_task(id)
      }
      | BoardAction::SetShowCompleted(
        on
      ) => self.set_show_completed(on),
      | BoardAction::SetShowIncomplete(
        on
      ) => self.set_show_incomplete(on),
      | BoardAction::Loaded {
        ticket,
        result
      } => {
        self.apply_fetch(&ticket, result);
      }
    }
  }

  pub fn visible_tasks(
    &self
  ) -> impl Iterator<Item = &Task> {
    self.filter.apply(&self.tasks)
  }

  pub fn rows(&self) -> Vec<RowView> {
    let editing = self.active_edit_id();
    self
      .visible_tasks()
      .map(|task| {
        let is_editing =
          editing == Some(task.id);
        RowView {
          id:           task.id,
          title:        task.title.clone(),
          completed:    task.completed,
          status_label: task
            .status_label(),
          editing:      is_editing,
          struck:       task.completed
            && !is_editing,
          tone:         if task.completed {
            Tone::Done
          } else {
            Tone::Open
          }
        }
      })
      .collect()
  }

  /// Live hint for the open edit
  /// session, if any.
  pub fn edit_hint(
    &self
  ) -> Option<EditHint> {
    self
      .edit
      .as_ref()
      .and_then(|s| self.rule.hint(&s.buffer))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lifecycle::Lifecycle;

  fn board_with(
    tasks: Vec<Task>
  ) -> TaskBoard {
    let mut board = TaskBoard::default();
    let lifecycle = Lifecycle::new();
    board.apply_fetch(
      &lifecycle.ticket(),
      Ok(tasks)
    );
    board
  }

  fn task(
    id: u64,
    title: &str,
    completed: bool
  ) -> Task {
    Task {
      completed,
      ..Task::new_incomplete(
        id,
        title.to_string()
      )
    }
  }

  #[test]
  fn add_prepends_and_clears_draft() {
    let mut board = board_with(vec![
      task(1, "existing row", false),
    ]);
    board.set_draft(
      "  padded title  ".to_string()
    );

    assert_eq!(board.add_task(), Some(2));
    assert_eq!(board.tasks()[0].id, 2);
    assert_eq!(
      board.tasks()[0].title,
      "  padded title  "
    );
    assert!(!board.tasks()[0].completed);
    assert_eq!(board.draft_title(), "");
    assert_eq!(
      board.validation_message(),
      None
    );
  }

  #[test]
  fn rejected_add_keeps_draft_and_store()
  {
    let mut board = TaskBoard::default();
    board.set_draft("tiny".to_string());
    assert_eq!(board.add_task(), None);
    assert!(board.tasks().is_empty());
    assert_eq!(board.draft_title(), "tiny");
    assert_eq!(
      board.validation_message(),
      Some(
        "Task should be greater than 5 \
         characters and not empty"
      )
    );
  }

  #[test]
  fn successful_add_clears_earlier_error()
  {
    let mut board = TaskBoard::default();
    board.set_draft(String::new());
    board.add_task();
    assert!(
      board.validation_message().is_some()
    );
    board.set_draft(
      "a proper title".to_string()
    );
    board.add_task();
    assert_eq!(
      board.validation_message(),
      None
    );
  }

  #[test]
  fn toggle_is_suppressed_only_for_the_edited_row()
  {
    let mut board = board_with(vec![
      task(1, "first task", false),
      task(2, "second task", false),
    ]);
    board.start_editing_task(
      1,
      "first task".to_string()
    );
    board.toggle_task_status(1);
    board.toggle_task_status(2);
    assert!(!board.tasks()[0].completed);
    assert!(board.tasks()[1].completed);
  }

  #[test]
  fn toggle_miss_is_silent() {
    let mut board = board_with(vec![
      task(1, "first task", false),
    ]);
    let before = board.clone();
    board.toggle_task_status(42);
    assert_eq!(board, before);
  }

  #[test]
  fn start_editing_overwrites_session() {
    let mut board = board_with(vec![
      task(1, "first task", false),
      task(2, "second task", false),
    ]);
    board.start_editing_task(
      1,
      "first task".to_string()
    );
    board.start_editing_task(
      2,
      "second task".to_string()
    );
    assert_eq!(board.active_edit_id(), Some(2));
    assert_eq!(board.edit_buffer(), "second task");
  }

  #[test]
  fn cancel_leaves_validation_message() {
    let mut board = board_with(vec![
      task(1, "first task", false),
    ]);
    board.start_editing_task(
      1,
      "first task".to_string()
    );
    board.set_edit_buffer("no".to_string());
    assert!(!board.save_edited_task(1));
    board.cancel_editing_task();
    assert_eq!(board.active_edit_id(), None);
    assert_eq!(board.edit_buffer(), "");
    assert!(
      board.validation_message().is_some()
    );
  }

  #[test]
  fn save_writes_untrimmed_buffer() {
    let mut board = board_with(vec![
      task(1, "first task", true),
    ]);
    board.start_editing_task(
      1,
      "first task".to_string()
    );
    board.set_edit_buffer(
      " renamed task ".to_string()
    );
    assert!(board.save_edited_task(1));
    assert_eq!(
      board.tasks()[0].title,
      " renamed task "
    );
    assert!(board.tasks()[0].completed);
    assert_eq!(board.active_edit_id(), None);
    assert_eq!(board.edit_buffer(), "");
  }

  #[test]
  fn edit_buffer_input_without_session_is_ignored()
  {
    let mut board = TaskBoard::default();
    board.set_edit_buffer(
      "orphan text".to_string()
    );
    assert_eq!(board.edit_buffer(), "");
    assert_eq!(board.edit_hint(), None);
  }

  #[test]
  fn delete_twice_equals_delete_once() {
    let mut once = board_with(vec![
      task(1, "first task", false),
      task(2, "second task", true),
    ]);
    let mut twice = once.clone();
    once.delete_task(1);
    twice.delete_task(1);
    twice.delete_task(1);
    assert_eq!(once, twice);
    assert_eq!(once.tasks().len(), 1);
  }

  #[test]
  fn rows_carry_presentation_flags() {
    let mut board = board_with(vec![
      task(1, "first task", true),
      task(2, "second task", false),
      task(3, "third task", true),
    ]);
    board.start_editing_task(
      3,
      "third task".to_string()
    );
    let rows = board.rows();

    assert_eq!(rows[0].status_label, "Completed");
    assert!(rows[0].struck);
    assert_eq!(rows[0].tone, Tone::Done);

    assert_eq!(rows[1].status_label, "Incomplete");
    assert!(!rows[1].struck);
    assert_eq!(rows[1].tone, Tone::Open);

    assert!(rows[2].editing);
    assert!(!rows[2].struck);
  }

  #[test]
  fn rows_follow_filter() {
    let mut board = board_with(vec![
      task(1, "first task", true),
      task(2, "second task", false),
    ]);
    board.set_show_incomplete(true);
    let ids: Vec<u64> = board
      .rows()
      .iter()
      .map(|row| row.id)
      .collect();
    assert_eq!(ids, vec![2]);
  }

  #[test]
  fn edit_hint_tracks_buffer() {
    let mut board = board_with(vec![
      task(1, "first task", false),
    ]);
    board.start_editing_task(
      1,
      "first task".to_string()
    );
    assert_eq!(board.edit_hint(), None);
    board.set_edit_buffer("   ".to_string());
    assert_eq!(
      board.edit_hint(),
      Some(EditHint::Empty)
    );
    board.set_edit_buffer("four".to_string());
    assert_eq!(
      board.edit_hint(),
      Some(EditHint::TooShort { min: 5 })
    );
  }
}
