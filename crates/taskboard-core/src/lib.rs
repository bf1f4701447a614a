pub mod board;
pub mod config;
pub mod filter;
pub mod ids;
pub mod lifecycle;
pub mod task;
pub mod validate;

pub use board::{
  BoardAction,
  EditSession,
  RowView,
  TaskBoard,
  Tone
};
pub use config::BoardConfig;
pub use filter::StatusFilter;
pub use ids::IdPolicy;
pub use lifecycle::{
  FetchError,
  FetchTicket,
  Lifecycle,
  LoadOutcome,
  LoadState
};
pub use task::Task;
pub use validate::{
  EditHint,
  TitleError,
  TitleRule
};
