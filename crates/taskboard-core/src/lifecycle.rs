//! Mount-time fetch bookkeeping.
//!
//! The board is fed exactly once by an
//! asynchronous read. A [`Lifecycle`]
//! belongs to the mounted component and
//! stamps each read with a
//! [`FetchTicket`]. Ending the lifecycle
//! invalidates every outstanding ticket,
//! so a response that lands after
//! unmount is dropped instead of applied.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum FetchError {
  #[error("request failed: {0}")]
  Transport(String),

  #[error("server answered HTTP {0}")]
  Status(u16),

  #[error("could not decode tasks: {0}")]
  Decode(String)
}

#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
  generation: Rc<Cell<u64>>
}

impl Lifecycle {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn ticket(&self) -> FetchTicket {
    FetchTicket {
      issued:  self.generation.get(),
      current: Rc::clone(
        &self.generation
      )
    }
  }

  pub fn end(&self) {
    self.generation.set(
      self
        .generation
        .get()
        .wrapping_add(1)
    );
  }
}

#[derive(Debug, Clone)]
pub struct FetchTicket {
  issued:  u64,
  current: Rc<Cell<u64>>
}

impl FetchTicket {
  pub fn is_current(&self) -> bool {
    self.current.get() == self.issued
  }
}

/// What became of the mount fetch.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum LoadState {
  #[default]
  Pending,
  Loaded {
    count: usize
  },
  Failed
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum LoadOutcome {
  Applied { count: usize },
  Failed(FetchError),
  Stale
}
