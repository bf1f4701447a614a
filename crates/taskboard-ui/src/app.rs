use std::rc::Rc;

use gloo::console::{
  error,
  log
};
use taskboard_core::{
  BoardAction,
  BoardConfig,
  Lifecycle,
  TaskBoard
};
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  Reducible,
  UseReducerHandle,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};

use crate::api::fetch_tasks;
use crate::components::{
  AddTaskForm,
  StatusToggles,
  TaskTable
};

const EMBEDDED_CONFIG: &str =
  include_str!("../taskboard.toml");

#[derive(
  Debug, Clone, Default, PartialEq,
)]
struct BoardState(TaskBoard);

impl Reducible for BoardState {
  type Action = BoardAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next =
      Rc::unwrap_or_clone(self);
    next.0.dispatch(action);
    Rc::new(next)
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_board_config);
  let board = {
    let config_snapshot =
      (*config).clone();
    use_reducer(move || {
      BoardState(TaskBoard::from_config(
        &config_snapshot
      ))
    })
  };

  {
    let dispatcher = board.dispatcher();
    let url = config.source.url.clone();
    use_effect_with((), move |_| {
      let lifecycle = Lifecycle::new();
      let ticket = lifecycle.ticket();
      let request_id = Uuid::new_v4();
      ui_debug(
        "board.mounted",
        &format!(
          "request {request_id} -> {url}"
        )
      );

      wasm_bindgen_futures::spawn_local(
        async move {
          let result =
            fetch_tasks(&url, request_id)
              .await;
          if let Err(err) = &result {
            tracing::error!(
              request_id = %request_id,
              error = %err,
              "initial task fetch failed"
            );
            error!(format!(
              "Error: {err}"
            ));
          }
          dispatcher.dispatch(
            BoardAction::Loaded {
              ticket,
              result
            }
          );
        }
      );

      move || {
        ui_debug(
          "board.unmounted",
          "late fetch results will be \
           dropped"
        );
        lifecycle.end();
      }
    });
  }

  let state = &board.0;
  let filter = state.filter();

  html! {
      <div class="container mt-5">
          <h1>{ "To Do App" }</h1>
          <AddTaskForm
              draft={state.draft_title().to_string()}
              message={state.validation_message().map(str::to_string)}
              on_input={action(&board, BoardAction::SetDraft)}
              on_add={action(&board, |()| BoardAction::AddTask)}
          />
          <StatusToggles
              filter={filter}
              on_show_completed={action(&board, BoardAction::SetShowCompleted)}
              on_show_incomplete={action(&board, BoardAction::SetShowIncomplete)}
          />
          <TaskTable
              rows={state.rows()}
              edit_buffer={state.edit_buffer().to_string()}
              edit_hint={state.edit_hint().map(|hint| hint.to_string())}
              on_toggle={action(&board, BoardAction::ToggleTask)}
              on_start_edit={action(&board, |(id, title): (u64, String)| BoardAction::StartEditing { id, title })}
              on_edit_input={action(&board, BoardAction::SetEditBuffer)}
              on_save={action(&board, BoardAction::SaveEdit)}
              on_cancel={action(&board, |()| BoardAction::CancelEditing)}
              on_delete={action(&board, BoardAction::DeleteTask)}
          />
      </div>
  }
}

fn action<T: 'static>(
  board: &UseReducerHandle<BoardState>,
  make: impl Fn(T) -> BoardAction
  + 'static
) -> Callback<T> {
  let dispatcher = board.dispatcher();
  Callback::from(move |value: T| {
    dispatcher.dispatch(make(value));
  })
}

fn load_board_config() -> BoardConfig {
  match BoardConfig::from_toml_str(
    EMBEDDED_CONFIG
  ) {
    | Ok(cfg) => cfg,
    | Err(err) => {
      tracing::warn!(
        error = %format!("{err:#}"),
        "embedded config rejected; \
         using defaults"
      );
      BoardConfig::default()
    }
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
