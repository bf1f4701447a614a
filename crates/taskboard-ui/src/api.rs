use gloo::net::http::Request;
use taskboard_core::{
  FetchError,
  Task
};
use tracing::{
  debug,
  info
};
use uuid::Uuid;

/// One-shot read of the remote task list.
#[tracing::instrument(skip(request_id), fields(request_id = %request_id))]
pub async fn fetch_tasks(
  url: &str,
  request_id: Uuid
) -> Result<Vec<Task>, FetchError> {
  info!(url, "requesting task list");

  let response = Request::get(url)
    .send()
    .await
    .map_err(|e| {
      FetchError::Transport(e.to_string())
    })?;

  if !response.ok() {
    return Err(FetchError::Status(
      response.status()
    ));
  }

  let tasks = response
    .json::<Vec<Task>>()
    .await
    .map_err(|e| {
      FetchError::Decode(e.to_string())
    })?;

  debug!(
    count = tasks.len(),
    "task list decoded"
  );
  Ok(tasks)
}
