use taskboard_core::RowView;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskTableRow;

#[derive(Properties, PartialEq)]
pub struct TaskTableProps {
  pub rows:          Vec<RowView>,
  pub edit_buffer:   String,
  pub edit_hint:     Option<String>,
  pub on_toggle:     Callback<u64>,
  pub on_start_edit:
    Callback<(u64, String)>,
  pub on_edit_input: Callback<String>,
  pub on_save:       Callback<u64>,
  pub on_cancel:     Callback<()>,
  pub on_delete:     Callback<u64>
}

#[function_component(TaskTable)]
pub fn task_table(
  props: &TaskTableProps
) -> Html {
  html! {
      <table class="table table-bordered board-table">
          <thead>
              <tr>
                  <th style="width: 40%">{ "Task" }</th>
                  <th>{ "Status" }</th>
                  <th>{ "Actions" }</th>
              </tr>
          </thead>
          <tbody>
              {
                  // ids can repeat, so the position
                  // keeps keys unique
                  for props.rows.iter().cloned().enumerate().map(|(pos, row)| html! {
                      <TaskTableRow
                          key={format!("{}-{pos}", row.id)}
                          row={row}
                          edit_buffer={props.edit_buffer.clone()}
                          edit_hint={props.edit_hint.clone()}
                          on_toggle={props.on_toggle.clone()}
                          on_start_edit={props.on_start_edit.clone()}
                          on_edit_input={props.on_edit_input.clone()}
                          on_save={props.on_save.clone()}
                          on_cancel={props.on_cancel.clone()}
                          on_delete={props.on_delete.clone()}
                      />
                  })
              }
          </tbody>
      </table>
  }
}
