use taskboard_core::{
  RowView,
  Tone
};
use web_sys::{
  HtmlInputElement,
  InputEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskTableRowProps {
  pub row:           RowView,
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

#[function_component(TaskTableRow)]
pub fn task_table_row(
  props: &TaskTableRowProps
) -> Html {
  let row = &props.row;
  let id = row.id;

  let tone_class = match row.tone {
    | Tone::Done => "tone-done",
    | Tone::Open => "tone-open"
  };
  let title_class = classes!(
    "title-cell",
    tone_class,
    row.struck.then_some("struck")
  );

  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  let title_cell = if row.editing {
    let on_edit_input =
      props.on_edit_input.clone();
    let oninput = Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_edit_input.emit(input.value());
      }
    );
    html! {
        <>
            <input
                class="form-control"
                type="text"
                value={props.edit_buffer.clone()}
                oninput={oninput}
            />
            {
                if let Some(hint) = &props.edit_hint {
                    html! { <p class="text-primary mt-2">{ hint }</p> }
                } else {
                    html! {}
                }
            }
        </>
    }
  } else {
    html! { <>{ row.title.clone() }</> }
  };

  let actions = if row.editing {
    let on_save = props.on_save.clone();
    let on_cancel =
      props.on_cancel.clone();
    html! {
        <>
            <button class="btn btn-success" onclick={move |_| on_save.emit(id)}>
                { "Save" }
            </button>
            <button class="btn btn-secondary ms-2" onclick={move |_| on_cancel.emit(())}>
                { "Cancel" }
            </button>
        </>
    }
  } else {
    let on_start_edit =
      props.on_start_edit.clone();
    let title = row.title.clone();
    html! {
        <button
            class="btn btn-warning"
            onclick={move |_| on_start_edit.emit((id, title.clone()))}
        >
            { "Edit" }
        </button>
    }
  };

  html! {
      <tr>
          <td class={title_class} onclick={move |_| on_toggle.emit(id)}>
              { title_cell }
          </td>
          <td>{ row.status_label }</td>
          <td>
              { actions }
              <button class="btn btn-danger ms-2" onclick={move |_| on_delete.emit(id)}>
                  { "Delete" }
              </button>
          </td>
      </tr>
  }
}
