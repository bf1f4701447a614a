use web_sys::{
  HtmlInputElement,
  InputEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct AddTaskFormProps {
  pub draft:    String,
  pub message:  Option<String>,
  pub on_input: Callback<String>,
  pub on_add:   Callback<()>
}

#[function_component(AddTaskForm)]
pub fn add_task_form(
  props: &AddTaskFormProps
) -> Html {
  let on_input = {
    let on_input =
      props.on_input.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_input.emit(input.value());
      }
    )
  };
  let on_add = props.on_add.clone();

  html! {
      <div class="mb-3">
          <input
              class="form-control"
              type="text"
              value={props.draft.clone()}
              oninput={on_input}
          />
          <button
              class="btn btn-primary mt-2"
              onclick={move |_| on_add.emit(())}
          >
              { "Add Task" }
          </button>
          {
              if let Some(message) = &props.message {
                  html! { <p class="text-danger mt-2">{ message }</p> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
