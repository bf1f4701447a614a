use taskboard_core::StatusFilter;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatusTogglesProps {
  pub filter:             StatusFilter,
  pub on_show_completed:  Callback<bool>,
  pub on_show_incomplete: Callback<bool>
}

#[function_component(StatusToggles)]
pub fn status_toggles(
  props: &StatusTogglesProps
) -> Html {
  let make_toggle =
    |label: &str,
     checked: bool,
     on_change: &Callback<bool>| {
      let on_change = on_change.clone();
      html! {
          <div class="mb-3">
              <label class="form-check-label">
                  <input
                      class="form-check-input"
                      type="checkbox"
                      checked={checked}
                      onchange={move |_| on_change.emit(!checked)}
                  />
                  { label }
              </label>
          </div>
      }
    };

  html! {
      <>
          {
              make_toggle(
                  "Show Completed Tasks",
                  props.filter.show_completed,
                  &props.on_show_completed,
              )
          }
          {
              make_toggle(
                  "Show Incomplete Tasks",
                  props.filter.show_incomplete,
                  &props.on_show_incomplete,
              )
          }
      </>
  }
}
