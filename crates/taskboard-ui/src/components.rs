mod add_task_form;
mod status_toggles;
mod task_table;
mod task_table_row;

pub use add_task_form::AddTaskForm;
pub use status_toggles::StatusToggles;
pub use task_table::TaskTable;
pub use task_table_row::TaskTableRow;
