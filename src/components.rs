mod add_task;
mod auth_switch;
mod footer;
mod navbar;
mod task_box;
mod task_form;

pub use add_task::*;
pub use auth_switch::*;
pub use footer::*;
pub use navbar::*;
pub use task_box::*;
pub use task_form::*;
