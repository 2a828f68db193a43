use chrono::NaiveDate;
use uuid::Uuid;
use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{TaskDraft, TaskForm};
use crate::data::{filter_tasks, Priority, Task, TaskPatch};
use crate::tasks::{self, TaskList};
use crate::util;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DeleteTarget {
	All,
	One(Uuid),
}

fn border_color(priority: Priority) -> &'static str {
	match priority {
		Priority::Low => "#05f50d",
		Priority::Medium => "#eef505",
		Priority::High => "#f50505",
	}
}

fn background_color(priority: Priority, is_completed: bool) -> &'static str {
	if is_completed {
		return "#d3d3d3";
	}
	match priority {
		Priority::Low => "#8ef5a9",
		Priority::Medium => "#f2f58e",
		Priority::High => "#f58e8e",
	}
}

#[function_component]
pub fn TaskBox() -> Html {
	let list = use_store_value::<TaskList>();
	let show_completed = use_state(|| false);
	let priority_filter = use_state(|| None::<Priority>);
	let date_filter = use_state(|| None::<NaiveDate>);
	let pending_delete = use_state(|| None::<DeleteTarget>);
	let edit_task = use_state(|| None::<Task>);

	let partition = if *show_completed {
		list.completed()
	} else {
		list.active()
	};
	let visible = filter_tasks(&partition, *priority_filter, *date_filter);

	let toggle_view = {
		let show_completed = show_completed.clone();
		Callback::from(move |_| show_completed.set(!*show_completed))
	};
	let on_priority_filter = {
		let priority_filter = priority_filter.clone();
		Callback::from(move |value: String| {
			priority_filter.set(Priority::parse(&value));
		})
	};
	let on_date_filter = {
		let date_filter = date_filter.clone();
		Callback::from(move |ev: web_sys::InputEvent| {
			let input: web_sys::HtmlInputElement =
				ev.target_dyn_into().expect_throw("event target should be an input");
			date_filter.set(util::parse_day_input(&input.value()));
		})
	};

	let request_delete_all = {
		let pending_delete = pending_delete.clone();
		Callback::from(move |_| pending_delete.set(Some(DeleteTarget::All)))
	};
	let cancel_delete = {
		let pending_delete = pending_delete.clone();
		Callback::from(move |_| pending_delete.set(None))
	};
	let confirm_delete = {
		let pending_delete = pending_delete.clone();
		Callback::from(move |_| {
			match *pending_delete {
				Some(DeleteTarget::All) => tasks::remove_all(),
				Some(DeleteTarget::One(task_id)) => tasks::remove(task_id),
				None => {}
			}
			pending_delete.set(None);
		})
	};

	let close_edit = {
		let edit_task = edit_task.clone();
		Callback::from(move |_| edit_task.set(None))
	};
	let submit_edit = {
		let edit_task = edit_task.clone();
		Callback::from(move |draft: TaskDraft| {
			if let Some(task) = &*edit_task {
				tasks::update(
					task.task_id,
					TaskPatch::edit(draft.description, draft.priority, draft.due),
				);
			}
			edit_task.set(None);
		})
	};

	html! {<>
		<div class="is-flex is-justify-content-space-between is-align-items-center mb-4">
			<ybc::Button
				classes={if *show_completed { "is-link" } else { "is-info" }}
				onclick={toggle_view}
			>
				{if *show_completed { "Goto Active Tasks" } else { "Goto Completed Tasks" }}
			</ybc::Button>
			{if !list.is_empty() {
				html! {
					<ybc::Button classes={"is-danger is-outlined"} onclick={request_delete_all}>
						<span class="icon"><i class="fas fa-trash" /></span>
					</ybc::Button>
				}
			} else {
				html! {}
			}}
		</div>

		<ybc::Field grouped=true>
			<ybc::Control>
				<ybc::Select
					name="priority_filter"
					value={priority_filter.map(|p| p.value()).unwrap_or("all").to_owned()}
					update={on_priority_filter}
				>
					<option value="all" selected={priority_filter.is_none()}>{"All Priorities"}</option>
					{Priority::all().iter().map(|option| html! {
						<option
							value={option.value()}
							selected={*priority_filter == Some(*option)}
						>
							{option.label()}
						</option>
					}).collect::<Vec<_>>()}
				</ybc::Select>
			</ybc::Control>
			<ybc::Control>
				<input
					class="input"
					type="date"
					name="date_filter"
					value={date_filter.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()}
					oninput={on_date_filter}
				/>
			</ybc::Control>
		</ybc::Field>

		{if let Some(target) = *pending_delete {
			let title = match target {
				DeleteTarget::All => "Delete All Tasks. This can't be undone.",
				DeleteTarget::One(_) => "Delete Task. This can't be undone.",
			};
			html! {
				<div class="modal is-active">
					<div class="modal-background" onclick={cancel_delete.clone()} />
					<div class="modal-content">
						<ybc::Box>
							<ybc::Subtitle>{title}</ybc::Subtitle>
							<ybc::Field grouped=true grouped_align={ybc::GroupedAlign::Right}>
								<ybc::Control>
									<ybc::Button onclick={cancel_delete.clone()}>{"Cancel"}</ybc::Button>
								</ybc::Control>
								<ybc::Control>
									<ybc::Button classes={"is-danger"} onclick={confirm_delete}>{"Confirm"}</ybc::Button>
								</ybc::Control>
							</ybc::Field>
						</ybc::Box>
					</div>
				</div>
			}
		} else {
			html! {}
		}}

		{if let Some(task) = &*edit_task {
			html! {
				<div class="modal is-active">
					<div class="modal-background" onclick={close_edit.clone()} />
					<div class="modal-content">
						<ybc::Box>
							<ybc::Title>{"Edit Task"}</ybc::Title>
							<TaskForm
								initial_description={task.task_description.clone()}
								initial_priority={task.task_priority}
								initial_due={task.datetime}
								on_submit={submit_edit}
								on_cancel={close_edit.clone()}
								submit_label={"Update"}
							/>
						</ybc::Box>
					</div>
				</div>
			}
		} else {
			html! {}
		}}

		<ybc::Subtitle>
			{if *show_completed { "Completed Tasks" } else { "Active Tasks" }}
		</ybc::Subtitle>
		<div class="is-flex is-flex-wrap-wrap" style="gap: 0.5rem;">
			{visible.into_iter().map(|task| {
				let toggle = {
					let task_id = task.task_id;
					let done = task.is_completed;
					Callback::from(move |_| {
						tasks::update(task_id, TaskPatch::completion(!done));
					})
				};
				let edit = {
					let edit_task = edit_task.clone();
					let task = task.clone();
					Callback::from(move |_| edit_task.set(Some(task.clone())))
				};
				let request_delete = {
					let pending_delete = pending_delete.clone();
					let task_id = task.task_id;
					Callback::from(move |_| pending_delete.set(Some(DeleteTarget::One(task_id))))
				};
				let style = format!(
					"border: 1px solid {}; border-radius: 8px; background-color: {}; min-width: 300px;",
					border_color(task.task_priority),
					background_color(task.task_priority, task.is_completed),
				);
				html! {
					<div key={task.task_id.to_string()} class="is-flex is-align-items-center p-2" style={style}>
						<button class="button is-small is-white" onclick={toggle}>
							<span class="icon">
								{if task.is_completed {
									html! { <i class="fas fa-check-circle has-text-success" /> }
								} else {
									html! { <i class="far fa-circle" /> }
								}}
							</span>
						</button>
						<div class="is-flex-grow-1 mx-2">
							{if let Some(due) = &task.datetime {
								html! { <p class="is-size-7">{util::format_due(due)}</p> }
							} else {
								html! {}
							}}
							<p>{&task.task_description}</p>
						</div>
						<div>
							{if !*show_completed {
								html! {
									<button class="button is-small is-white" onclick={edit}>
										<span class="icon"><i class="fas fa-pen" /></span>
									</button>
								}
							} else {
								html! {}
							}}
							<button class="button is-small is-white has-text-danger" onclick={request_delete}>
								<span class="icon"><i class="fas fa-trash" /></span>
							</button>
						</div>
					</div>
				}
			}).collect::<Vec<_>>()}
		</div>
	</>}
}
