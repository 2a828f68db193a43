use chrono::{DateTime, Utc};
use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;

use crate::data::Priority;
use crate::util;

/// What the form hands back on a successful submission: the trimmed
/// description, the chosen priority, and the due timestamp (or an
/// explicit absence).
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
	pub description: String,
	pub priority: Priority,
	pub due: Option<DateTime<Utc>>,
}

fn finish_draft(description: &str, priority: Priority, due_input: &str) -> Option<TaskDraft> {
	let description = description.trim();
	if description.is_empty() {
		return None;
	}
	Some(TaskDraft {
		description: description.to_owned(),
		priority,
		due: util::parse_due_input(due_input),
	})
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct TaskFormProps {
	#[prop_or_default]
	pub initial_description: String,
	#[prop_or_default]
	pub initial_priority: Priority,
	#[prop_or_default]
	pub initial_due: Option<DateTime<Utc>>,
	pub on_submit: Callback<TaskDraft>,
	pub on_cancel: Callback<()>,
	pub submit_label: AttrValue,
}

/// Draft capture shared by the create and edit flows. Submission is
/// blocked while the trimmed description is empty; a successful submit
/// resets the draft.
#[function_component]
pub fn TaskForm(props: &TaskFormProps) -> Html {
	let description = use_state({
		let initial = props.initial_description.clone();
		move || initial
	});
	let priority = use_state({
		let initial = props.initial_priority;
		move || initial
	});
	let due_input = use_state({
		let initial = props.initial_due;
		move || {
			initial
				.as_ref()
				.map(util::format_due_input)
				.unwrap_or_default()
		}
	});

	let submit = {
		let description = description.clone();
		let priority = priority.clone();
		let due_input = due_input.clone();
		let on_submit = props.on_submit.clone();
		Callback::from(move |_| {
			let Some(draft) = finish_draft(&description, *priority, &due_input) else {
				return;
			};
			on_submit.emit(draft);
			description.set(String::new());
			priority.set(Priority::default());
			due_input.set(String::new());
		})
	};
	let cancel = props.on_cancel.reform(|_: MouseEvent| ());

	let on_due_input = {
		let due_input = due_input.clone();
		Callback::from(move |ev: web_sys::InputEvent| {
			let input: web_sys::HtmlInputElement =
				ev.target_dyn_into().expect_throw("event target should be an input");
			due_input.set(input.value());
		})
	};
	let on_priority = {
		let priority = priority.clone();
		Callback::from(move |value: String| {
			if let Some(parsed) = Priority::parse(&value) {
				priority.set(parsed);
			}
		})
	};

	html! {
		<div>
			<ybc::Field label="Due Date and Time">
				<ybc::Control>
					<input
						class="input"
						type="datetime-local"
						name="due"
						value={(*due_input).clone()}
						oninput={on_due_input}
					/>
				</ybc::Control>
			</ybc::Field>
			<ybc::Field label="Priority">
				<ybc::Control>
					<ybc::Select name="priority" value={(*priority).value().to_owned()} update={on_priority}>
						{Priority::all().iter().map(|option| html! {
							<option
								value={option.value()}
								selected={*priority == *option}
							>
								{option.label()}
							</option>
						}).collect::<Vec<_>>()}
					</ybc::Select>
				</ybc::Control>
			</ybc::Field>
			<ybc::Field label="Task">
				<ybc::Control>
					<ybc::TextArea
						name="description"
						value={(*description).clone()}
						update={{
							let description = description.clone();
							Callback::from(move |value: String| description.set(value))
						}}
						placeholder={"Enter Task"}
					/>
				</ybc::Control>
			</ybc::Field>
			<ybc::Field grouped=true>
				<ybc::Control>
					<ybc::Button classes={"is-primary"} onclick={submit}>
						{props.submit_label.clone()}
					</ybc::Button>
				</ybc::Control>
				<ybc::Control>
					<ybc::Button classes={"is-danger is-light"} onclick={cancel}>{"Cancel"}</ybc::Button>
				</ybc::Control>
			</ybc::Field>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_or_whitespace_descriptions_do_not_submit() {
		assert_eq!(finish_draft("", Priority::Low, ""), None);
		assert_eq!(finish_draft("   \t", Priority::High, ""), None);
	}

	#[test]
	fn submission_trims_the_description() {
		let draft = finish_draft("  buy milk  ", Priority::Medium, "").expect("submits");
		assert_eq!(draft.description, "buy milk");
		assert_eq!(draft.priority, Priority::Medium);
		assert_eq!(draft.due, None);
	}

	#[test]
	fn due_selection_is_carried_through() {
		let draft = finish_draft("water plants", Priority::Low, "2026-03-03T14:05").expect("submits");
		let due = draft.due.expect("parsed due");
		assert_eq!(util::format_due_input(&due), "2026-03-03T14:05");
	}

	#[test]
	fn malformed_due_input_passes_through_as_absent() {
		let draft = finish_draft("water plants", Priority::Low, "nonsense").expect("submits");
		assert_eq!(draft.due, None);
	}
}
