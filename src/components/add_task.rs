use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{TaskDraft, TaskForm};
use crate::session::Session;
use crate::tasks;

#[function_component]
pub fn AddTask() -> Html {
	let session = use_store_value::<Session>();
	let show_input = use_state(|| false);

	let open = {
		let show_input = show_input.clone();
		Callback::from(move |_| show_input.set(true))
	};
	let cancel = {
		let show_input = show_input.clone();
		Callback::from(move |_| show_input.set(false))
	};
	let submit = {
		let show_input = show_input.clone();
		let username = session.username().map(str::to_owned);
		Callback::from(move |draft: TaskDraft| {
			let Some(username) = username.clone() else {
				log::warn!("add task ignored without an active identity");
				return;
			};
			tasks::add(draft.description, draft.priority, draft.due, username);
			show_input.set(false);
		})
	};

	html! {
		<div class="mb-4">
			{if *show_input {
				html! {
					<ybc::Box>
						<TaskForm on_submit={submit} on_cancel={cancel} submit_label={"Add"} />
					</ybc::Box>
				}
			} else {
				html! {
					<ybc::Button classes={"is-primary"} onclick={open}>
						<span class="icon"><i class="fas fa-plus" /></span>
						<span>{"Add a Task"}</span>
					</ybc::Button>
				}
			}}
		</div>
	}
}
