use chrono::{DateTime, Utc};
use uuid::Uuid;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::api;
use crate::data::{Priority, Task, TaskPatch};
use crate::session::{self, Session};
use crate::util;

static LOG: &str = "tasks";

/// The active identity's task list. Mutations land here first
/// (optimistically); the matching API call is fired afterwards and its
/// failure is only logged. The list is replaced wholesale whenever the
/// active username changes, which is the only point where server state
/// overwrites local state.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct TaskList {
	tasks: Vec<Task>,
}

impl TaskList {
	pub fn active(&self) -> Vec<Task> {
		self.tasks
			.iter()
			.filter(|task| !task.is_completed)
			.cloned()
			.collect()
	}

	pub fn completed(&self) -> Vec<Task> {
		self.tasks
			.iter()
			.filter(|task| task.is_completed)
			.cloned()
			.collect()
	}

	pub fn is_empty(&self) -> bool {
		self.tasks.is_empty()
	}

	fn replace(&mut self, tasks: Vec<Task>) {
		self.tasks = tasks;
	}

	fn push(&mut self, task: Task) {
		self.tasks.push(task);
	}

	fn merge(&mut self, task_id: Uuid, patch: &TaskPatch) {
		if let Some(task) = self.tasks.iter_mut().find(|task| task.task_id == task_id) {
			task.apply(patch);
		}
	}

	fn remove(&mut self, task_id: Uuid) {
		self.tasks.retain(|task| task.task_id != task_id);
	}

	fn clear(&mut self) {
		self.tasks.clear();
	}
}

/// Appends a task under a fresh client-generated id, then tells the
/// server about it. A refreshed bearer token in the response is adopted
/// into the session.
pub fn add(
	description: String,
	priority: Priority,
	due: Option<DateTime<Utc>>,
	username: String,
) {
	let task = Task::new(description, priority, due, username);
	Dispatch::<TaskList>::new().reduce_mut(|list| list.push(task.clone()));
	util::spawn_local(LOG, async move {
		let refreshed = api::tasks::create(&task).await?;
		if let Some(token) = refreshed {
			session::replace_access_token(token);
		}
		Ok(()) as Result<(), crate::response::ApiError>
	});
}

/// Merges the patch into the matching task, then sends the same patch to
/// the server. Last write wins; there is no version check.
pub fn update(task_id: Uuid, patch: TaskPatch) {
	Dispatch::<TaskList>::new().reduce_mut(|list| list.merge(task_id, &patch));
	util::spawn_local(LOG, async move {
		api::tasks::update(task_id, &patch).await
	});
}

pub fn remove(task_id: Uuid) {
	Dispatch::<TaskList>::new().reduce_mut(|list| list.remove(task_id));
	let Some(username) = active_username() else {
		return;
	};
	util::spawn_local(LOG, async move {
		api::tasks::delete(&username, Some(task_id)).await
	});
}

pub fn remove_all() {
	Dispatch::<TaskList>::new().reduce_mut(TaskList::clear);
	let Some(username) = active_username() else {
		return;
	};
	util::spawn_local(LOG, async move {
		api::tasks::delete(&username, None).await
	});
}

fn active_username() -> Option<String> {
	Dispatch::<Session>::new()
		.get()
		.username()
		.map(str::to_owned)
}

/// Refetches the task list whenever the resolved active username
/// changes, including absent-to-present after session hydration. Any
/// optimistic mutation racing this fetch is overwritten.
#[hook]
pub fn use_task_sync() {
	let session = use_store_value::<Session>();
	let username = session.username().map(str::to_owned);
	use_effect_with(username, |username| {
		if let Some(username) = username.clone() {
			let dispatch = Dispatch::<TaskList>::new();
			util::spawn_local(LOG, async move {
				let tasks = api::tasks::fetch(&username).await?;
				log::debug!(target: LOG, "fetched {} tasks for {username}", tasks.len());
				dispatch.reduce_mut(|list| list.replace(tasks));
				Ok(()) as Result<(), crate::response::ApiError>
			});
		}
		|| ()
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	fn list_with(tasks: Vec<Task>) -> TaskList {
		let mut list = TaskList::default();
		list.replace(tasks);
		list
	}

	fn sample(description: &str) -> Task {
		Task::new(description.into(), Priority::Low, None, "ferris".into())
	}

	#[test]
	fn create_then_toggle_moves_task_to_completed_partition() {
		let task = sample("buy milk");
		let id = task.task_id;
		let mut list = list_with(vec![task.clone()]);

		assert_eq!(list.active().len(), 1);
		assert!(list.completed().is_empty());

		list.merge(id, &TaskPatch::completion(true));

		assert!(list.active().is_empty());
		let completed = list.completed();
		assert_eq!(completed.len(), 1);
		let toggled = &completed[0];
		assert!(toggled.is_completed);
		assert_eq!(toggled.task_description, task.task_description);
		assert_eq!(toggled.task_priority, task.task_priority);
		assert_eq!(toggled.datetime, task.datetime);
		assert_eq!(toggled.username, task.username);
	}

	#[test]
	fn merge_ignores_unknown_ids() {
		let mut list = list_with(vec![sample("a")]);
		let before = list.clone();
		list.merge(Uuid::new_v4(), &TaskPatch::completion(true));
		assert_eq!(list, before);
	}

	#[test]
	fn remove_drops_only_the_target() {
		let a = sample("a");
		let b = sample("b");
		let keep = b.task_id;
		let mut list = list_with(vec![a.clone(), b]);
		list.remove(a.task_id);
		let active = list.active();
		assert_eq!(active.len(), 1);
		assert_eq!(active[0].task_id, keep);
	}

	#[test]
	fn clear_empties_both_partitions() {
		let mut done = sample("done");
		done.is_completed = true;
		let mut list = list_with(vec![sample("open"), done]);
		list.clear();
		assert!(list.is_empty());
		assert!(list.active().is_empty());
		assert!(list.completed().is_empty());
	}

	#[test]
	fn replace_overwrites_local_state_wholesale() {
		let mut list = list_with(vec![sample("local-only")]);
		let fetched = vec![sample("server-a"), sample("server-b")];
		list.replace(fetched.clone());
		assert_eq!(list.active(), fetched);
	}
}
