use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
	Low,
	Medium,
	High,
}

impl Priority {
	pub fn all() -> [Self; 3] {
		[Self::Low, Self::Medium, Self::High]
	}

	pub fn value(&self) -> &'static str {
		match self {
			Self::Low => "low",
			Self::Medium => "medium",
			Self::High => "high",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Low => "Low",
			Self::Medium => "Medium",
			Self::High => "High",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"low" => Some(Self::Low),
			"medium" => Some(Self::Medium),
			"high" => Some(Self::High),
			_ => None,
		}
	}
}

impl Default for Priority {
	fn default() -> Self {
		Self::Low
	}
}

/// A single to-do item, mirroring the wire record the task API stores.
/// The identifier is assigned client-side before the server ever sees
/// the task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
	pub task_id: Uuid,
	pub task_description: String,
	pub task_priority: Priority,
	pub datetime: Option<DateTime<Utc>>,
	pub is_completed: bool,
	pub username: String,
}

impl Task {
	pub fn new(
		description: String,
		priority: Priority,
		due: Option<DateTime<Utc>>,
		username: String,
	) -> Self {
		Self {
			task_id: Uuid::new_v4(),
			task_description: description,
			task_priority: priority,
			datetime: due,
			is_completed: false,
			username,
		}
	}

	/// The calendar day this task is due, in the user's local timezone.
	pub fn due_local_day(&self) -> Option<NaiveDate> {
		let due = self.datetime.as_ref()?;
		Some(due.with_timezone(&Local).date_naive())
	}

	pub fn apply(&mut self, patch: &TaskPatch) {
		if let Some(description) = &patch.task_description {
			self.task_description = description.clone();
		}
		if let Some(priority) = patch.task_priority {
			self.task_priority = priority;
		}
		if let Some(due) = &patch.datetime {
			self.datetime = *due;
		}
		if let Some(done) = patch.is_completed {
			self.is_completed = done;
		}
	}
}

/// Partial update for a task. Only the mutable fields are enumerated;
/// unset fields stay off the wire entirely. `datetime` is tri-state:
/// absent, set, or cleared (`Some(None)` encodes as `null`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub task_description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub task_priority: Option<Priority>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub datetime: Option<Option<DateTime<Utc>>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_completed: Option<bool>,
}

impl TaskPatch {
	pub fn completion(done: bool) -> Self {
		Self {
			is_completed: Some(done),
			..Default::default()
		}
	}

	pub fn edit(
		description: String,
		priority: Priority,
		due: Option<DateTime<Utc>>,
	) -> Self {
		Self {
			task_description: Some(description),
			task_priority: Some(priority),
			datetime: Some(due),
			..Default::default()
		}
	}
}

/// Order-preserving view filter over a task partition. `priority` of
/// `None` means all priorities; `day` compares against the task's local
/// calendar date.
pub fn filter_tasks<'a>(
	tasks: &'a [Task],
	priority: Option<Priority>,
	day: Option<NaiveDate>,
) -> Vec<&'a Task> {
	tasks
		.iter()
		.filter(|task| match priority {
			Some(priority) => task.task_priority == priority,
			None => true,
		})
		.filter(|task| match day {
			Some(day) => task.due_local_day() == Some(day),
			None => true,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	fn task(description: &str, priority: Priority) -> Task {
		Task::new(description.into(), priority, None, "ferris".into())
	}

	#[test]
	fn new_tasks_start_incomplete_with_unique_ids() {
		let a = task("write report", Priority::Low);
		let b = task("write report", Priority::Low);
		assert!(!a.is_completed);
		assert_ne!(a.task_id, b.task_id);
		assert_eq!(a.username, "ferris");
	}

	#[test]
	fn wire_encoding_uses_api_field_names() {
		let due = Utc.with_ymd_and_hms(2026, 3, 3, 12, 0, 0).unwrap();
		let mut task = task("water plants", Priority::High);
		task.datetime = Some(due);

		let value = serde_json::to_value(&task).unwrap();
		assert_eq!(value["task_priority"], "high");
		assert_eq!(value["is_completed"], false);
		assert!(value["task_id"].is_string());
		assert_eq!(value["task_description"], "water plants");
		assert_eq!(value["username"], "ferris");
		assert!(value["datetime"].as_str().unwrap().starts_with("2026-03-03T12:00:00"));
	}

	#[test]
	fn absent_due_date_encodes_as_null() {
		let value = serde_json::to_value(task("a", Priority::Low)).unwrap();
		assert!(value["datetime"].is_null());
		assert!(value.as_object().unwrap().contains_key("datetime"));
	}

	#[test]
	fn patch_serializes_only_set_fields() {
		let patch = TaskPatch::completion(true);
		let value = serde_json::to_value(&patch).unwrap();
		let fields = value.as_object().unwrap();
		assert_eq!(fields.len(), 1);
		assert_eq!(fields["is_completed"], true);
	}

	#[test]
	fn patch_encodes_cleared_due_date_as_null() {
		let patch = TaskPatch::edit("revised".into(), Priority::Medium, None);
		let value = serde_json::to_value(&patch).unwrap();
		let fields = value.as_object().unwrap();
		assert_eq!(fields["task_description"], "revised");
		assert_eq!(fields["task_priority"], "medium");
		assert!(fields["datetime"].is_null());
		assert!(fields.contains_key("datetime"));
		assert!(!fields.contains_key("is_completed"));
	}

	#[test]
	fn apply_merges_patch_fields_and_leaves_the_rest() {
		let due = Utc.with_ymd_and_hms(2026, 1, 1, 8, 30, 0).unwrap();
		let mut subject = task("draft email", Priority::Low);
		subject.datetime = Some(due);

		subject.apply(&TaskPatch::completion(true));
		assert!(subject.is_completed);
		assert_eq!(subject.task_description, "draft email");
		assert_eq!(subject.datetime, Some(due));

		subject.apply(&TaskPatch::edit("send email".into(), Priority::High, None));
		assert_eq!(subject.task_description, "send email");
		assert_eq!(subject.task_priority, Priority::High);
		assert_eq!(subject.datetime, None);
		assert!(subject.is_completed);
	}

	#[test]
	fn priority_filter_all_is_identity() {
		let tasks = vec![
			task("a", Priority::Low),
			task("b", Priority::High),
			task("c", Priority::Medium),
		];
		let filtered = filter_tasks(&tasks, None, None);
		let ids: Vec<_> = filtered.iter().map(|t| t.task_id).collect();
		let expected: Vec<_> = tasks.iter().map(|t| t.task_id).collect();
		assert_eq!(ids, expected);
	}

	#[test]
	fn priority_filter_keeps_matches_in_order() {
		let tasks = vec![
			task("a", Priority::Low),
			task("b", Priority::High),
			task("c", Priority::High),
		];
		let filtered = filter_tasks(&tasks, Some(Priority::High), None);
		assert_eq!(
			filtered.iter().map(|t| t.task_description.as_str()).collect::<Vec<_>>(),
			vec!["b", "c"]
		);
	}

	#[test]
	fn day_filter_matches_local_calendar_date() {
		let due = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
		let mut dated = task("a", Priority::Low);
		dated.datetime = Some(due);
		let undated = task("b", Priority::Low);

		let day = dated.due_local_day().unwrap();
		let tasks = vec![dated.clone(), undated];
		let filtered = filter_tasks(&tasks, None, Some(day));
		assert_eq!(filtered.len(), 1);
		assert_eq!(filtered[0].task_id, dated.task_id);
	}

	#[test]
	fn priority_round_trips_through_wire_values() {
		for priority in Priority::all() {
			assert_eq!(Priority::parse(priority.value()), Some(priority));
		}
		assert_eq!(Priority::parse("urgent"), None);
	}
}
