use reqwest::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::request;
use crate::data::{Task, TaskPatch};
use crate::response::ApiError;

static REFRESHED_TOKEN_HEADER: &str = "x-new-access-token";

pub async fn fetch(username: &str) -> Result<Vec<Task>, ApiError> {
	#[derive(Deserialize)]
	struct TasksResponse {
		tasks: Vec<Task>,
	}
	let response = request::<TasksResponse>(Method::GET, "/getTasks")
		.with_query(&[("username", username)])
		.send()
		.await?;
	Ok(response.tasks)
}

/// Stores a new task. Returns the refreshed bearer token when the server
/// rotated it mid-session.
pub async fn create(task: &Task) -> Result<Option<String>, ApiError> {
	let response = request::<()>(Method::POST, "/addTask")
		.with_json(task)
		.send_raw()
		.await?;
	Ok(response
		.headers()
		.get(REFRESHED_TOKEN_HEADER)
		.and_then(|value| value.to_str().ok())
		.map(str::to_owned))
}

pub async fn update(task_id: Uuid, patch: &TaskPatch) -> Result<(), ApiError> {
	#[derive(Serialize)]
	struct UpdatePayload<'a> {
		task_id: Uuid,
		#[serde(flatten)]
		patch: &'a TaskPatch,
	}
	request::<()>(Method::PUT, "/updateTask")
		.with_json(&UpdatePayload { task_id, patch })
		.send_raw()
		.await?;
	Ok(())
}

/// Deletes one task, or every task the user owns when `task_id` is absent.
pub async fn delete(username: &str, task_id: Option<Uuid>) -> Result<(), ApiError> {
	let mut query = vec![("username", username.to_owned())];
	if let Some(task_id) = task_id {
		query.push(("task_id", task_id.to_string()));
	}
	request::<()>(Method::DELETE, "/deleteTask")
		.with_query(&query)
		.send_raw()
		.await?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Priority;
	use chrono::{TimeZone, Utc};

	#[test]
	fn update_payload_flattens_patch_beside_the_id() {
		let task_id = Uuid::new_v4();
		let patch = TaskPatch::edit(
			"walk dog".into(),
			Priority::Medium,
			Some(Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap()),
		);
		#[derive(Serialize)]
		struct UpdatePayload<'a> {
			task_id: Uuid,
			#[serde(flatten)]
			patch: &'a TaskPatch,
		}
		let value = serde_json::to_value(UpdatePayload {
			task_id,
			patch: &patch,
		})
		.unwrap();
		let fields = value.as_object().unwrap();
		assert_eq!(fields["task_id"], task_id.to_string());
		assert_eq!(fields["task_description"], "walk dog");
		assert_eq!(fields["task_priority"], "medium");
		assert!(fields.contains_key("datetime"));
		assert!(!fields.contains_key("is_completed"));
	}
}
