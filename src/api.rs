use reqwest::Method;
use serde::de::DeserializeOwned;
use yewdux::prelude::Dispatch;

use crate::config;
use crate::response::Response;
use crate::session::Session;

pub mod auth;
pub mod tasks;

/// Builds a request against the task API. The bearer credential is read
/// from the session store and attached when present; unauthenticated
/// endpoints simply go out without one.
pub fn request<T>(method: Method, path: &str) -> Response<T>
where
	T: DeserializeOwned,
{
	let url = format!("{}{path}", config::API_BASE_URL);
	let mut builder = reqwest::Client::new().request(method, &url);
	builder = builder.header("Content-Type", "application/json");
	let session = Dispatch::<Session>::new().get();
	if let Some(token) = &session.access_token {
		builder = builder.header("Authorization", format!("Bearer {token}"));
	}
	Response::<T>::from(builder)
}
