use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("{message}")]
	Server { status: u16, message: String },
	#[error("invalid json: {body:?}\nerror: {source:?}")]
	Decode {
		body: String,
		source: serde_json::Error,
	},
}

impl ApiError {
	/// The server's own message when one was decoded, for user-facing
	/// notifications; transport and decode failures fall back to a
	/// caller-provided generic message.
	pub fn server_message(&self) -> Option<&str> {
		match self {
			Self::Server { message, .. } => Some(message),
			_ => None,
		}
	}
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
	error: Option<String>,
	message: Option<String>,
}

/// A pending API response, typed by the payload it decodes to.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}

impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}

impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_query<Q>(mut self, query: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.query(query);
		self
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	pub async fn send(self) -> Result<T, ApiError> {
		let response = self.send_raw().await?;
		let text = response.text().await?;
		match serde_json::from_str(&text) {
			Ok(data) => Ok(data),
			Err(source) => Err(ApiError::Decode { body: text, source }),
		}
	}

	/// Sends the request and returns the raw response after status
	/// checking, for callers that need headers or ignore the body.
	pub async fn send_raw(self) -> Result<reqwest::Response, ApiError> {
		let response = self.builder.send().await?;
		let status = response.status();
		if status.is_success() {
			return Ok(response);
		}
		let message = match response.text().await {
			Ok(text) => decode_error_message(&text),
			Err(_) => None,
		};
		Err(ApiError::Server {
			status: status.as_u16(),
			message: message.unwrap_or_else(|| format!("request failed with status {status}")),
		})
	}
}

fn decode_error_message(body: &str) -> Option<String> {
	let decoded = serde_json::from_str::<ErrorBody>(body).ok()?;
	decoded.error.or(decoded.message)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_body_prefers_the_error_field() {
		assert_eq!(
			decode_error_message(r#"{"error":"bad credentials","message":"nope"}"#),
			Some("bad credentials".into())
		);
		assert_eq!(
			decode_error_message(r#"{"message":"user exists"}"#),
			Some("user exists".into())
		);
		assert_eq!(decode_error_message("not json"), None);
		assert_eq!(decode_error_message("{}"), None);
	}

	#[test]
	fn server_message_only_surfaces_decoded_errors() {
		let err = ApiError::Server {
			status: 401,
			message: "bad credentials".into(),
		};
		assert_eq!(err.server_message(), Some("bad credentials"));

		let err = ApiError::Decode {
			body: "<html>".into(),
			source: serde_json::from_str::<ErrorBody>("<html>").unwrap_err(),
		};
		assert_eq!(err.server_message(), None);
	}
}
