use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::request;
use crate::response::ApiError;
use crate::session::Identity;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
	#[serde(rename = "accessToken")]
	pub access_token: String,
	#[serde(rename = "userData")]
	pub user_data: Identity,
	pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
	pub message: String,
}

pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
	#[derive(Serialize)]
	struct Credentials<'a> {
		email: &'a str,
		password: &'a str,
	}
	request::<LoginResponse>(Method::POST, "/login")
		.with_json(&Credentials { email, password })
		.send()
		.await
}

pub async fn register(
	firstname: &str,
	lastname: &str,
	email: &str,
	password: &str,
) -> Result<RegisterResponse, ApiError> {
	#[derive(Serialize)]
	struct Registration<'a> {
		firstname: &'a str,
		lastname: &'a str,
		email: &'a str,
		password: &'a str,
	}
	request::<RegisterResponse>(Method::POST, "/register")
		.with_json(&Registration {
			firstname,
			lastname,
			email,
			password,
		})
		.send()
		.await
}
