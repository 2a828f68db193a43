use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yewdux::prelude::*;

use crate::api::auth::LoginResponse;

/// A value persisted in durable browser storage under a fixed key.
/// The session store is the only writer of these entries; views read
/// the store, never the storage.
pub trait PersistedValue {
	fn key() -> &'static str;

	fn load() -> Option<Self>
	where
		Self: Sized + for<'de> Deserialize<'de>,
	{
		LocalStorage::get::<Self>(Self::key()).ok()
	}

	fn persist(&self)
	where
		Self: Serialize,
	{
		let _ = LocalStorage::set(Self::key(), self);
	}

	fn delete() {
		LocalStorage::delete(Self::key());
	}
}

/// The authenticated user as returned by the login endpoint. Read-only
/// for the lifetime of a session; there is no profile-edit flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
	pub email: String,
	pub firstname: String,
	pub lastname: String,
	pub username: String,
}

impl PersistedValue for Identity {
	fn key() -> &'static str {
		"userDetails"
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken(pub String);

impl PersistedValue for AccessToken {
	fn key() -> &'static str {
		"accessToken"
	}
}

/// Global session state: the bearer credential and the identity it was
/// issued for. Hydrated from durable storage exactly once, when the
/// store is first created; afterwards the store is the single source of
/// truth and every mutation writes through to storage.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Session {
	pub access_token: Option<String>,
	pub identity: Option<Identity>,
}

impl Store for Session {
	fn new() -> Self {
		Self {
			access_token: AccessToken::load().map(|token| token.0),
			identity: Identity::load(),
		}
	}

	fn should_notify(&self, old: &Self) -> bool {
		self != old
	}
}

impl Session {
	pub fn is_authenticated(&self) -> bool {
		self.access_token.is_some()
	}

	pub fn username(&self) -> Option<&str> {
		self.identity.as_ref().map(|identity| identity.username.as_str())
	}

	pub fn firstname(&self) -> Option<&str> {
		self.identity.as_ref().map(|identity| identity.firstname.as_str())
	}
}

/// Adopts the credential and identity from a successful login.
pub fn login(response: LoginResponse) {
	AccessToken(response.access_token.clone()).persist();
	response.user_data.persist();
	Dispatch::<Session>::new().reduce_mut(|session| {
		session.access_token = Some(response.access_token);
		session.identity = Some(response.user_data);
	});
}

/// Clears the session from memory and storage, then reloads the page so
/// every store resets to its unauthenticated state.
pub fn logout() {
	AccessToken::delete();
	Identity::delete();
	Dispatch::<Session>::new().reduce_mut(|session| {
		session.access_token = None;
		session.identity = None;
	});
	let _ = gloo_utils::window().location().reload();
}

/// Installs a refreshed bearer token issued by the server mid-session
/// (via the `x-new-access-token` response header).
pub fn replace_access_token(token: String) {
	log::debug!("adopting refreshed access token");
	AccessToken(token.clone()).persist();
	Dispatch::<Session>::new().reduce_mut(|session| {
		session.access_token = Some(token);
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	fn identity() -> Identity {
		Identity {
			email: "ferris@example.com".into(),
			firstname: "Ferris".into(),
			lastname: "Crab".into(),
			username: "ferris".into(),
		}
	}

	#[test]
	fn empty_session_is_unauthenticated() {
		let session = Session::default();
		assert!(!session.is_authenticated());
		assert_eq!(session.username(), None);
		assert_eq!(session.firstname(), None);
	}

	#[test]
	fn token_presence_authenticates() {
		let session = Session {
			access_token: Some("token".into()),
			identity: Some(identity()),
		};
		assert!(session.is_authenticated());
		assert_eq!(session.username(), Some("ferris"));
		assert_eq!(session.firstname(), Some("Ferris"));
	}

	#[test]
	fn storage_keys_are_fixed() {
		assert_eq!(AccessToken::key(), "accessToken");
		assert_eq!(Identity::key(), "userDetails");
	}
}
