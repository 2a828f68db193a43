use yew::prelude::*;
use yew_hooks::use_async;
use yew_router::prelude::{use_navigator, Link};

use crate::api;
use crate::notify;
use crate::response::ApiError;
use crate::route::Route;
use crate::session;
use crate::util::{validate_email, validate_password};

fn failure_message(err: &ApiError) -> String {
	match err.server_message() {
		Some(message) => message.to_owned(),
		None => "Login failed. Try again!".to_owned(),
	}
}

#[function_component]
pub fn Login() -> Html {
	let navigator = use_navigator().unwrap();

	let email = use_state(String::new);
	let password = use_state(String::new);
	let email_error = use_state(|| None::<&'static str>);
	let password_error = use_state(|| None::<&'static str>);

	let submit = {
		let email = (*email).clone();
		let password = (*password).clone();
		let navigator = navigator.clone();
		use_async(async move {
			match api::auth::login(&email, &password).await {
				Ok(response) => {
					let message = response.message.clone();
					session::login(response);
					notify::success(message);
					navigator.push(&Route::Home);
					Ok(())
				}
				Err(err) => {
					log::error!("login failed: {err:?}");
					notify::error(failure_message(&err));
					Err(())
				}
			}
		})
	};

	let on_email = {
		let email = email.clone();
		let email_error = email_error.clone();
		Callback::from(move |value: String| {
			email_error.set(validate_email(&value));
			email.set(value);
		})
	};
	let on_password = {
		let password = password.clone();
		let password_error = password_error.clone();
		Callback::from(move |value: String| {
			password_error.set(validate_password(&value));
			password.set(value);
		})
	};

	let on_submit = {
		let email = email.clone();
		let password = password.clone();
		let email_error = email_error.clone();
		let password_error = password_error.clone();
		let submit = submit.clone();
		Callback::from(move |_| {
			if email.is_empty() || password.is_empty() {
				notify::error("Email and password are required!");
				return;
			}
			if email_error.is_some() || password_error.is_some() {
				notify::error("Please fix the errors before logging in!");
				return;
			}
			submit.run();
		})
	};

	// Provider sign-in is not wired to the session; success only notifies.
	let on_google = Callback::from(|_| {
		notify::success("Logged in successfully!");
	});

	let blocked = submit.loading
		|| email.is_empty()
		|| password.is_empty()
		|| email_error.is_some()
		|| password_error.is_some();

	html! {
		<ybc::Section>
			<ybc::Container classes={"is-max-desktop"}>
				<ybc::Box>
					<ybc::Title>{"Login"}</ybc::Title>

					<ybc::Field label="Email">
						<ybc::Control>
							<ybc::Input
								name="email"
								r#type={ybc::InputType::Email}
								placeholder={"Enter your email here"}
								value={(*email).clone()}
								update={on_email}
							/>
						</ybc::Control>
						{if let Some(error) = *email_error {
							html! { <p class="help is-danger">{error}</p> }
						} else {
							html! {}
						}}
					</ybc::Field>

					<ybc::Field label="Password">
						<ybc::Control>
							<ybc::Input
								name="password"
								r#type={ybc::InputType::Password}
								placeholder={"Enter your password here"}
								value={(*password).clone()}
								update={on_password}
							/>
						</ybc::Control>
						{if let Some(error) = *password_error {
							html! { <p class="help is-danger">{error}</p> }
						} else {
							html! {}
						}}
					</ybc::Field>

					<ybc::Button
						classes={"is-primary"}
						onclick={on_submit}
						loading={submit.loading}
						disabled={blocked}
					>
						{"Login"}
					</ybc::Button>

					<p class="has-text-centered my-3">{"— OR —"}</p>

					<ybc::Button classes={"is-light is-fullwidth"} onclick={on_google}>
						<span class="icon"><i class="fab fa-google" /></span>
						<span>{"Sign in with Google"}</span>
					</ybc::Button>

					<p class="mt-4">
						{"Need an account? "}
						<Link<Route> to={Route::Register}>{"Register here"}</Link<Route>>
					</p>
				</ybc::Box>
			</ybc::Container>
		</ybc::Section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn server_messages_surface_verbatim() {
		let err = ApiError::Server {
			status: 401,
			message: "Invalid credentials".into(),
		};
		assert_eq!(failure_message(&err), "Invalid credentials");
	}

	#[test]
	fn other_failures_fall_back_to_the_generic_message() {
		let err = ApiError::Decode {
			body: "<html>".into(),
			source: serde_json::from_str::<serde_json::Value>("<").unwrap_err(),
		};
		assert_eq!(failure_message(&err), "Login failed. Try again!");
	}
}
