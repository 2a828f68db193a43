use yew::prelude::*;
use yew_hooks::use_async;
use yew_router::prelude::{use_navigator, Link};

use crate::api;
use crate::notify;
use crate::response::ApiError;
use crate::route::Route;
use crate::util::{validate_email, validate_password};

fn failure_message(err: &ApiError) -> String {
	match err.server_message() {
		Some(message) => message.to_owned(),
		None => "Registration failed. Try again!".to_owned(),
	}
}

#[function_component]
pub fn Register() -> Html {
	let navigator = use_navigator().unwrap();

	let firstname = use_state(String::new);
	let lastname = use_state(String::new);
	let email = use_state(String::new);
	let password = use_state(String::new);
	let email_error = use_state(|| None::<&'static str>);
	let password_error = use_state(|| None::<&'static str>);

	let submit = {
		let firstname = (*firstname).clone();
		let lastname = (*lastname).clone();
		let email = (*email).clone();
		let password = (*password).clone();
		let navigator = navigator.clone();
		use_async(async move {
			match api::auth::register(&firstname, &lastname, &email, &password).await {
				Ok(response) => {
					notify::success(response.message);
					navigator.push(&Route::Login);
					Ok(())
				}
				Err(err) => {
					log::error!("registration failed: {err:?}");
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
				notify::error("Please fix the errors before registering!");
				return;
			}
			submit.run();
		})
	};

	let blocked = submit.loading
		|| email.is_empty()
		|| password.is_empty()
		|| email_error.is_some()
		|| password_error.is_some();

	html! {
		<ybc::Section>
			<ybc::Container classes={"is-max-desktop"}>
				<ybc::Box>
					<ybc::Title>{"Register"}</ybc::Title>

					<ybc::Field label="Firstname">
						<ybc::Control>
							<ybc::Input
								name="firstname"
								r#type={ybc::InputType::Text}
								placeholder={"Enter your firstname here"}
								value={(*firstname).clone()}
								update={{
									let firstname = firstname.clone();
									Callback::from(move |value: String| firstname.set(value))
								}}
							/>
						</ybc::Control>
					</ybc::Field>

					<ybc::Field label="Lastname">
						<ybc::Control>
							<ybc::Input
								name="lastname"
								r#type={ybc::InputType::Text}
								placeholder={"Enter your lastname here"}
								value={(*lastname).clone()}
								update={{
									let lastname = lastname.clone();
									Callback::from(move |value: String| lastname.set(value))
								}}
							/>
						</ybc::Control>
					</ybc::Field>

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
								placeholder={"Enter new password"}
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
						{"Register"}
					</ybc::Button>

					<p class="mt-4">
						{"Already have an account? "}
						<Link<Route> to={Route::Login}>{"Login here"}</Link<Route>>
					</p>
				</ybc::Box>
			</ybc::Container>
		</ybc::Section>
	}
}
