use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::*;

use crate::components::{AddTask, AuthSwitch, Footer, Navbar, TaskBox};
use crate::route::Route;
use crate::session::Session;
use crate::tasks::use_task_sync;

#[function_component]
pub fn Home() -> Html {
	let session = use_store_value::<Session>();
	let navigator = use_navigator().unwrap();
	use_task_sync();

	let goto_login = Callback::from(move |_| {
		navigator.push(&Route::Login);
	});
	let welcome = session
		.firstname()
		.map(|firstname| format!("Welcome, {firstname}!"))
		.unwrap_or_else(|| "Welcome!".to_owned());

	html! {
		<div class="is-flex is-flex-direction-column" style="min-height: 100vh;">
			<Navbar />
			<main class="is-flex-grow-1 m-2">
				<ybc::Container>
					<AuthSwitch
						identified={html! {
							<div class="mt-4">
								<ybc::Title>{welcome}</ybc::Title>
								<AddTask />
								<hr class="my-2" />
								<TaskBox />
							</div>
						}}
						anonymous={html! {
							<ybc::Section>
								<ybc::Title>{"Your day, in order."}</ybc::Title>
								<ybc::Subtitle>
									{"TaskLy keeps your personal tasks in one place: capture them, prioritize them, and check them off."}
								</ybc::Subtitle>
								<ybc::Button classes={"is-primary"} onclick={goto_login}>
									{"Get Started"}
								</ybc::Button>
							</ybc::Section>
						}}
					/>
				</ybc::Container>
			</main>
			<Footer />
		</div>
	}
}
