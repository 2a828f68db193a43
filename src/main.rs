use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod components;
mod config;
mod data;
mod notify;
mod page;
mod response;
mod route;
mod session;
mod tasks;
mod util;

fn main() {
	console_error_panic_hook::set_once();
	let _ = console_log::init_with_level(log::Level::Debug);
	yew::Renderer::<App>::new().render();
}

#[function_component]
fn App() -> Html {
	html! {
		<BrowserRouter>
			<Switch<route::Route> render={route::switch} />
			<notify::ToastTray />
		</BrowserRouter>
	}
}
