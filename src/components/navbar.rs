use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};
use yewdux::prelude::*;

use crate::route::Route;
use crate::session::{self, Session};

static PAGES: [&str; 2] = ["FAQ", "About"];

#[function_component]
pub fn Navbar() -> Html {
	let session = use_store_value::<Session>();
	let navigator = use_navigator().unwrap();

	let login = {
		let navigator = navigator.clone();
		Callback::from(move |_| {
			navigator.push(&Route::Login);
		})
	};
	let logout = Callback::from(|_| {
		session::logout();
	});

	html! {
		<ybc::Navbar classes={"is-dark"}
			navbrand={Some(html! {
				<Link<Route> classes={"navbar-item"} to={Route::Home}>
					<span class="is-family-monospace has-text-weight-bold">{"TaskLy"}</span>
				</Link<Route>>
			})}
			navstart={Some(html! {<>
				{PAGES.iter().map(|page| html! {
					<a class="navbar-item">{*page}</a>
				}).collect::<Vec<_>>()}
			</>})}
			navend={Some(html! {<>
				{match session.firstname() {
					Some(firstname) => html! {
						<ybc::NavbarDropdown hoverable=true navlink={html! {<>
							<span class="icon"><i class="fas fa-user-circle" /></span>
							<span>{firstname}</span>
						</>}}>
							<ybc::NavbarItem>
								{"Profile"}
							</ybc::NavbarItem>
							<ybc::NavbarItem>
								<ybc::Button classes={"is-dark"} onclick={logout}>{"Logout"}</ybc::Button>
							</ybc::NavbarItem>
						</ybc::NavbarDropdown>
					},
					None => html! {
						<ybc::NavbarItem>
							<ybc::Button classes={"is-primary"} onclick={login}>{"Login"}</ybc::Button>
						</ybc::NavbarItem>
					},
				}}
			</>})}
		/>
	}
}
