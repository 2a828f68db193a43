use yew::prelude::*;
use yew_router::Routable;

use crate::page;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/login")]
	Login,
	#[at("/register")]
	Register,
	#[not_found]
	#[at("/404")]
	NotFound,
}

pub fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <page::Home /> },
		Route::Login => html! { <page::Login /> },
		Route::Register => html! { <page::Register /> },
		Route::NotFound => html! {
			<ybc::Section>
				<ybc::Title>{"404: Page not found"}</ybc::Title>
			</ybc::Section>
		},
	}
}
