use yew::prelude::*;
use yewdux::prelude::*;

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AuthSwitchProps {
	#[prop_or_default]
	pub identified: Option<Html>,
	#[prop_or_default]
	pub anonymous: Option<Html>,
}

/// Renders one of two branches depending on the session store. Views go
/// through this (and therefore through the store) instead of reading
/// durable storage themselves.
#[function_component]
pub fn AuthSwitch(props: &AuthSwitchProps) -> Html {
	let session = use_store_value::<Session>();
	let empty = || html! {};
	if session.is_authenticated() {
		props.identified.clone().unwrap_or_else(empty)
	} else {
		props.anonymous.clone().unwrap_or_else(empty)
	}
}
