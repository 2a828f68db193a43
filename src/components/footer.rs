use chrono::Datelike;
use yew::prelude::*;

#[function_component]
pub fn Footer() -> Html {
	let year = chrono::Local::now().year();
	html! {
		<footer class="footer has-background-dark has-text-white has-text-centered py-3 mt-auto">
			<p>{format!("© {year} TaskLy")}</p>
		</footer>
	}
}
