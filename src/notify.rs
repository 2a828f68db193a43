use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::*;

/// How long a toast stays on screen before dismissing itself.
const DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Success,
	Error,
}

impl Level {
	fn class(&self) -> &'static str {
		match self {
			Self::Success => "is-success",
			Self::Error => "is-danger",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
	id: u32,
	level: Level,
	message: String,
}

/// Transient notifications, newest last. Entries expire on a timer or
/// when the user dismisses them.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct Toasts {
	items: Vec<Toast>,
	next_id: u32,
}

impl Toasts {
	fn push(&mut self, level: Level, message: String) -> u32 {
		let id = self.next_id;
		self.next_id = self.next_id.wrapping_add(1);
		self.items.push(Toast { id, level, message });
		id
	}

	fn dismiss(&mut self, id: u32) {
		self.items.retain(|toast| toast.id != id);
	}
}

pub fn success(message: impl Into<String>) {
	show(Level::Success, message.into());
}

pub fn error(message: impl Into<String>) {
	show(Level::Error, message.into());
}

fn show(level: Level, message: String) {
	let dispatch = Dispatch::<Toasts>::new();
	let mut id = 0;
	dispatch.reduce_mut(|toasts| {
		id = toasts.push(level, message);
	});
	Timeout::new(DISMISS_MS, move || {
		dispatch.reduce_mut(|toasts| toasts.dismiss(id));
	})
	.forget();
}

#[function_component]
pub fn ToastTray() -> Html {
	let (toasts, dispatch) = use_store::<Toasts>();
	if toasts.items.is_empty() {
		return html! {};
	}
	html! {
		<div class="toast-tray" style="position: fixed; bottom: 1rem; left: 1rem; z-index: 40; max-width: 24rem;">
			{toasts.items.iter().map(|toast| {
				let onclick = {
					let dispatch = dispatch.clone();
					let id = toast.id;
					Callback::from(move |_| {
						dispatch.reduce_mut(|toasts| toasts.dismiss(id));
					})
				};
				html! {
					<div key={toast.id} class={format!("notification {}", toast.level.class())}>
						<button class="delete" onclick={onclick} />
						{&toast.message}
					</div>
				}
			}).collect::<Vec<_>>()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn push_assigns_increasing_ids() {
		let mut toasts = Toasts::default();
		let a = toasts.push(Level::Success, "saved".into());
		let b = toasts.push(Level::Error, "failed".into());
		assert_ne!(a, b);
		assert_eq!(toasts.items.len(), 2);
	}

	#[test]
	fn dismiss_removes_only_the_target() {
		let mut toasts = Toasts::default();
		let a = toasts.push(Level::Success, "saved".into());
		let b = toasts.push(Level::Error, "failed".into());
		toasts.dismiss(a);
		assert_eq!(toasts.items.len(), 1);
		assert_eq!(toasts.items[0].id, b);
	}
}
