/// Base URL of the task API. Overridable at build time so deployed
/// bundles can point at a hosted backend.
pub const API_BASE_URL: &str = match option_env!("TASKLY_API_URL") {
	Some(url) => url,
	None => "http://localhost:5000",
};
