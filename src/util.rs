use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Spawns a fire-and-forget future on the browser task queue. Failures are
/// logged under `target` and otherwise dropped.
pub fn spawn_local<F, E>(target: &'static str, future: F)
where
	F: std::future::Future<Output = Result<(), E>> + 'static,
	E: std::fmt::Debug + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::error!(target: target, "{err:?}");
		}
	});
}

pub fn validate_email(value: &str) -> Option<&'static str> {
	if value.is_empty() {
		Some("Email is required!")
	} else if !EMAIL_PATTERN.is_match(value) {
		Some("Must contain '@' and '.'")
	} else {
		None
	}
}

pub fn validate_password(value: &str) -> Option<&'static str> {
	if value.is_empty() {
		Some("Password is required!")
	} else if value.len() < 8 {
		Some("Password must be at least 8 characters.")
	} else {
		None
	}
}

/// Renders a due timestamp in the user's local time, e.g.
/// `3rd, Mar 2026 at 2:05 PM`.
pub fn format_due(due: &DateTime<Utc>) -> String {
	let local = due.with_timezone(&Local);
	let day = local.day();
	format!(
		"{day}{}, {} at {}",
		ordinal_suffix(day),
		local.format("%b %Y"),
		local.format("%-I:%M %p")
	)
}

fn ordinal_suffix(day: u32) -> &'static str {
	match day {
		11..=13 => "th",
		_ => match day % 10 {
			1 => "st",
			2 => "nd",
			3 => "rd",
			_ => "th",
		},
	}
}

/// Parses the value of an `<input type="datetime-local">`, interpreting it
/// in the user's local timezone.
pub fn parse_due_input(value: &str) -> Option<DateTime<Utc>> {
	let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()?;
	let local = Local.from_local_datetime(&naive).single()?;
	Some(local.with_timezone(&Utc))
}

/// Formats a due timestamp back into `<input type="datetime-local">` form.
pub fn format_due_input(due: &DateTime<Utc>) -> String {
	due.with_timezone(&Local).format("%Y-%m-%dT%H:%M").to_string()
}

/// Parses the value of an `<input type="date">` calendar filter.
pub fn parse_day_input(value: &str) -> Option<NaiveDate> {
	NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn email_accepts_simple_addresses() {
		assert_eq!(validate_email("user@example.com"), None);
		assert_eq!(validate_email("a.b+c@sub.domain.org"), None);
	}

	#[test]
	fn email_rejects_missing_parts() {
		assert_eq!(validate_email(""), Some("Email is required!"));
		assert!(validate_email("userexample.com").is_some());
		assert!(validate_email("user@examplecom").is_some());
		assert!(validate_email("user @example.com").is_some());
		assert!(validate_email("user@.").is_some());
	}

	#[test]
	fn password_rejects_short_values() {
		assert_eq!(validate_password(""), Some("Password is required!"));
		assert!(validate_password("1234567").is_some());
		assert_eq!(validate_password("12345678"), None);
	}

	#[test]
	fn ordinal_suffixes_cover_teens() {
		assert_eq!(ordinal_suffix(1), "st");
		assert_eq!(ordinal_suffix(2), "nd");
		assert_eq!(ordinal_suffix(3), "rd");
		assert_eq!(ordinal_suffix(4), "th");
		assert_eq!(ordinal_suffix(11), "th");
		assert_eq!(ordinal_suffix(12), "th");
		assert_eq!(ordinal_suffix(13), "th");
		assert_eq!(ordinal_suffix(21), "st");
		assert_eq!(ordinal_suffix(22), "nd");
		assert_eq!(ordinal_suffix(23), "rd");
		assert_eq!(ordinal_suffix(31), "st");
	}

	#[test]
	fn due_input_round_trips_through_local_time() {
		let parsed = parse_due_input("2026-03-03T14:05").expect("parses");
		assert_eq!(format_due_input(&parsed), "2026-03-03T14:05");
	}

	#[test]
	fn due_input_rejects_garbage() {
		assert_eq!(parse_due_input(""), None);
		assert_eq!(parse_due_input("not-a-date"), None);
		assert_eq!(parse_due_input("2026-03-03"), None);
	}

	#[test]
	fn day_input_parses_calendar_dates() {
		assert_eq!(
			parse_day_input("2026-03-03"),
			NaiveDate::from_ymd_opt(2026, 3, 3)
		);
		assert_eq!(parse_day_input(""), None);
	}
}
