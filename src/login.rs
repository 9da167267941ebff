//! Platform login. The identity provider asks for the username and the
//! password on separate screens, so the form is filled and submitted twice,
//! then we poll until either the dashboard loads or an auth alert shows up.

use std::time::Duration;

use chromiumoxide::Page;
use color_eyre::{
	Result,
	eyre::{bail, eyre},
};
use v_utils::log;

use crate::config::AppConfig;

const LOGIN_URL: &str = "https://www.netacad.com/dashboard";
const DASHBOARD_MARKER: &str = "www.netacad.com/dashboard";

pub async fn login(page: &Page, config: &AppConfig) -> Result<()> {
	page.goto(LOGIN_URL).await.map_err(|e| eyre!("Failed to open login page: {}", e))?;
	tokio::time::sleep(Duration::from_secs(2)).await;

	log!("Filling login form...");
	fill_and_submit(page, "input#username", &config.username).await?;
	tokio::time::sleep(Duration::from_secs(1)).await;
	fill_and_submit(page, "input#password", &config.password).await?;

	loop {
		log!("Waiting for login to complete...");
		tokio::time::sleep(Duration::from_millis(200)).await;

		if auth_alert_visible(page).await? {
			bail!("Login failed: invalid credentials");
		}

		let url = page.url().await.map_err(|e| eyre!("Failed to get URL: {}", e))?.unwrap_or_default();
		if url.contains(DASHBOARD_MARKER) {
			log!("Login successful.");
			return Ok(());
		}
	}
}

/// Fill one field of the staged login form and submit it
async fn fill_and_submit(page: &Page, field_selector: &str, value: &str) -> Result<()> {
	let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
	let script = format!(
		r#"
		(function() {{
			const field = document.querySelector("{field_selector}");
			if (!field) return false;
			field.value = "{escaped}";
			field.dispatchEvent(new Event('input', {{ bubbles: true }}));
			const submit = document.querySelector("input#kc-login[type='submit'], button[type='submit'], input[type='submit']");
			if (!submit) return false;
			submit.click();
			return true;
		}})()
		"#
	);
	let result = page.evaluate(script).await.map_err(|e| eyre!("Failed to fill login form: {}", e))?;
	if result.value().and_then(|v| v.as_bool()) != Some(true) {
		bail!("Login form field {} not found", field_selector);
	}
	Ok(())
}

async fn auth_alert_visible(page: &Page) -> Result<bool> {
	let script = r#"
		(function() {
			const alert = document.querySelector("[role='alert'] .alert__message");
			return !!(alert && alert.getClientRects().length);
		})()
	"#;
	let result = page.evaluate(script).await.map_err(|e| eyre!("Failed to check for auth alert: {}", e))?;
	Ok(result.value().and_then(|v| v.as_bool()) == Some(true))
}
