//! The operator checkpoint: an attention-getting side effect followed by a
//! blocking wait for explicit acknowledgement. Invoked when answer coverage
//! falls short and at the end of a run; never on a timer.

use v_utils::{io::confirm, log};

use crate::config::AppConfig;

/// Fire the configured alert command with the message as its argument.
/// Non-blocking; failures to spawn are ignored.
pub fn run_alert_hook(config: &AppConfig, message: &str) {
	if let Some(ref hook) = config.alert_hook {
		log!("Running alert hook: {} {:?}", hook, message);
		// escape single quotes for the shell: replace ' with '\''
		let escaped = message.replace('\'', "'\\''");
		let _ = tokio::process::Command::new("sh").arg("-c").arg(format!("{} '{}'", hook, escaped)).spawn();
	}
}

/// Blocks until the operator explicitly acknowledges. Never times out.
pub async fn wait_for_operator(config: &AppConfig, message: &str) {
	log!("{message}");
	run_alert_hook(config, message);
	while !confirm("Acknowledge and continue?").await {
		log!("Still waiting on the operator...");
	}
}
