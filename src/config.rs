use v_utils::macros::{MyConfigPrimitives, Settings};

#[derive(Clone, Debug, Default, MyConfigPrimitives, Settings)]
pub struct AppConfig {
	pub username: String,
	pub password: String,
	/// Course landing page to drive after login
	#[serde(default)]
	pub course_url: String,
	/// Run with visible browser window (non-headless mode)
	#[serde(default)]
	pub visible: bool,
	/// Command run to summon the operator (receives the message as argument)
	#[serde(default)]
	pub alert_hook: Option<String>,
	/// Max throwaway attempts burned while collecting answers (default: 3)
	#[serde(default = "default_collect_passes")]
	pub collect_passes: u32,
	/// Stop collecting once a pass adds no more than this many new answers (default: 0)
	#[serde(default = "default_new_answer_floor")]
	pub new_answer_floor: u32,
}

fn default_collect_passes() -> u32 {
	3
}

fn default_new_answer_floor() -> u32 {
	0
}

impl AppConfig {
	/// Baseline config with the documented knob defaults
	pub fn with_credentials(username: String, password: String, course_url: String, visible: bool) -> Self {
		Self {
			username,
			password,
			course_url,
			visible,
			alert_hook: None,
			collect_passes: default_collect_passes(),
			new_answer_floor: default_new_answer_floor(),
		}
	}
}
