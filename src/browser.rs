//! chromiumoxide-backed implementations of the element capability set and the
//! course navigator. Everything that knows about `Page`, JS evaluation, or
//! viewport scrolling lives here.

use std::time::Duration;

use chromiumoxide::{
	Page,
	browser::{Browser, BrowserConfig},
};
use color_eyre::{
	Result,
	eyre::{bail, eyre},
};
use futures::StreamExt;
use v_utils::log;

use crate::{
	config::AppConfig,
	element::{ElemState, Element, first_child, soft_click},
	navigator::CourseNavigator,
	selectors,
};

const POLL: Duration = Duration::from_millis(300);

/// Launch the browser and spawn the event drain task
pub async fn launch(config: &AppConfig) -> Result<(Browser, tokio::task::JoinHandle<()>)> {
	let browser_config = if config.visible {
		BrowserConfig::builder().with_head().build().map_err(|e| eyre!("Failed to build browser config: {}", e))?
	} else {
		BrowserConfig::builder().build().map_err(|e| eyre!("Failed to build browser config: {}", e))?
	};

	let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| eyre!("Failed to launch browser: {}", e))?;

	// consume events so the browser doesn't hang
	let handle = tokio::spawn(async move { while handler.next().await.is_some() {} });

	Ok((browser, handle))
}

/// A DOM node addressed by its query path from the document root: each step is
/// a (selector, index) pair resolved with `querySelectorAll`. Paths stay valid
/// across re-renders as long as the page keeps the same shape, which suits a
/// platform that re-renders widgets on every interaction.
//
// TODO: resolve the course-content iframe document and scope section queries
// to it, so platforms that host the module body in a frame work unmodified.
#[derive(Clone)]
pub struct CdpElement {
	page: Page,
	path: Vec<(String, usize)>,
}

impl CdpElement {
	/// The document itself; the starting point for all queries
	pub fn root(page: Page) -> Self {
		Self { page, path: Vec::new() }
	}

	fn descend(&self, selector: &str, index: usize) -> Self {
		let mut path = self.path.clone();
		path.push((selector.to_string(), index));
		Self { page: self.page.clone(), path }
	}

	/// Evaluate `op` (a JS statement list that may use `el`) against the
	/// resolved node; `el` is null when the path no longer resolves
	async fn eval_on(&self, op: &str) -> Result<serde_json::Value> {
		let steps = serde_json::to_string(&self.path).map_err(|e| eyre!("Failed to encode element path: {}", e))?;
		let script = format!(
			r#"
			(function() {{
				const steps = {steps};
				let el = document;
				for (const [sel, idx] of steps) {{
					if (!el || !el.querySelectorAll) {{ el = null; break; }}
					const found = el.querySelectorAll(sel);
					if (idx >= found.length) {{ el = null; break; }}
					el = found[idx];
				}}
				{op}
			}})()
			"#
		);
		let result = self.page.evaluate(script).await.map_err(|e| eyre!("Failed to evaluate element script: {}", e))?;
		Ok(result.value().cloned().unwrap_or(serde_json::Value::Null))
	}
}

impl Element for CdpElement {
	async fn exists(&self) -> bool {
		self.eval_on("return el !== null;").await.ok().and_then(|v| v.as_bool()).unwrap_or(false)
	}

	async fn is_visible(&self) -> bool {
		self.eval_on("return !!(el && el.getClientRects && el.getClientRects().length);")
			.await
			.ok()
			.and_then(|v| v.as_bool())
			.unwrap_or(false)
	}

	async fn click(&self) -> Result<()> {
		let op = r#"
			if (!el) return 'missing';
			if (!el.getClientRects || el.getClientRects().length === 0) return 'hidden';
			el.scrollIntoView({block: 'center'});
			el.click();
			return 'ok';
		"#;
		match self.eval_on(op).await?.as_str() {
			Some("ok") => Ok(()),
			Some("hidden") => Err(eyre!("element is not visible")),
			_ => Err(eyre!("element not found")),
		}
	}

	async fn force_click(&self) -> Result<()> {
		let op = r#"
			if (!el || !el.click) return 'missing';
			el.click();
			return 'ok';
		"#;
		match self.eval_on(op).await?.as_str() {
			Some("ok") => Ok(()),
			_ => Err(eyre!("element not found")),
		}
	}

	async fn attribute(&self, name: &str) -> Result<Option<String>> {
		let name_json = serde_json::to_string(name).map_err(|e| eyre!("Failed to encode attribute name: {}", e))?;
		let op = format!(
			r#"
			if (!el || !el.getAttribute) return null;
			return JSON.stringify({{ value: el.getAttribute({name_json}) }});
		"#
		);
		let result = self.eval_on(&op).await?;
		let Some(payload) = result.as_str() else {
			bail!("element not found");
		};
		let parsed: serde_json::Value = serde_json::from_str(payload).map_err(|e| eyre!("Failed to parse attribute payload: {}", e))?;
		Ok(parsed["value"].as_str().map(|s| s.to_string()))
	}

	async fn text(&self) -> Result<String> {
		let op = r#"
			if (!el) return null;
			const target = el === document ? document.body : el;
			return target ? (target.textContent || '') : '';
		"#;
		let result = self.eval_on(op).await?;
		result.as_str().map(|s| s.to_string()).ok_or_else(|| eyre!("element not found"))
	}

	async fn wait_for(&self, state: ElemState, timeout: Duration) -> Result<()> {
		let deadline = tokio::time::Instant::now() + timeout;
		loop {
			let satisfied = match state {
				ElemState::Attached => self.exists().await,
				ElemState::Visible => self.is_visible().await,
				ElemState::Hidden => !self.is_visible().await,
			};
			if satisfied {
				return Ok(());
			}
			if tokio::time::Instant::now() >= deadline {
				bail!("timed out waiting for {state:?}");
			}
			tokio::time::sleep(POLL).await;
		}
	}

	async fn children(&self, selector: &str) -> Result<Vec<Self>> {
		let sel_json = serde_json::to_string(selector).map_err(|e| eyre!("Failed to encode selector: {}", e))?;
		let op = format!(
			r#"
			if (!el || !el.querySelectorAll) return -1;
			return el.querySelectorAll({sel_json}).length;
		"#
		);
		let count = self.eval_on(&op).await?.as_i64().unwrap_or(-1);
		if count < 0 {
			bail!("element not found");
		}
		Ok((0..count as usize).map(|i| self.descend(selector, i)).collect())
	}
}

/// Drives the course shell: section discovery, read-through scrolling, and the
/// next-page button with its settle logic.
pub struct CdpNavigator {
	page: Page,
}

impl CdpNavigator {
	pub fn new(page: Page) -> Self {
		Self { page }
	}

	fn root(&self) -> CdpElement {
		CdpElement::root(self.page.clone())
	}

	async fn next_btn_disabled(&self) -> Result<Option<bool>> {
		let Some(next) = first_child(&self.root(), selectors::NEXT_BTN).await else {
			return Ok(None);
		};
		Ok(Some(next.attribute("disabled").await?.is_some()))
	}

	/// The platform re-enables the next button once it has persisted progress
	async fn wait_for_next_btn(&self) {
		tokio::time::sleep(Duration::from_millis(500)).await;
		let mut tries = 100;
		while tries > 0 {
			tries -= 1;
			tokio::time::sleep(POLL).await;
			match self.next_btn_disabled().await {
				Ok(Some(false)) | Ok(None) => return,
				Ok(Some(true)) => {}
				Err(_) => return,
			}
		}
	}

	async fn wait_for_progress_check(&self) -> Result<()> {
		self.wait_for_next_btn().await;
		let deadline = tokio::time::Instant::now() + Duration::from_secs(30);
		loop {
			let body = self.root().text().await.unwrap_or_default();
			if !body.contains(selectors::PROGRESS_TEXT) {
				return Ok(());
			}
			if tokio::time::Instant::now() >= deadline {
				log!("Progress check still showing after 30s, continuing anyway.");
				return Ok(());
			}
			tokio::time::sleep(POLL).await;
		}
	}
}

impl CourseNavigator for CdpNavigator {
	type Elem = CdpElement;

	async fn sections(&self) -> Result<Vec<CdpElement>> {
		self.root().children(selectors::SECTION).await
	}

	async fn section_title(&self, section: &CdpElement) -> Result<Option<String>> {
		let Some(header) = first_child(section, selectors::SECTION_HEADER).await else {
			return Ok(None);
		};
		let text = header.text().await.unwrap_or_default();
		let text = text.trim();
		Ok((!text.is_empty()).then(|| text.to_string()))
	}

	async fn is_section_complete(&self, section: &CdpElement) -> Result<bool> {
		// untitled sections and ones the platform prefixed with "Complete" need no work
		match self.section_title(section).await? {
			None => Ok(true),
			Some(title) => Ok(title.to_lowercase().starts_with("complete")),
		}
	}

	async fn read_through(&self, section: &CdpElement) -> Result<()> {
		// glide the viewport across the section so scroll tracking registers it
		let mut prev_bottom = f64::MIN;
		for _ in 0..300 {
			let bottom = section
				.eval_on("if (!el || !el.getBoundingClientRect) return null; return el.getBoundingClientRect().bottom;")
				.await?
				.as_f64();
			let Some(bottom) = bottom else { break };
			if bottom <= 0.0 || bottom == prev_bottom {
				break;
			}
			prev_bottom = bottom;
			self.page
				.evaluate("window.scrollBy(0, 200)")
				.await
				.map_err(|e| eyre!("Failed to scroll: {}", e))?;
			tokio::time::sleep(Duration::from_millis(100)).await;
		}
		Ok(())
	}

	async fn advance(&mut self) -> Result<bool> {
		self.wait_for_progress_check().await?;
		match self.next_btn_disabled().await? {
			None | Some(true) => Ok(false),
			Some(false) => {
				if let Some(next) = first_child(&self.root(), selectors::NEXT_BTN).await {
					soft_click(&next).await;
				}
				self.wait_for_next_btn().await;
				tokio::time::sleep(Duration::from_millis(500)).await;
				Ok(true)
			}
		}
	}
}
