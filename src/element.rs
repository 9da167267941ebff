//! The capability set every interactive widget is driven through. The solvers
//! and the session logic only ever see this trait; concrete backends (the CDP
//! adapter, the test mock) live below it.

use std::time::Duration;

use color_eyre::Result;
use v_utils::elog;

/// Lifecycle states an element can be awaited on
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElemState {
	Attached,
	Visible,
	Hidden,
}

#[allow(async_fn_in_trait)]
pub trait Element: Clone {
	async fn exists(&self) -> bool;
	async fn is_visible(&self) -> bool;
	/// Gentle attempt: requires the element to be actionable
	async fn click(&self) -> Result<()>;
	/// Forced attempt: dispatches the click straight on the node, skipping actionability checks
	async fn force_click(&self) -> Result<()>;
	async fn attribute(&self, name: &str) -> Result<Option<String>>;
	async fn text(&self) -> Result<String>;
	async fn wait_for(&self, state: ElemState, timeout: Duration) -> Result<()>;
	/// Ordered sequence of descendants matching `selector`
	async fn children(&self, selector: &str) -> Result<Vec<Self>>;
}

/// Click with the gentle -> forced fallback. Failures are logged and swallowed;
/// callers proceed as if the action did not happen.
pub async fn soft_click<E: Element>(elem: &E) -> bool {
	match elem.click().await {
		Ok(()) => return true,
		Err(e) => elog!("Click failed, retrying forced: {e}"),
	}
	match elem.force_click().await {
		Ok(()) => true,
		Err(e) => {
			elog!("Forced click failed: {e}");
			false
		}
	}
}

/// Forced click only, same swallow-and-log policy as [`soft_click`].
pub async fn soft_force_click<E: Element>(elem: &E) -> bool {
	match elem.force_click().await {
		Ok(()) => true,
		Err(e) => {
			elog!("Forced click failed: {e}");
			false
		}
	}
}

/// First descendant matching `selector`, if any
pub async fn first_child<E: Element>(parent: &E, selector: &str) -> Option<E> {
	parent.children(selector).await.ok().and_then(|found| found.into_iter().next())
}

/// Whether any descendant matches `selector`
pub async fn has_child<E: Element>(parent: &E, selector: &str) -> bool {
	parent.children(selector).await.map(|found| !found.is_empty()).unwrap_or(false)
}

/// Whether `elem`'s attribute `name` contains `needle`
pub async fn attr_contains<E: Element>(elem: &E, name: &str, needle: &str) -> bool {
	elem.attribute(name).await.ok().flatten().map(|value| value.contains(needle)).unwrap_or(false)
}

/// Polls for a descendant matching `selector` until one appears or `timeout` lapses
pub async fn wait_for_child<E: Element>(parent: &E, selector: &str, timeout: Duration) -> Option<E> {
	let deadline = tokio::time::Instant::now() + timeout;
	loop {
		if let Some(found) = first_child(parent, selector).await {
			return Some(found);
		}
		if tokio::time::Instant::now() >= deadline {
			return None;
		}
		tokio::time::sleep(Duration::from_millis(300)).await;
	}
}

#[cfg(test)]
pub(crate) mod mock {
	//! A scriptable element tree: attributes, text, visibility, and children
	//! keyed by the selector they would be queried with. Clicks are counted so
	//! tests can assert on interactions (or their absence).

	use std::{
		collections::HashMap,
		sync::{Arc, Mutex},
	};

	use color_eyre::eyre::eyre;

	use super::*;

	#[derive(Default)]
	struct Node {
		attrs: HashMap<String, String>,
		text: String,
		visible: bool,
		present: bool,
		clicks: u32,
		children: HashMap<String, Vec<MockElement>>,
	}

	#[derive(Clone, Default)]
	pub struct MockElement(Arc<Mutex<Node>>);

	impl MockElement {
		pub fn new() -> Self {
			let elem = Self::default();
			{
				let mut node = elem.0.lock().unwrap();
				node.visible = true;
				node.present = true;
			}
			elem
		}

		pub fn with_attr(self, name: &str, value: &str) -> Self {
			self.0.lock().unwrap().attrs.insert(name.into(), value.into());
			self
		}

		pub fn with_text(self, text: &str) -> Self {
			self.0.lock().unwrap().text = text.into();
			self
		}

		pub fn hidden(self) -> Self {
			self.0.lock().unwrap().visible = false;
			self
		}

		pub fn with_children(self, selector: &str, kids: Vec<MockElement>) -> Self {
			self.0.lock().unwrap().children.insert(selector.into(), kids);
			self
		}

		pub fn with_child(self, selector: &str, kid: MockElement) -> Self {
			self.with_children(selector, vec![kid])
		}

		pub fn clicks(&self) -> u32 {
			self.0.lock().unwrap().clicks
		}

		/// Clicks on this node and every node reachable below it
		pub fn deep_clicks(&self) -> u32 {
			let node = self.0.lock().unwrap();
			let below: u32 = node.children.values().flatten().map(|kid| kid.deep_clicks()).sum();
			node.clicks + below
		}

		fn lookup(&self, selector: &str) -> Vec<MockElement> {
			let node = self.0.lock().unwrap();
			if let Some(kids) = node.children.get(selector) {
				return kids.clone();
			}
			// comma lists resolve to the concatenation of their parts
			let mut found = Vec::new();
			for part in selector.split(',') {
				if let Some(kids) = node.children.get(part.trim()) {
					found.extend(kids.iter().cloned());
				}
			}
			found
		}
	}

	impl Element for MockElement {
		async fn exists(&self) -> bool {
			self.0.lock().unwrap().present
		}

		async fn is_visible(&self) -> bool {
			let node = self.0.lock().unwrap();
			node.present && node.visible
		}

		async fn click(&self) -> Result<()> {
			let mut node = self.0.lock().unwrap();
			if !node.present || !node.visible {
				return Err(eyre!("element is not actionable"));
			}
			node.clicks += 1;
			Ok(())
		}

		async fn force_click(&self) -> Result<()> {
			let mut node = self.0.lock().unwrap();
			if !node.present {
				return Err(eyre!("element is gone"));
			}
			node.clicks += 1;
			Ok(())
		}

		async fn attribute(&self, name: &str) -> Result<Option<String>> {
			Ok(self.0.lock().unwrap().attrs.get(name).cloned())
		}

		async fn text(&self) -> Result<String> {
			Ok(self.0.lock().unwrap().text.clone())
		}

		async fn wait_for(&self, state: ElemState, _timeout: Duration) -> Result<()> {
			let satisfied = match state {
				ElemState::Attached => self.exists().await,
				ElemState::Visible => self.is_visible().await,
				ElemState::Hidden => !self.is_visible().await,
			};
			if satisfied { Ok(()) } else { Err(eyre!("timed out waiting for {state:?}")) }
		}

		async fn children(&self, selector: &str) -> Result<Vec<Self>> {
			Ok(self.lookup(selector))
		}
	}
}
