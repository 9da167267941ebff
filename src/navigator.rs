//! The page-level collaborator that hands course sections to the core. The
//! core only consumes this interface and never controls its retry policy; the
//! CDP-backed implementation lives in [`crate::browser`].

use color_eyre::Result;

use crate::element::Element;

#[allow(async_fn_in_trait)]
pub trait CourseNavigator {
	type Elem: Element;

	/// Ordered section containers of the currently loaded module page
	async fn sections(&self) -> Result<Vec<Self::Elem>>;

	/// Section heading, when the section has one
	async fn section_title(&self, section: &Self::Elem) -> Result<Option<String>>;

	/// Whether the platform already marks this section complete
	async fn is_section_complete(&self, section: &Self::Elem) -> Result<bool>;

	/// Scroll the section through the viewport so the platform's progress
	/// tracking registers it as viewed
	async fn read_through(&self, section: &Self::Elem) -> Result<()>;

	/// Advance to the next module page, waiting out the platform's own settle
	/// and progress checks. False once the course has no further pages.
	async fn advance(&mut self) -> Result<bool>;
}
