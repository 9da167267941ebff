//! Read-only question classification. Nothing here clicks or mutates, so both
//! functions are safe to call on a question in any state, any number of times.

use crate::{
	QuestionId, QuestionKind,
	element::{Element, has_child},
	selectors,
};

/// Reads the stable identity the platform stamps on each question
pub async fn question_identity<E: Element>(question: &E) -> Option<QuestionId> {
	question.attribute(selectors::QUESTION_ID_ATTR).await.ok().flatten().filter(|id| !id.is_empty())
}

/// Classify a question widget by its class markers, falling back to the child
/// widgets it contains. Anything matching no marker, or more than one, gets no
/// kind and is skipped by callers rather than guessed at.
pub async fn classify<E: Element>(question: &E) -> Option<QuestionKind> {
	let class = question.attribute("class").await.ok().flatten().unwrap_or_default();

	let mut choice = class.contains("mcq");
	let mut category = class.contains("objectmatching");
	// "objectmatching" and "matchinggraphic" both contain the plain marker
	let mut dropdown = class.contains("matching") && !category;

	if !(choice || category || dropdown) {
		choice = has_child(question, selectors::CHOICE_WIDGET).await;
		category = has_child(question, selectors::CATEGORY_LHS).await;
		dropdown = has_child(question, selectors::DROPDOWN_ITEM).await;
	}

	match (choice, category, dropdown) {
		(true, false, false) => Some(QuestionKind::SingleOrMultiChoice),
		(false, true, false) => Some(QuestionKind::CategoryMatch),
		(false, false, true) => Some(QuestionKind::DropdownMatch),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::element::mock::MockElement;

	#[tokio::test]
	async fn classifies_by_class_marker() {
		let mcq = MockElement::new().with_attr("class", "component is-question mcq");
		assert_eq!(classify(&mcq).await, Some(QuestionKind::SingleOrMultiChoice));

		let category = MockElement::new().with_attr("class", "component is-question objectmatching");
		assert_eq!(classify(&category).await, Some(QuestionKind::CategoryMatch));

		let dropdown = MockElement::new().with_attr("class", "component is-question matching");
		assert_eq!(classify(&dropdown).await, Some(QuestionKind::DropdownMatch));

		let graphic = MockElement::new().with_attr("class", "component is-question matchinggraphic");
		assert_eq!(classify(&graphic).await, Some(QuestionKind::DropdownMatch));
	}

	#[tokio::test]
	async fn ambiguous_markup_gets_no_kind() {
		let both = MockElement::new().with_attr("class", "mcq matching");
		assert_eq!(classify(&both).await, None);

		let neither = MockElement::new().with_attr("class", "component is-question");
		assert_eq!(classify(&neither).await, None);

		let no_class = MockElement::new();
		assert_eq!(classify(&no_class).await, None);
	}

	#[tokio::test]
	async fn falls_back_to_child_widget_markers() {
		let question = MockElement::new()
			.with_attr("class", "component is-question")
			.with_child(selectors::CHOICE_WIDGET, MockElement::new());
		assert_eq!(classify(&question).await, Some(QuestionKind::SingleOrMultiChoice));
	}

	#[tokio::test]
	async fn classification_never_interacts() {
		let widget = MockElement::new();
		let question = MockElement::new().with_attr("class", "mcq").with_child(selectors::CHOICE_WIDGET, widget);
		classify(&question).await;
		question_identity(&question).await;
		assert_eq!(question.deep_clicks(), 0);
	}

	#[tokio::test]
	async fn identity_requires_a_nonempty_value() {
		let with_id = MockElement::new().with_attr(selectors::QUESTION_ID_ATTR, "q-42");
		assert_eq!(question_identity(&with_id).await.as_deref(), Some("q-42"));

		let blank = MockElement::new().with_attr(selectors::QUESTION_ID_ATTR, "");
		assert_eq!(question_identity(&blank).await, None);

		let missing = MockElement::new();
		assert_eq!(question_identity(&missing).await, None);
	}
}
