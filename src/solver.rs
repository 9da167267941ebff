//! One solver per question kind. Each knows how to read the platform's
//! post-submission feedback, replay a known answer onto a fresh widget, and
//! fill in *something* when probing is all that is possible. Choice widgets
//! additionally support discovery by trial submission.

use std::{collections::BTreeMap, time::Duration};

use color_eyre::{Result, eyre::bail};
use v_utils::log;

use crate::{
	Answer, QuestionKind,
	classify::classify,
	combinations::combinations,
	element::{Element, first_child, has_child, soft_click, soft_force_click},
	selectors,
};

/// Delay between the two clicks of a pairing interaction
const PAIR_SETTLE: Duration = Duration::from_millis(10);
/// Delay for the widget to reflect a bulk selection
const PROBE_SETTLE: Duration = Duration::from_millis(100);

/// Closed dispatch over the supported question kinds. Adding a kind means
/// adding a variant here and a constructor arm in [`Solver::build`].
pub enum Solver<E: Element> {
	Choice(ChoiceSolver<E>),
	Category(CategoryMatchSolver<E>),
	Dropdown(DropdownMatchSolver<E>),
}

impl<E: Element> Solver<E> {
	/// Classifier tag -> solver constructor. Unknown widgets get no solver.
	pub async fn build(question: &E) -> Option<Self> {
		match classify(question).await? {
			QuestionKind::SingleOrMultiChoice => Some(Self::Choice(ChoiceSolver::new(question.clone()))),
			QuestionKind::CategoryMatch => Some(Self::Category(CategoryMatchSolver::new(question.clone()))),
			QuestionKind::DropdownMatch => Some(Self::Dropdown(DropdownMatchSolver::new(question.clone()))),
		}
	}

	/// Reads the review-mode feedback the platform reveals after submission.
	/// `None` when no feedback is present; callers must not cache that.
	pub async fn extract_correct_answer(&self) -> Result<Option<Answer>> {
		match self {
			Self::Choice(solver) => solver.extract_correct_answer().await,
			Self::Category(solver) => solver.extract_correct_answer().await,
			Self::Dropdown(solver) => solver.extract_correct_answer().await,
		}
	}

	/// Drives the UI to reproduce `answer` on a fresh, unanswered widget
	pub async fn apply(&self, answer: &Answer) -> Result<()> {
		match self {
			Self::Choice(solver) => solver.apply(answer).await,
			Self::Category(solver) => solver.apply(answer).await,
			Self::Dropdown(solver) => solver.apply(answer).await,
		}
	}

	/// Best-effort fill, not necessarily correct; probes widget behavior or
	/// stands in when nothing better is known
	pub async fn pseudo_answer(&self) -> Result<()> {
		match self {
			Self::Choice(solver) => solver.pseudo_answer().await,
			Self::Category(solver) => solver.pseudo_answer().await,
			Self::Dropdown(solver) => solver.pseudo_answer().await,
		}
	}
}

pub struct ChoiceSolver<E: Element> {
	question: E,
}

impl<E: Element> ChoiceSolver<E> {
	pub fn new(question: E) -> Self {
		Self { question }
	}

	async fn options(&self) -> Result<Vec<E>> {
		self.question.children(selectors::CHOICE_OPTION).await
	}

	async fn option_id(option: &E) -> Option<String> {
		let input = first_child(option, selectors::CHOICE_OPTION_INPUT).await?;
		input.attribute(selectors::OPTION_ID_ATTR).await.ok().flatten()
	}

	async fn select(option: &E) -> bool {
		match first_child(option, selectors::CHOICE_OPTION_LABEL).await {
			Some(label) => soft_click(&label).await,
			None => soft_click(option).await,
		}
	}

	pub async fn extract_correct_answer(&self) -> Result<Option<Answer>> {
		let mut ids = Vec::new();
		for option in self.question.children(selectors::CHOICE_CORRECT_OPTION).await? {
			if let Some(id) = Self::option_id(&option).await {
				ids.push(id);
			}
		}
		if ids.is_empty() {
			return Ok(None);
		}
		Ok(Some(Answer::Choice(ids)))
	}

	pub async fn apply(&self, answer: &Answer) -> Result<()> {
		let Answer::Choice(ids) = answer else {
			bail!("{:?} answer cannot be applied to a choice widget", answer.kind())
		};
		for option in self.options().await? {
			let Some(id) = Self::option_id(&option).await else { continue };
			if ids.contains(&id) {
				Self::select(&option).await;
			}
		}
		Ok(())
	}

	/// Selects every option. Also how the probe measures what the widget allows.
	pub async fn pseudo_answer(&self) -> Result<()> {
		for option in self.options().await? {
			Self::select(&option).await;
		}
		Ok(())
	}

	/// Discovers the correct selection by trial: `oracle` submits the current
	/// guess and reports whether the platform accepted it, `reset` returns the
	/// widget to a clean, re-triable state. Returns the accepted option ids,
	/// empty when every combination failed (callers must not cache that).
	pub async fn brute_force_solve(&self, mut oracle: impl AsyncFnMut() -> Result<bool>, mut reset: impl AsyncFnMut() -> Result<()>) -> Result<Vec<String>> {
		let options = self.options().await?;
		if options.is_empty() {
			return Ok(Vec::new());
		}

		// an exclusive input group allows one selection; otherwise select
		// everything and count what sticks
		let k = if has_child(&self.question, selectors::CHOICE_RADIO_INPUT).await {
			1
		} else {
			self.pseudo_answer().await?;
			tokio::time::sleep(PROBE_SETTLE).await;
			let selected = self.question.children(selectors::CHOICE_SELECTED_LABEL).await?.len();
			// the probe leaves the widget dirty, possibly submitted
			reset().await?;
			selected
		};
		if k == 0 {
			return Ok(Vec::new());
		}

		if k == 1 {
			for option in &options {
				Self::select(option).await;
				if oracle().await? {
					return Ok(Self::option_id(option).await.into_iter().collect());
				}
				reset().await?;
			}
			return Ok(Vec::new());
		}

		log!("Searching {k}-option combinations over {} options...", options.len());
		for combo in combinations(k, options.len()) {
			for &i in &combo {
				Self::select(&options[i]).await;
			}
			if oracle().await? {
				let mut ids = Vec::new();
				for &i in &combo {
					if let Some(id) = Self::option_id(&options[i]).await {
						ids.push(id);
					}
				}
				return Ok(ids);
			}
			reset().await?;
		}
		Ok(Vec::new())
	}
}

pub struct CategoryMatchSolver<E: Element> {
	question: E,
}

impl<E: Element> CategoryMatchSolver<E> {
	pub fn new(question: E) -> Self {
		Self { question }
	}

	async fn lhs_items(&self) -> Result<Vec<E>> {
		self.question.children(selectors::CATEGORY_LHS).await
	}

	async fn rhs_items(&self) -> Result<Vec<E>> {
		self.question.children(selectors::CATEGORY_RHS).await
	}

	async fn item_id(item: &E) -> Option<String> {
		let label = first_child(item, selectors::CATEGORY_ITEM_TEXT).await?;
		let text = label.text().await.ok()?;
		let text = text.trim();
		(!text.is_empty()).then(|| text.to_string())
	}

	async fn pair(lhs: &E, rhs: &E) {
		soft_click(lhs).await;
		tokio::time::sleep(PAIR_SETTLE).await;
		soft_click(rhs).await;
		tokio::time::sleep(PAIR_SETTLE).await;
	}

	/// Reads the feedback table the review mode renders under the question
	pub async fn extract_correct_answer(&self) -> Result<Option<Answer>> {
		let mut pairs = BTreeMap::new();
		for row in self.question.children(selectors::FEEDBACK_ROW).await? {
			let cells = row.children(selectors::FEEDBACK_CELL).await?;
			let [lhs, rhs, ..] = cells.as_slice() else { continue };
			let lhs_text = lhs.text().await.unwrap_or_default().trim().to_string();
			let rhs_text = rhs.text().await.unwrap_or_default().trim().to_string();
			if lhs_text.is_empty() || rhs_text.is_empty() {
				continue;
			}
			pairs.insert(lhs_text, rhs_text);
		}
		if pairs.is_empty() {
			return Ok(None);
		}
		Ok(Some(Answer::CategoryMatch(pairs)))
	}

	pub async fn apply(&self, answer: &Answer) -> Result<()> {
		let Answer::CategoryMatch(pairs) = answer else {
			bail!("{:?} answer cannot be applied to a category-match widget", answer.kind())
		};
		let rhs_items = self.rhs_items().await?;
		for lhs in self.lhs_items().await? {
			let Some(lhs_id) = Self::item_id(&lhs).await else { continue };
			let Some(wanted) = pairs.get(&lhs_id) else { continue };
			for rhs in &rhs_items {
				if Self::item_id(rhs).await.as_deref() == Some(wanted.as_str()) {
					Self::pair(&lhs, rhs).await;
					break;
				}
			}
		}
		Ok(())
	}

	/// Pairs items by a shared identity attribute when the platform leaks one,
	/// else positionally. Not improved upon when it turns out wrong.
	pub async fn pseudo_answer(&self) -> Result<()> {
		let lhs_items = self.lhs_items().await?;
		let rhs_items = self.rhs_items().await?;

		let mut pair_attr = None;
		if let Some(first) = lhs_items.first() {
			for attr in selectors::PAIR_ID_ATTRS {
				if first.attribute(attr).await.ok().flatten().is_some() {
					pair_attr = Some(attr);
					break;
				}
			}
		}

		match pair_attr {
			Some(attr) => {
				let mut rhs_by_id: BTreeMap<String, &E> = BTreeMap::new();
				for rhs in &rhs_items {
					if let Some(id) = rhs.attribute(attr).await.ok().flatten() {
						rhs_by_id.insert(id, rhs);
					}
				}
				for lhs in &lhs_items {
					let Some(id) = lhs.attribute(attr).await.ok().flatten() else { continue };
					let Some(&rhs) = rhs_by_id.get(&id) else { continue };
					Self::pair(lhs, rhs).await;
				}
			}
			None =>
				for (lhs, rhs) in lhs_items.iter().zip(rhs_items.iter()) {
					Self::pair(lhs, rhs).await;
				},
		}
		Ok(())
	}
}

pub struct DropdownMatchSolver<E: Element> {
	question: E,
}

impl<E: Element> DropdownMatchSolver<E> {
	pub fn new(question: E) -> Self {
		Self { question }
	}

	async fn items(&self) -> Result<Vec<E>> {
		self.question.children(selectors::DROPDOWN_ITEM).await
	}

	/// In review mode each dropdown renders the correct option as its value
	pub async fn extract_correct_answer(&self) -> Result<Option<Answer>> {
		let mut choices = BTreeMap::new();
		for (index, item) in self.items().await?.iter().enumerate() {
			let Some(button) = first_child(item, selectors::DROPDOWN_BTN).await else { continue };
			let Some(value) = first_child(&button, selectors::DROPDOWN_VALUE).await else { continue };
			let text = value.text().await.unwrap_or_default().trim().to_string();
			if text.is_empty() {
				continue;
			}
			choices.insert(index, text);
		}
		if choices.is_empty() {
			return Ok(None);
		}
		Ok(Some(Answer::DropdownMatch(choices)))
	}

	pub async fn apply(&self, answer: &Answer) -> Result<()> {
		let Answer::DropdownMatch(choices) = answer else {
			bail!("{:?} answer cannot be applied to a dropdown-match widget", answer.kind())
		};
		for (index, item) in self.items().await?.iter().enumerate() {
			let Some(wanted) = choices.get(&index) else { continue };
			// list entries accept forced clicks whether or not the dropdown is open
			for option in item.children(selectors::DROPDOWN_OPTION).await? {
				if option.text().await.unwrap_or_default().trim() == wanted {
					soft_force_click(&option).await;
					break;
				}
			}
		}
		Ok(())
	}

	/// Opens each dropdown and takes its first option
	pub async fn pseudo_answer(&self) -> Result<()> {
		for item in self.items().await? {
			if let Some(button) = first_child(&item, selectors::DROPDOWN_BTN).await {
				soft_force_click(&button).await;
			}
			if let Some(option) = first_child(&item, selectors::DROPDOWN_OPTION).await {
				soft_force_click(&option).await;
			}
		}
		Ok(())
	}

	/// Last resort when review extraction produced nothing: probe with a
	/// pseudo answer, and if the platform offers a reveal button, read the
	/// revealed key, reset, and replay it. Never searches combinatorially.
	pub async fn solve_by_reveal(&self, mut oracle: impl AsyncFnMut() -> Result<bool>, mut reset: impl AsyncFnMut() -> Result<()>) -> Result<Option<Answer>> {
		self.pseudo_answer().await?;
		if oracle().await? {
			// the guess stuck; the current values are the answer
			return self.extract_correct_answer().await;
		}

		let Some(reveal) = first_child(&self.question, selectors::REVEAL_ANSWER_BTN).await else {
			return Ok(None);
		};
		soft_force_click(&reveal).await;
		tokio::time::sleep(PROBE_SETTLE).await;

		let Some(answer) = self.extract_correct_answer().await? else {
			return Ok(None);
		};
		reset().await?;
		self.apply(&answer).await?;
		oracle().await?;
		Ok(Some(answer))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::{
		Arc, Mutex,
		atomic::{AtomicU32, Ordering},
	};

	use super::*;
	use crate::element::mock::MockElement;

	fn option(id: &str) -> MockElement {
		MockElement::new()
			.with_child(selectors::CHOICE_OPTION_INPUT, MockElement::new().with_attr(selectors::OPTION_ID_ATTR, id))
			.with_child(selectors::CHOICE_OPTION_LABEL, MockElement::new())
	}

	async fn label_of(opt: &MockElement) -> MockElement {
		first_child(opt, selectors::CHOICE_OPTION_LABEL).await.unwrap()
	}

	#[tokio::test]
	async fn single_choice_search_stops_at_the_correct_option() {
		let options: Vec<MockElement> = (0..4).map(|i| option(&i.to_string())).collect();
		let target = label_of(&options[2]).await;
		let question = MockElement::new()
			.with_attr("class", "mcq")
			.with_children(selectors::CHOICE_OPTION, options.clone())
			.with_child(selectors::CHOICE_RADIO_INPUT, MockElement::new());

		let oracle_calls = Arc::new(AtomicU32::new(0));
		let reset_calls = Arc::new(AtomicU32::new(0));
		let solver = ChoiceSolver::new(question);

		let found = solver
			.brute_force_solve(
				async || {
					oracle_calls.fetch_add(1, Ordering::SeqCst);
					Ok(target.clicks() > 0)
				},
				async || {
					reset_calls.fetch_add(1, Ordering::SeqCst);
					Ok(())
				},
			)
			.await
			.unwrap();

		assert_eq!(found, vec!["2".to_string()]);
		// correct index 2 means at most 3 submissions
		assert_eq!(oracle_calls.load(Ordering::SeqCst), 3);
		// a reset between the two failed trials and the next, none after success
		assert_eq!(reset_calls.load(Ordering::SeqCst), 2);
	}

	#[tokio::test]
	async fn multi_choice_search_enumerates_inclusion_first() {
		let options: Vec<MockElement> = (0..3).map(|i| option(&i.to_string())).collect();
		let question = MockElement::new()
			.with_attr("class", "mcq")
			.with_children(selectors::CHOICE_OPTION, options)
			.with_children(selectors::CHOICE_SELECTED_LABEL, vec![MockElement::new(), MockElement::new()]);

		let events = Arc::new(Mutex::new(Vec::<&str>::new()));
		let oracle_events = events.clone();
		let reset_events = events.clone();
		let solver = ChoiceSolver::new(question);

		let found = solver
			.brute_force_solve(
				async move || {
					let mut events = oracle_events.lock().unwrap();
					events.push("oracle");
					// the second guess, {0, 2}, is the accepted one
					Ok(events.iter().filter(|&e| e == "oracle").count() == 2)
				},
				async move || {
					reset_events.lock().unwrap().push("reset");
					Ok(())
				},
			)
			.await
			.unwrap();

		// {0,1} is guessed before {0,2}; {1,2} is never reached
		assert_eq!(found, vec!["0".to_string(), "2".to_string()]);
		// the probe dirties the widget, so guessing starts with a reset
		assert_eq!(*events.lock().unwrap(), vec!["reset", "oracle", "reset", "oracle"]);
	}

	#[tokio::test]
	async fn nothing_selectable_fails_without_submitting() {
		let options: Vec<MockElement> = (0..2).map(|i| option(&i.to_string())).collect();
		// no radio inputs and nothing sticks after the probe
		let question = MockElement::new().with_attr("class", "mcq").with_children(selectors::CHOICE_OPTION, options);

		let oracle_calls = Arc::new(AtomicU32::new(0));
		let solver = ChoiceSolver::new(question);
		let found = solver
			.brute_force_solve(
				async || {
					oracle_calls.fetch_add(1, Ordering::SeqCst);
					Ok(true)
				},
				async || Ok(()),
			)
			.await
			.unwrap();

		assert!(found.is_empty());
		assert_eq!(oracle_calls.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn choice_extraction_reads_correct_markers() {
		let question = MockElement::new()
			.with_attr("class", "mcq")
			.with_children(selectors::CHOICE_CORRECT_OPTION, vec![option("1"), option("3")]);
		let solver = ChoiceSolver::new(question);
		let answer = solver.extract_correct_answer().await.unwrap();
		assert_eq!(answer, Some(Answer::Choice(vec!["1".into(), "3".into()])));

		let unrevealed = ChoiceSolver::new(MockElement::new().with_attr("class", "mcq"));
		assert_eq!(unrevealed.extract_correct_answer().await.unwrap(), None);
	}

	#[tokio::test]
	async fn choice_apply_selects_only_cached_options() {
		let options: Vec<MockElement> = (0..3).map(|i| option(&i.to_string())).collect();
		let question = MockElement::new().with_attr("class", "mcq").with_children(selectors::CHOICE_OPTION, options.clone());
		let solver = ChoiceSolver::new(question);

		solver.apply(&Answer::Choice(vec!["0".into(), "2".into()])).await.unwrap();

		assert_eq!(label_of(&options[0]).await.clicks(), 1);
		assert_eq!(label_of(&options[1]).await.clicks(), 0);
		assert_eq!(label_of(&options[2]).await.clicks(), 1);
	}

	#[tokio::test]
	async fn mismatched_answer_kind_is_an_error() {
		let solver = ChoiceSolver::new(MockElement::new().with_attr("class", "mcq"));
		assert!(solver.apply(&Answer::DropdownMatch(BTreeMap::new())).await.is_err());

		let solver = CategoryMatchSolver::new(MockElement::new());
		assert!(solver.apply(&Answer::Choice(vec!["0".into()])).await.is_err());

		let solver = DropdownMatchSolver::new(MockElement::new());
		assert!(solver.apply(&Answer::CategoryMatch(BTreeMap::new())).await.is_err());
	}

	fn category_item(text: &str) -> MockElement {
		MockElement::new().with_child(selectors::CATEGORY_ITEM_TEXT, MockElement::new().with_text(text))
	}

	#[tokio::test]
	async fn category_extraction_reads_the_feedback_table() {
		let row = |l: &str, r: &str| {
			MockElement::new().with_children(
				selectors::FEEDBACK_CELL,
				vec![MockElement::new().with_text(l), MockElement::new().with_text(r)],
			)
		};
		let question = MockElement::new().with_children(selectors::FEEDBACK_ROW, vec![row("Router", " Layer 3 "), row("Switch", "Layer 2")]);
		let solver = CategoryMatchSolver::new(question);

		let answer = solver.extract_correct_answer().await.unwrap().unwrap();
		let expected: BTreeMap<String, String> =
			[("Router".to_string(), "Layer 3".to_string()), ("Switch".to_string(), "Layer 2".to_string())].into();
		assert_eq!(answer, Answer::CategoryMatch(expected));

		let unrevealed = CategoryMatchSolver::new(MockElement::new());
		assert_eq!(unrevealed.extract_correct_answer().await.unwrap(), None);
	}

	#[tokio::test]
	async fn category_apply_clicks_both_sides_of_each_pair() {
		let lhs = category_item("Router");
		let rhs_wrong = category_item("Layer 2");
		let rhs_right = category_item("Layer 3");
		let question = MockElement::new()
			.with_children(selectors::CATEGORY_LHS, vec![lhs.clone()])
			.with_children(selectors::CATEGORY_RHS, vec![rhs_wrong.clone(), rhs_right.clone()]);
		let solver = CategoryMatchSolver::new(question);

		let answer = Answer::CategoryMatch([("Router".to_string(), "Layer 3".to_string())].into());
		solver.apply(&answer).await.unwrap();

		assert_eq!(lhs.clicks(), 1);
		assert_eq!(rhs_right.clicks(), 1);
		assert_eq!(rhs_wrong.clicks(), 0);
	}

	#[tokio::test]
	async fn category_pseudo_pairs_by_leaked_attribute() {
		let lhs = category_item("A").with_attr("data-id", "x");
		let rhs_mismatch = category_item("B").with_attr("data-id", "z");
		let question = MockElement::new()
			.with_children(selectors::CATEGORY_LHS, vec![lhs.clone()])
			.with_children(selectors::CATEGORY_RHS, vec![rhs_mismatch.clone()]);
		let solver = CategoryMatchSolver::new(question);

		solver.pseudo_answer().await.unwrap();

		// no right-hand item shares the id, so nothing gets paired
		assert_eq!(lhs.clicks(), 0);
		assert_eq!(rhs_mismatch.clicks(), 0);
	}

	#[tokio::test]
	async fn category_pseudo_falls_back_to_positional_pairing() {
		let lhs: Vec<MockElement> = vec![category_item("A"), category_item("B")];
		let rhs: Vec<MockElement> = vec![category_item("1"), category_item("2")];
		let question = MockElement::new()
			.with_children(selectors::CATEGORY_LHS, lhs.clone())
			.with_children(selectors::CATEGORY_RHS, rhs.clone());
		let solver = CategoryMatchSolver::new(question);

		solver.pseudo_answer().await.unwrap();

		for item in lhs.iter().chain(rhs.iter()) {
			assert_eq!(item.clicks(), 1);
		}
	}

	fn dropdown_item(current: &str, options: &[&str]) -> MockElement {
		MockElement::new()
			.with_child(
				selectors::DROPDOWN_BTN,
				MockElement::new().with_child(selectors::DROPDOWN_VALUE, MockElement::new().with_text(current)),
			)
			.with_children(selectors::DROPDOWN_OPTION, options.iter().map(|o| MockElement::new().with_text(o)).collect())
	}

	#[tokio::test]
	async fn dropdown_extraction_indexes_by_position() {
		let question = MockElement::new().with_children(
			selectors::DROPDOWN_ITEM,
			vec![dropdown_item("Option A", &[]), dropdown_item("Option B", &[])],
		);
		let solver = DropdownMatchSolver::new(question);

		let answer = solver.extract_correct_answer().await.unwrap().unwrap();
		let expected: BTreeMap<usize, String> = [(0, "Option A".to_string()), (1, "Option B".to_string())].into();
		assert_eq!(answer, Answer::DropdownMatch(expected));
	}

	#[tokio::test]
	async fn dropdown_apply_picks_the_option_by_text() {
		let item = dropdown_item("", &["Alpha", "Beta"]);
		let question = MockElement::new().with_children(selectors::DROPDOWN_ITEM, vec![item.clone()]);
		let solver = DropdownMatchSolver::new(question);

		solver.apply(&Answer::DropdownMatch([(0, "Beta".to_string())].into())).await.unwrap();

		let options = item.children(selectors::DROPDOWN_OPTION).await.unwrap();
		assert_eq!(options[0].clicks(), 0);
		assert_eq!(options[1].clicks(), 1);
	}

	#[tokio::test]
	async fn dropdown_reveal_path_replays_the_revealed_key() {
		let item = dropdown_item("Beta", &["Alpha", "Beta"]);
		let reveal = MockElement::new();
		let question = MockElement::new()
			.with_children(selectors::DROPDOWN_ITEM, vec![item.clone()])
			.with_child(selectors::REVEAL_ANSWER_BTN, reveal.clone());
		let solver = DropdownMatchSolver::new(question);

		let oracle_calls = Arc::new(AtomicU32::new(0));
		let answer = solver
			.solve_by_reveal(
				async || {
					// the pseudo guess fails; the replayed key is accepted
					Ok(oracle_calls.fetch_add(1, Ordering::SeqCst) > 0)
				},
				async || Ok(()),
			)
			.await
			.unwrap();

		assert_eq!(answer, Some(Answer::DropdownMatch([(0, "Beta".to_string())].into())));
		assert_eq!(reveal.clicks(), 1);
		assert_eq!(oracle_calls.load(Ordering::SeqCst), 2);
	}

	#[tokio::test]
	async fn dropdown_without_reveal_gives_up_after_the_pseudo_guess() {
		let item = dropdown_item("", &["Alpha"]);
		let question = MockElement::new().with_children(selectors::DROPDOWN_ITEM, vec![item]);
		let solver = DropdownMatchSolver::new(question);

		let answer = solver.solve_by_reveal(async || Ok(false), async || Ok(())).await.unwrap();
		assert_eq!(answer, None);
	}

	#[tokio::test]
	async fn solver_table_follows_the_classifier() {
		let question = MockElement::new().with_attr("class", "mcq");
		assert!(matches!(Solver::build(&question).await, Some(Solver::Choice(_))));

		let question = MockElement::new().with_attr("class", "objectmatching");
		assert!(matches!(Solver::build(&question).await, Some(Solver::Category(_))));

		let question = MockElement::new().with_attr("class", "matchinggraphic");
		assert!(matches!(Solver::build(&question).await, Some(Solver::Dropdown(_))));

		let question = MockElement::new().with_attr("class", "essay");
		assert!(Solver::build(&question).await.is_none());
	}
}
