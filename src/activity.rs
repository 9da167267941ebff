//! Non-assessment widgets. Each section is matched against a fixed, ordered
//! list of activity kinds; every matching kind gets one handler run. Handlers
//! are deterministic interaction sequences and a failing one never blocks the
//! rest of the section.

use std::time::Duration;

use color_eyre::Result;
use v_utils::{elog, log};

use crate::{
	Answer, AnswerCache,
	classify::question_identity,
	config::AppConfig,
	element::{Element, attr_contains, first_child, has_child, soft_click, soft_force_click, wait_for_child},
	selectors,
	solver::Solver,
};

const SETTLE: Duration = Duration::from_millis(100);
const VIDEO_TIMEOUT: Duration = Duration::from_secs(60);

/// The interactive widgets a section can carry, in handling priority order
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActivityKind {
	AssessmentSubmit,
	VideoPlayer,
	ContentLinks,
	Accordion,
	ContentTabs,
	CheckYourAnswer,
}

impl ActivityKind {
	/// Assessment widgets run first; the rest follow in document-flavored order
	pub const IN_ORDER: [Self; 6] = [
		Self::AssessmentSubmit,
		Self::VideoPlayer,
		Self::ContentLinks,
		Self::Accordion,
		Self::ContentTabs,
		Self::CheckYourAnswer,
	];

	/// Static applicability predicate; read-only
	pub async fn detect<E: Element>(self, section: &E) -> bool {
		match self {
			Self::AssessmentSubmit => attr_contains(section, "class", selectors::SINGLE_SUBMIT_MARKER).await,
			Self::VideoPlayer => has_child(section, selectors::VIDEO_IFRAME).await,
			Self::ContentLinks => has_child(section, selectors::CONTENT_LINKS_WIDGET).await,
			Self::Accordion => has_child(section, selectors::ACCORDION_ITEM_BTN).await,
			Self::ContentTabs => has_child(section, selectors::TAB_WIDGET).await,
			Self::CheckYourAnswer => {
				for container in section.children(selectors::BUTTON_CONTAINER).await.unwrap_or_default() {
					if button_with_text(&container, selectors::CHECK_BTN_TEXT).await.is_some() {
						return true;
					}
				}
				false
			}
		}
	}
}

/// Run every applicable activity handler over `section`, isolating failures
pub async fn run_all<E: Element>(section: &E, config: &AppConfig) {
	for kind in ActivityKind::IN_ORDER {
		if !kind.detect(section).await {
			continue;
		}
		log!("Running {kind:?} activity...");
		match run_one(kind, section, config).await {
			Ok(()) => log!("{kind:?} activity complete."),
			Err(e) => elog!("{kind:?} activity failed: {e}"),
		}
	}
}

async fn run_one<E: Element>(kind: ActivityKind, section: &E, config: &AppConfig) -> Result<()> {
	match kind {
		ActivityKind::AssessmentSubmit => assessment_submit(section, config).await,
		ActivityKind::VideoPlayer => video_player(section).await,
		ActivityKind::ContentLinks => content_links(section).await,
		ActivityKind::Accordion => accordion(section).await,
		ActivityKind::ContentTabs => content_tabs(section).await,
		ActivityKind::CheckYourAnswer => check_your_answer(section).await,
	}
}

/// First button inside `container` whose text contains `needle`
async fn button_with_text<E: Element>(container: &E, needle: &str) -> Option<E> {
	for button in container.children(selectors::ANY_BUTTON).await.ok()? {
		if button.text().await.unwrap_or_default().contains(needle) {
			return Some(button);
		}
	}
	None
}

async fn close_notify_popup<E: Element>(section: &E) {
	if let Some(close) = first_child(section, selectors::NOTIFY_POPUP_CLOSE).await {
		soft_force_click(&close).await;
	}
}

/// Submit the widget, confirming the partial-submission nag when it appears,
/// then dismiss the notify popup. A visible reset button means the widget is
/// already submitted and there is nothing to do.
async fn submit_widget<E: Element>(section: &E) {
	if has_child(section, selectors::ACTIVITY_RESET_BTN).await {
		return;
	}
	if let Some(submit) = first_child(section, selectors::ACTIVITY_SUBMIT_BTN).await {
		soft_click(&submit).await;
	}
	tokio::time::sleep(SETTLE).await;
	// still on the form: the platform wants the partial-submission confirmation
	if let Some(submit) = first_child(section, selectors::ACTIVITY_SUBMIT_BTN).await {
		if let Some(confirm) = first_child(section, selectors::ACTIVITY_CONFIRM_CHECKBOX).await {
			soft_click(&confirm).await;
		}
		soft_click(&submit).await;
	}
	tokio::time::sleep(SETTLE).await;
	close_notify_popup(section).await;
}

async fn reset_widget<E: Element>(section: &E) {
	if let Some(reset) = first_child(section, selectors::ACTIVITY_RESET_BTN).await {
		soft_click(&reset).await;
	}
}

/// Whether the platform marks this question as complete/correct
async fn is_marked_correct<E: Element>(question: &E) -> bool {
	if has_child(question, selectors::CORRECT_MARKER).await {
		return true;
	}
	attr_contains(question, "class", "is-correct").await
}

/// Inline assessments expose per-widget submit and reset controls, which makes
/// them the one surface where answers can be discovered by trial: submit
/// blind, read the feedback, reset, and brute-force whatever the feedback did
/// not cover before replaying everything.
async fn assessment_submit<E: Element>(section: &E, _config: &AppConfig) -> Result<()> {
	// a leftover submitted state is cleared first
	reset_widget(section).await;

	// the answer key discovered here is scoped to this widget alone
	let mut answers = AnswerCache::new();

	submit_widget(section).await;
	for question in section.children(selectors::QUESTION).await? {
		let Some(id) = question_identity(&question).await else { continue };
		let Some(solver) = Solver::build(&question).await else { continue };
		match solver.extract_correct_answer().await {
			Ok(Some(answer)) => {
				answers.insert(id, answer);
			}
			Ok(None) => {}
			Err(e) => elog!("Feedback extraction failed: {e}"),
		}
	}
	tokio::time::sleep(SETTLE).await;
	reset_widget(section).await;

	// discovery pass for choice questions the feedback skipped
	for question in section.children(selectors::QUESTION).await? {
		if let Err(e) = discover_by_trial(section, &question, &mut answers).await {
			elog!("Answer discovery failed: {e}");
		}
	}

	// replay pass
	for question in section.children(selectors::QUESTION).await? {
		if let Err(e) = replay_question(&question, &answers).await {
			elog!("Assessment question failed: {e}");
		}
	}

	submit_widget(section).await;
	Ok(())
}

async fn discover_by_trial<E: Element>(section: &E, question: &E, answers: &mut AnswerCache) -> Result<()> {
	let Some(id) = question_identity(question).await else {
		return Ok(());
	};
	if answers.get(&id).is_some() {
		return Ok(());
	}
	let Some(Solver::Choice(choice)) = Solver::build(question).await else {
		return Ok(());
	};

	let retriable =
		first_child(section, selectors::ACTIVITY_RESET_BTN).await.is_some() || has_child(section, selectors::ACTIVITY_SUBMIT_BTN).await;
	if !retriable {
		// nothing to submit-and-reset against: one best-effort fill is all that is safe
		choice.pseudo_answer().await?;
		return Ok(());
	}

	let oracle = async || {
		submit_widget(section).await;
		tokio::time::sleep(SETTLE).await;
		Ok(is_marked_correct(question).await)
	};
	let reset = async || {
		reset_widget(section).await;
		Ok(())
	};
	let found = choice.brute_force_solve(oracle, reset).await?;
	if found.is_empty() {
		// leave nothing half-answered: clear the widget and move on
		reset_widget(section).await;
		log!("No accepted combination found for question {id}, leaving it blank.");
		return Ok(());
	}
	answers.insert(id, Answer::Choice(found));
	// the successful trial left the widget submitted; clean up for the replay pass
	reset_widget(section).await;
	Ok(())
}

async fn replay_question<E: Element>(question: &E, answers: &AnswerCache) -> Result<()> {
	let Some(id) = question_identity(question).await else {
		return Ok(());
	};
	let Some(answer) = answers.get(&id) else {
		return Ok(());
	};
	let Some(solver) = Solver::build(question).await else {
		return Ok(());
	};
	solver.apply(answer).await?;
	tokio::time::sleep(SETTLE).await;
	Ok(())
}

/// Plays each visible embedded player through to its ended marker
async fn video_player<E: Element>(section: &E) -> Result<()> {
	for frame in section.children(selectors::VIDEO_IFRAME).await? {
		if !frame.is_visible().await {
			continue;
		}
		let Some(play) = first_child(&frame, selectors::VIDEO_PLAY_BTN).await else {
			log!("Player controls are out of reach, skipping a video.");
			continue;
		};
		soft_click(&play).await;
		tokio::time::sleep(Duration::from_secs(1)).await;

		// jump the playhead forward, then make sure playback resumed
		if let Some(bar) = first_child(&frame, selectors::VIDEO_PROGRESS_BAR).await {
			soft_force_click(&bar).await;
		}
		tokio::time::sleep(Duration::from_secs(1)).await;
		if has_child(&frame, selectors::VIDEO_PAUSED).await {
			soft_click(&play).await;
		}

		let _ = wait_for_child(&frame, selectors::VIDEO_ENDED, VIDEO_TIMEOUT).await;
	}
	Ok(())
}

async fn content_links<E: Element>(section: &E) -> Result<()> {
	for widget in section.children(selectors::CONTENT_LINKS_WIDGET).await? {
		if !widget.is_visible().await {
			continue;
		}
		match first_child(&widget, selectors::CONTENT_LINK_DIALOG_BTN).await {
			Some(button) => {
				soft_click(&button).await;
			}
			// a bare anchor would navigate away from the course
			None => log!("Content link has no dialog form, leaving it alone."),
		}
		tokio::time::sleep(Duration::from_millis(200)).await;
	}
	Ok(())
}

async fn accordion<E: Element>(section: &E) -> Result<()> {
	for item in section.children(selectors::ACCORDION_ITEM_BTN).await? {
		soft_click(&item).await;
		tokio::time::sleep(SETTLE).await;
	}
	Ok(())
}

async fn content_tabs<E: Element>(section: &E) -> Result<()> {
	for widget in section.children(selectors::TAB_WIDGET).await? {
		for tab in widget.children(selectors::TAB_NAV_BTN).await? {
			soft_click(&tab).await;
			tokio::time::sleep(Duration::from_millis(40)).await;
		}
	}
	Ok(())
}

async fn check_your_answer<E: Element>(section: &E) -> Result<()> {
	for container in section.children(selectors::BUTTON_CONTAINER).await? {
		let Some(check) = button_with_text(&container, selectors::CHECK_BTN_TEXT).await else {
			continue;
		};
		if let Some(show) = button_with_text(&container, selectors::SHOW_ME_BTN_TEXT).await {
			soft_click(&show).await;
		}
		soft_click(&check).await;
		close_notify_popup(section).await;
		tokio::time::sleep(Duration::from_millis(50)).await;
	}
	Ok(())
}
