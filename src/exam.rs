//! The assessment session: burn throwaway attempts to learn the answer key,
//! then replay it against a fresh attempt and submit.

use std::time::Duration;

use color_eyre::{Result, eyre::bail};
use v_utils::{elog, log};

use crate::{
	AnswerCache, pick,
	classify::question_identity,
	config::AppConfig,
	element::{Element, first_child, has_child, soft_click, soft_force_click, wait_for_child},
	prompt, selectors,
	solver::Solver,
};

/// Minimum fraction of questions that must be answered (not skipped) before
/// the final submit is trusted to automation
pub const COVERAGE_FLOOR: f64 = 0.7;

const SETTLE: Duration = Duration::from_millis(100);
const FINAL_SCREEN_TIMEOUT: Duration = Duration::from_secs(60);

const TIMED_EXAM_MESSAGES: [&str; 3] = [
	"This assessment runs on a countdown; trial attempts would burn the clock. Leaving it alone.",
	"Found a countdown timer. Answer collection needs throwaway attempts, so this one stays untouched.",
	"Timed assessment detected, skipping it rather than racing the clock.",
];

/// Lifecycle of one assessment instance
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExamPhase {
	NotStarted,
	CollectingAnswers,
	AnsweringQuestions,
	/// Terminal: the whole assessment was confirmed and submitted
	FinalSubmitted,
	/// Terminal: the assessment cannot be attempted automatically
	Skipped,
}

/// An assessment section carries the secure-question widget markers
pub async fn is_exam_section<E: Element>(section: &E) -> bool {
	has_child(section, selectors::EXAM_HINT).await
}

/// Whether the platform already shows this assessment as passed.
/// Non-assessment sections count as passed: there is nothing to do.
pub async fn is_exam_passed<E: Element>(section: &E) -> bool {
	if !is_exam_section(section).await {
		return true;
	}
	let text = section.text().await.unwrap_or_default();
	text.to_lowercase().contains(selectors::EXAM_PASSED_TEXT)
}

/// Questions that must be answered for automated submission to be trusted
pub fn required_answered(total: usize) -> usize {
	(COVERAGE_FLOOR * total as f64).ceil() as usize
}

/// How many more answers an operator owes before the final submit, when
/// coverage fell short; `None` when automation may submit on its own
pub fn operator_shortfall(total: usize, skipped: usize) -> Option<usize> {
	let answered = total.saturating_sub(skipped);
	let required = required_answered(total);
	(answered < required).then(|| required - answered)
}

/// Per-assessment-instance state. Created when an assessment section is
/// encountered, discarded once it is submitted or abandoned. The answer cache
/// outlives it and is shared across the whole run.
pub struct ExamSession<'a, E: Element> {
	section: E,
	answers: &'a mut AnswerCache,
	config: &'a AppConfig,
	phase: ExamPhase,
	/// Sample size learned from the first revealed question set, fixed afterward
	total_questions: usize,
	skipped: usize,
}

impl<'a, E: Element> ExamSession<'a, E> {
	pub fn new(section: E, answers: &'a mut AnswerCache, config: &'a AppConfig) -> Self {
		Self {
			section,
			answers,
			config,
			phase: ExamPhase::NotStarted,
			total_questions: 0,
			skipped: 0,
		}
	}

	pub fn phase(&self) -> ExamPhase {
		self.phase
	}

	pub fn total_questions(&self) -> usize {
		self.total_questions
	}

	pub fn skipped(&self) -> usize {
		self.skipped
	}

	pub async fn run(&mut self) -> Result<()> {
		if is_exam_passed(&self.section).await {
			log!("Assessment already complete, nothing to do.");
			self.phase = ExamPhase::FinalSubmitted;
			return Ok(());
		}

		// a leftover results screen means the previous attempt must be cleared first
		if let Some(retry) = first_child(&self.section, selectors::EXAM_RETRY_BTN).await {
			if retry.is_visible().await {
				soft_click(&retry).await;
			}
		}

		self.begin().await;

		if has_child(&self.section, selectors::COUNTDOWN_TIMER).await {
			log!("{}", pick(&TIMED_EXAM_MESSAGES));
			self.phase = ExamPhase::Skipped;
			return Ok(());
		}

		self.collect_answers().await?;
		self.answer_questions().await?;
		Ok(())
	}

	/// Starts the assessment, unless a previous attempt is already in progress
	async fn begin(&self) {
		if let Some(skip) = first_child(&self.section, selectors::SKIP_QUESTION_BTN).await {
			if skip.is_visible().await {
				log!("Assessment already started, resuming.");
				return;
			}
		}
		if let Some(start) = first_child(&self.section, selectors::EXAM_START_BTN).await {
			soft_force_click(&start).await;
		}
	}

	async fn questions(&self) -> Vec<E> {
		self.section.children(selectors::QUESTION).await.unwrap_or_default()
	}

	async fn submit_disabled(&self) -> bool {
		match first_child(&self.section, selectors::QUESTION_SUBMIT_BTN).await {
			Some(button) => button.attribute("class").await.ok().flatten().unwrap_or_default().contains("is-disabled"),
			None => true,
		}
	}

	async fn skip_and_count(&mut self) {
		if let Some(skip) = first_child(&self.section, selectors::SKIP_QUESTION_BTN).await {
			soft_click(&skip).await;
		}
		self.skipped += 1;
	}

	/// Skips every remaining question and lands on the final-submit screen
	async fn skip_all(&self) {
		if let Some(skip_all) = first_child(&self.section, selectors::SKIP_ALL_BTN).await {
			soft_click(&skip_all).await;
			soft_force_click(&skip_all).await;
		}
		self.wait_for_final_screen().await;
	}

	async fn wait_for_final_screen(&self) {
		let _ = wait_for_child(&self.section, selectors::FINAL_SUBMIT_SCREEN, FINAL_SCREEN_TIMEOUT).await;
	}

	/// Confirm-and-submit the whole assessment. Missing controls are
	/// tolerated: the platform may have submitted already.
	async fn final_submit(&self) {
		self.wait_for_final_screen().await;
		if let Some(confirm) = first_child(&self.section, selectors::CONFIRM_EXAM_CHECKBOX).await {
			soft_click(&confirm).await;
		}
		if let Some(submit) = first_child(&self.section, selectors::FINAL_SUBMIT_BTN).await {
			soft_click(&submit).await;
		}
	}

	/// Skip through whole attempts, submit them, and harvest whatever the
	/// review mode reveals. Stops at the pass cap or as soon as a pass adds
	/// no more than the configured floor of new identities, whichever is
	/// first; assessments that sample a different question subset each
	/// attempt get their extra passes, everything else stops after one.
	async fn collect_answers(&mut self) -> Result<()> {
		self.phase = ExamPhase::CollectingAnswers;
		let passes = self.config.collect_passes.max(1);

		for pass in 1..=passes {
			log!("Collecting answers, pass {pass}/{passes}");
			self.begin().await;
			self.skip_all().await;
			self.final_submit().await;

			tokio::time::sleep(Duration::from_millis(500)).await;
			if let Some(review) = first_child(&self.section, selectors::REVIEW_BTN).await {
				soft_click(&review).await;
			}

			let questions = self.questions().await;
			let mut new_answers = 0usize;
			for question in &questions {
				match self.harvest(question).await {
					Ok(true) => new_answers += 1,
					Ok(false) => {}
					Err(e) => elog!("Failed to harvest a reviewed question: {e}"),
				}
			}
			if self.total_questions == 0 {
				self.total_questions = questions.len();
			}

			if let Some(retry) = first_child(&self.section, selectors::EXAM_RETRY_BTN).await {
				soft_click(&retry).await;
			}
			tokio::time::sleep(Duration::from_millis(300)).await;

			log!("Pass {pass} added {new_answers} new answer(s), {} known in total.", self.answers.len());
			if new_answers <= self.config.new_answer_floor as usize {
				break;
			}
		}
		Ok(())
	}

	/// Classify and extract one reviewed question into the cache.
	/// True when a new identity was recorded.
	async fn harvest(&mut self, question: &E) -> Result<bool> {
		let Some(id) = question_identity(question).await else {
			return Ok(false);
		};
		let Some(solver) = Solver::build(question).await else {
			return Ok(false);
		};
		let Some(answer) = solver.extract_correct_answer().await? else {
			return Ok(false);
		};
		Ok(self.answers.insert(id, answer))
	}

	/// Replay cached answers against a fresh attempt. Newly presented
	/// questions render at the tail of the list, so the tail is what gets
	/// popped each round.
	async fn answer_questions(&mut self) -> Result<()> {
		self.phase = ExamPhase::AnsweringQuestions;
		if self.total_questions == 0 {
			bail!("no questions were revealed during collection");
		}
		self.begin().await;

		for index in 0..self.total_questions {
			tokio::time::sleep(Duration::from_millis(50)).await;
			let Some(question) = self.questions().await.pop() else { break };
			if let Err(e) = self.answer_one(&question, index).await {
				// fatal to this question only; the session moves on
				elog!("Question failed, skipping it: {e}");
				self.skip_and_count().await;
			}
		}

		// anything left unanswered gets skipped wholesale
		if has_child(&self.section, selectors::QUESTION_SUBMIT_BTN).await {
			tokio::time::sleep(SETTLE).await;
			self.skip_all().await;
		}

		if let Some(more) = operator_shortfall(self.total_questions, self.skipped) {
			prompt::wait_for_operator(
				self.config,
				&format!(
					"Skipped {} of {} questions; {more} more must be answered by hand before submitting.",
					self.skipped, self.total_questions
				),
			)
			.await;
		}

		self.final_submit().await;
		tokio::time::sleep(Duration::from_secs(1)).await;
		self.phase = ExamPhase::FinalSubmitted;
		Ok(())
	}

	async fn answer_one(&mut self, question: &E, index: usize) -> Result<()> {
		let Some(id) = question_identity(question).await else {
			log!("Question carries no identity, skipping.");
			self.skip_and_count().await;
			return Ok(());
		};
		let Some(answer) = self.answers.get(&id).cloned() else {
			log!("No cached answer for question {id}, skipping.");
			self.skip_and_count().await;
			return Ok(());
		};
		let Some(solver) = Solver::build(question).await else {
			log!("Question {id} is of no known kind, skipping.");
			self.skip_and_count().await;
			return Ok(());
		};

		log!("Question {id} ({}/{}), answer: {answer}", index + 1, self.total_questions);
		solver.apply(&answer).await?;
		self.submit_or_skip().await;
		Ok(())
	}

	/// Submit when the platform enables it, skip otherwise; an incomplete
	/// answer never stalls the run
	async fn submit_or_skip(&mut self) {
		if self.submit_disabled().await {
			tokio::time::sleep(SETTLE).await;
		}
		if self.submit_disabled().await {
			log!("Submit stayed disabled, skipping the question instead.");
			self.skip_and_count().await;
		} else if let Some(submit) = first_child(&self.section, selectors::QUESTION_SUBMIT_BTN).await {
			soft_force_click(&submit).await;
		}
	}
}
