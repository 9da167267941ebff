use std::{
	collections::{BTreeMap, HashMap},
	fmt,
};

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

pub mod activity;
pub mod browser;
pub mod classify;
pub mod combinations;
pub mod config;
pub mod element;
pub mod exam;
pub mod login;
pub mod navigator;
pub mod prompt;
pub mod selectors;
pub mod solver;

/// Stable key the platform stamps on every question; distinguishes questions
/// within a pool across repeated attempts of the same assessment.
pub type QuestionId = String;

/// The question widgets the solvers know how to drive
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum QuestionKind {
	/// Radio or checkbox options; one or several may be correct
	SingleOrMultiChoice,
	/// Left-hand items paired onto right-hand categories by clicking both
	CategoryMatch,
	/// One dropdown per row, the correct option identified by its display text
	DropdownMatch,
}

/// A single question's correct answer
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Answer {
	/// Identifiers of every option that must be selected
	Choice(Vec<String>),
	/// Left-hand item identifier -> right-hand item identifier
	CategoryMatch(BTreeMap<String, String>),
	/// Dropdown position -> the correct option's display text
	DropdownMatch(BTreeMap<usize, String>),
}

impl Answer {
	pub fn kind(&self) -> QuestionKind {
		match self {
			Answer::Choice(_) => QuestionKind::SingleOrMultiChoice,
			Answer::CategoryMatch(_) => QuestionKind::CategoryMatch,
			Answer::DropdownMatch(_) => QuestionKind::DropdownMatch,
		}
	}

	/// An exhausted search or a blank feedback table produces an empty answer;
	/// those are never worth keeping.
	pub fn is_empty(&self) -> bool {
		match self {
			Answer::Choice(ids) => ids.is_empty(),
			Answer::CategoryMatch(pairs) => pairs.is_empty(),
			Answer::DropdownMatch(choices) => choices.is_empty(),
		}
	}
}

impl fmt::Display for Answer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Answer::Choice(ids) => write!(f, "options [{}]", ids.join(", ")),
			Answer::CategoryMatch(pairs) => {
				let pairs: Vec<String> = pairs.iter().map(|(l, r)| format!("{l} -> {r}")).collect();
				write!(f, "pairs [{}]", pairs.join("; "))
			}
			Answer::DropdownMatch(choices) => {
				let choices: Vec<String> = choices.iter().map(|(i, text)| format!("#{i} -> {text}")).collect();
				write!(f, "dropdowns [{}]", choices.join("; "))
			}
		}
	}
}

/// Process-scoped map from question identity to its discovered answer.
/// Written during collection and discovery, read back during replay; lives for
/// the whole run and is never persisted.
#[derive(Debug, Default)]
pub struct AnswerCache(HashMap<QuestionId, Answer>);

impl AnswerCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, id: &str) -> Option<&Answer> {
		self.0.get(id)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Records an answer for `id` unless one is already known. Empty answers
	/// are rejected outright. Returns whether a new identity was added, which
	/// is what the collection loop uses to measure marginal gain.
	pub fn insert(&mut self, id: QuestionId, answer: Answer) -> bool {
		if answer.is_empty() || self.0.contains_key(&id) {
			return false;
		}
		self.0.insert(id, answer);
		true
	}
}

/// Pick one of the rotating status lines
pub fn pick<'a>(lines: &'a [&'a str]) -> &'a str {
	lines.choose(&mut rand::rng()).copied().unwrap_or_default()
}
