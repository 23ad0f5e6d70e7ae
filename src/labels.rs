//! Condition labeling: randomized, session-scoped cue labels.
//!
//! Each session binds the experimental conditions to visual cue labels
//! (colors) drawn from a candidate set. The binding is a uniform random
//! permutation truncated to the number of conditions, made once and then
//! read by every instruction builder for the rest of the session.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Colors the cue words can be rendered in.
pub const DEFAULT_CUE_COLORS: &[&str] = &["red", "blue", "green"];

// =============================================================================
// Conditions
// =============================================================================

/// Experimental condition an image is presented under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Condition {
    /// Presented as a real photograph.
    Reality,
    /// Presented as AI-generated.
    Fiction,
}

impl Condition {
    pub const ALL: [Condition; 2] = [Condition::Reality, Condition::Fiction];

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Reality => "Reality",
            Condition::Fiction => "Fiction",
        }
    }

    /// Participant-visible cue word shown before each stimulus.
    pub fn cue_text(self) -> &'static str {
        match self {
            Condition::Reality => "Photograph",
            Condition::Fiction => "AI-generated",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// Fewer candidate labels than categories to label.
    #[error("insufficient labels: {candidates} candidate label(s) for {categories} categories")]
    InsufficientLabels { categories: usize, candidates: usize },

    #[error("category at index {index} is listed more than once")]
    DuplicateCategory { index: usize },

    #[error("candidate label at index {index} is listed more than once")]
    DuplicateLabel { index: usize },

    /// A builder asked for a category the map does not hold.
    #[error("no label assigned to category {category}")]
    Unassigned { category: String },
}

impl LabelError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InsufficientLabels { .. } => "insufficient_labels",
            Self::DuplicateCategory { .. } => "duplicate_category",
            Self::DuplicateLabel { .. } => "duplicate_label",
            Self::Unassigned { .. } => "unassigned_category",
        }
    }
}

// =============================================================================
// Label map
// =============================================================================

/// One category and the label bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelAssignment<K, L> {
    pub category: K,
    pub label: L,
}

/// Bijection from categories onto a subset of candidate labels.
///
/// Only [`assign_labels`] constructs one, so the invariants (every category
/// present once, no label reused) hold for every value in circulation.
/// Iteration follows the category order given at assignment time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryLabelMap<K, L> {
    entries: Vec<LabelAssignment<K, L>>,
}

/// Session cue colors keyed by condition.
pub type CueColors = CategoryLabelMap<Condition, String>;

impl<K: PartialEq, L> CategoryLabelMap<K, L> {
    pub fn get(&self, category: &K) -> Option<&L> {
        self.entries
            .iter()
            .find(|e| &e.category == category)
            .map(|e| &e.label)
    }

    pub fn contains(&self, category: &K) -> bool {
        self.get(category).is_some()
    }
}

impl<K, L> CategoryLabelMap<K, L> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &L)> {
        self.entries.iter().map(|e| (&e.category, &e.label))
    }

    pub fn categories(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|e| &e.category)
    }

    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.entries.iter().map(|e| &e.label)
    }
}

impl<K: fmt::Display, L: fmt::Display> fmt::Display for CategoryLabelMap<K, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, e) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", e.category, e.label)?;
        }
        Ok(())
    }
}

impl<L> CategoryLabelMap<Condition, L> {
    /// Label for a condition, or [`LabelError::Unassigned`].
    pub fn require(&self, condition: Condition) -> Result<&L, LabelError> {
        self.get(&condition).ok_or_else(|| LabelError::Unassigned {
            category: condition.to_string(),
        })
    }
}

// =============================================================================
// Assignment
// =============================================================================

/// Unbiased in-place shuffle (Fisher–Yates).
///
/// Walks from the last position down to the second, swapping each with a
/// uniformly chosen position at or before it.
pub fn shuffle_labels<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Bind `categories` (in caller order) to a random permutation of `candidates`.
///
/// Fails when there are fewer candidates than categories, or when either list
/// repeats an entry (the result would not be a bijection).
pub fn assign_labels<K, L, R>(
    categories: &[K],
    candidates: &[L],
    rng: &mut R,
) -> Result<CategoryLabelMap<K, L>, LabelError>
where
    K: Clone + PartialEq + fmt::Debug,
    L: Clone + PartialEq + fmt::Debug,
    R: Rng + ?Sized,
{
    if candidates.len() < categories.len() {
        return Err(LabelError::InsufficientLabels {
            categories: categories.len(),
            candidates: candidates.len(),
        });
    }
    if let Some(index) = first_repeat(categories) {
        return Err(LabelError::DuplicateCategory { index });
    }
    if let Some(index) = first_repeat(candidates) {
        return Err(LabelError::DuplicateLabel { index });
    }

    let mut permuted = candidates.to_vec();
    shuffle_labels(&mut permuted, rng);

    let entries: Vec<LabelAssignment<K, L>> = categories
        .iter()
        .cloned()
        .zip(permuted)
        .map(|(category, label)| LabelAssignment { category, label })
        .collect();

    debug!(assignments = ?entries, "assigned category labels");
    Ok(CategoryLabelMap { entries })
}

/// [`assign_labels`] with a freshly seeded generator; calls are independent.
pub fn assign_labels_with_entropy<K, L>(
    categories: &[K],
    candidates: &[L],
) -> Result<CategoryLabelMap<K, L>, LabelError>
where
    K: Clone + PartialEq + fmt::Debug,
    L: Clone + PartialEq + fmt::Debug,
{
    let mut rng = StdRng::from_entropy();
    assign_labels(categories, candidates, &mut rng)
}

/// Bind both conditions to colors from `candidates`.
pub fn assign_cue_colors<R: Rng + ?Sized>(
    candidates: &[String],
    rng: &mut R,
) -> Result<CueColors, LabelError> {
    assign_labels(&Condition::ALL, candidates, rng)
}

fn first_repeat<T: PartialEq>(items: &[T]) -> Option<usize> {
    (1..items.len()).find(|&i| items[..i].contains(&items[i]))
}

// =============================================================================
// TESTS
// =============================================================================
