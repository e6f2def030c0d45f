use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod recommendations;
pub use recommendations::{DriveKind, Recommendation, recommend};

/// The four questions the quiz asks.
///
/// Every question has a fixed option set and a single mutable answer slot in
/// the [`AnswerSet`]; there is no ordering requirement between questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Question {
    /// How much the buyer wants to spend
    Budget,
    /// What the drive will mostly be used for
    PrimaryUse,
    /// How much space the buyer needs
    Capacity,
    /// Whether the drive stays on a desk or travels
    Portability,
}

impl Question {
    pub const ALL: [Question; 4] = [
        Question::Budget,
        Question::PrimaryUse,
        Question::Capacity,
        Question::Portability,
    ];

    /// All selectable choices for this question, in display order.
    pub fn choices(&self) -> Vec<Choice> {
        match self {
            Question::Budget => Budget::ALL.iter().copied().map(Choice::Budget).collect(),
            Question::PrimaryUse => PrimaryUse::ALL
                .iter()
                .copied()
                .map(Choice::PrimaryUse)
                .collect(),
            Question::Capacity => Capacity::ALL
                .iter()
                .copied()
                .map(Choice::Capacity)
                .collect(),
            Question::Portability => Portability::ALL
                .iter()
                .copied()
                .map(Choice::Portability)
                .collect(),
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Question::Budget => write!(f, "Budget"),
            Question::PrimaryUse => write!(f, "Primary use"),
            Question::Capacity => write!(f, "Capacity"),
            Question::Portability => write!(f, "Portability"),
        }
    }
}

/// Answer options for the budget question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Budget {
    Tight,
    Moderate,
    Flexible,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Tight, Budget::Moderate, Budget::Flexible];
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Budget::Tight => write!(f, "Tight"),
            Budget::Moderate => write!(f, "Moderate"),
            Budget::Flexible => write!(f, "Flexible"),
        }
    }
}

/// Answer options for the primary-use question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum PrimaryUse {
    /// Operating system and applications
    OsAndApps,
    Gaming,
    /// Photo and video editing
    Editing,
    /// Long-term archives and backups
    Archive,
}

impl PrimaryUse {
    pub const ALL: [PrimaryUse; 4] = [
        PrimaryUse::OsAndApps,
        PrimaryUse::Gaming,
        PrimaryUse::Editing,
        PrimaryUse::Archive,
    ];
}

impl std::fmt::Display for PrimaryUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimaryUse::OsAndApps => write!(f, "OS & apps"),
            PrimaryUse::Gaming => write!(f, "Gaming"),
            PrimaryUse::Editing => write!(f, "Photo/Video Editing"),
            PrimaryUse::Archive => write!(f, "Archiving/Backups"),
        }
    }
}

/// Answer options for the capacity question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Capacity {
    Sub1Tb,
    OneToFourTb,
    MultiTb,
}

impl Capacity {
    pub const ALL: [Capacity; 3] = [
        Capacity::Sub1Tb,
        Capacity::OneToFourTb,
        Capacity::MultiTb,
    ];
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capacity::Sub1Tb => write!(f, "Up to 1TB"),
            Capacity::OneToFourTb => write!(f, "1-4TB"),
            Capacity::MultiTb => write!(f, "8TB and up"),
        }
    }
}

/// Answer options for the portability question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Portability {
    Stationary,
    Mobile,
}

impl Portability {
    pub const ALL: [Portability; 2] = [Portability::Stationary, Portability::Mobile];
}

impl std::fmt::Display for Portability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Portability::Stationary => write!(f, "Desktop/NAS (stationary)"),
            Portability::Mobile => write!(f, "Laptop/on-the-go"),
        }
    }
}

/// One selected answer, tagged with the question it belongs to.
///
/// Pairing the question and its value in a single enum makes a mismatched
/// question/value pair unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Budget(Budget),
    PrimaryUse(PrimaryUse),
    Capacity(Capacity),
    Portability(Portability),
}

impl Choice {
    /// The question this choice answers.
    pub fn question(&self) -> Question {
        match self {
            Choice::Budget(_) => Question::Budget,
            Choice::PrimaryUse(_) => Question::PrimaryUse,
            Choice::Capacity(_) => Question::Capacity,
            Choice::Portability(_) => Question::Portability,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::Budget(v) => write!(f, "{v}"),
            Choice::PrimaryUse(v) => write!(f, "{v}"),
            Choice::Capacity(v) => write!(f, "{v}"),
            Choice::Portability(v) => write!(f, "{v}"),
        }
    }
}

/// The buyer's in-progress quiz answers.
///
/// Each field is unset until answered and holds exactly one value afterwards;
/// answering the same question again overwrites the previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerSet {
    pub budget: Option<Budget>,
    pub primary_use: Option<PrimaryUse>,
    pub capacity: Option<Capacity>,
    pub portability: Option<Portability>,
}

impl AnswerSet {
    /// Overwrite the slot for the choice's question.
    pub fn set(&mut self, choice: Choice) {
        match choice {
            Choice::Budget(v) => self.budget = Some(v),
            Choice::PrimaryUse(v) => self.primary_use = Some(v),
            Choice::Capacity(v) => self.capacity = Some(v),
            Choice::Portability(v) => self.portability = Some(v),
        }
    }

    /// Whether this choice is the currently stored answer for its question.
    pub fn is_selected(&self, choice: Choice) -> bool {
        match choice {
            Choice::Budget(v) => self.budget == Some(v),
            Choice::PrimaryUse(v) => self.primary_use == Some(v),
            Choice::Capacity(v) => self.capacity == Some(v),
            Choice::Portability(v) => self.portability == Some(v),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.budget.is_some()
            && self.primary_use.is_some()
            && self.capacity.is_some()
            && self.portability.is_some()
    }

    /// Questions that still have no answer, in display order.
    pub fn unanswered(&self) -> Vec<Question> {
        let mut missing = Vec::new();
        if self.budget.is_none() {
            missing.push(Question::Budget);
        }
        if self.primary_use.is_none() {
            missing.push(Question::PrimaryUse);
        }
        if self.capacity.is_none() {
            missing.push(Question::Capacity);
        }
        if self.portability.is_none() {
            missing.push(Question::Portability);
        }
        missing
    }
}

/// State manager for one quiz session.
///
/// A session owns a single [`AnswerSet`], lives exactly as long as the guide
/// window (or one CLI invocation), and recomputes the recommendation from
/// scratch on every read. Nothing here is persisted.
pub struct QuizSession {
    answers: AnswerSet,
}

impl QuizSession {
    /// Create a session with no questions answered.
    pub fn new() -> Self {
        Self {
            answers: AnswerSet::default(),
        }
    }

    /// Record one answer, overwriting any previous answer to the same question.
    pub fn select(&mut self, choice: Choice) {
        self.answers.set(choice);
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn is_selected(&self, choice: Choice) -> bool {
        self.answers.is_selected(choice)
    }

    /// The current recommendation, or `None` while any question is unanswered.
    pub fn recommendation(&self) -> Option<Recommendation> {
        recommend(&self.answers)
    }

    /// Reset all four answer slots.
    pub fn clear(&mut self) {
        self.answers = AnswerSet::default();
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_budget() -> impl Strategy<Value = Budget> {
        prop_oneof![
            Just(Budget::Tight),
            Just(Budget::Moderate),
            Just(Budget::Flexible),
        ]
    }

    fn arb_primary_use() -> impl Strategy<Value = PrimaryUse> {
        prop_oneof![
            Just(PrimaryUse::OsAndApps),
            Just(PrimaryUse::Gaming),
            Just(PrimaryUse::Editing),
            Just(PrimaryUse::Archive),
        ]
    }

    fn arb_capacity() -> impl Strategy<Value = Capacity> {
        prop_oneof![
            Just(Capacity::Sub1Tb),
            Just(Capacity::OneToFourTb),
            Just(Capacity::MultiTb),
        ]
    }

    fn arb_portability() -> impl Strategy<Value = Portability> {
        prop_oneof![Just(Portability::Stationary), Just(Portability::Mobile)]
    }

    fn arb_choice() -> impl Strategy<Value = Choice> {
        prop_oneof![
            arb_budget().prop_map(Choice::Budget),
            arb_primary_use().prop_map(Choice::PrimaryUse),
            arb_capacity().prop_map(Choice::Capacity),
            arb_portability().prop_map(Choice::Portability),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_select_only_touches_its_own_slot(
            choices in proptest::collection::vec(arb_choice(), 0..12),
            extra in arb_choice(),
        ) {
            let mut session = QuizSession::new();
            for choice in &choices {
                session.select(*choice);
            }
            let before = *session.answers();

            session.select(extra);

            let after = *session.answers();
            for question in Question::ALL {
                if question == extra.question() {
                    prop_assert!(after.is_selected(extra));
                } else {
                    // Untouched slots are unchanged
                    match question {
                        Question::Budget => prop_assert_eq!(after.budget, before.budget),
                        Question::PrimaryUse => {
                            prop_assert_eq!(after.primary_use, before.primary_use)
                        }
                        Question::Capacity => prop_assert_eq!(after.capacity, before.capacity),
                        Question::Portability => {
                            prop_assert_eq!(after.portability, before.portability)
                        }
                    }
                }
            }
        }
    }

    // Setting the same field to the same value twice leaves the
    // recommendation unchanged.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_repeated_select_is_idempotent(
            choices in proptest::collection::vec(arb_choice(), 0..12),
            repeated in arb_choice(),
        ) {
            let mut session = QuizSession::new();
            for choice in &choices {
                session.select(*choice);
            }

            session.select(repeated);
            let first = session.recommendation();
            session.select(repeated);
            let second = session.recommendation();

            prop_assert_eq!(first, second);
        }
    }

    // Four answered questions always produce a recommendation, in any order.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_complete_session_recommends_regardless_of_order(
            budget in arb_budget(),
            primary_use in arb_primary_use(),
            capacity in arb_capacity(),
            portability in arb_portability(),
            order in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
        ) {
            let mut session = QuizSession::new();
            let choices = [
                Choice::Budget(budget),
                Choice::PrimaryUse(primary_use),
                Choice::Capacity(capacity),
                Choice::Portability(portability),
            ];
            for idx in order {
                session.select(choices[idx]);
            }

            prop_assert!(session.recommendation().is_some());
            prop_assert!(session.answers().unanswered().is_empty());
        }
    }
}
