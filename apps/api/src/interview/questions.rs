//! Question bank for the Excel proficiency interview.
//!
//! Order matters: the index returned to clients addresses this slice directly.
//! The last entry is the closing message and has no rubric.

/// A single interview question with the criteria the model grades against.
/// The rubric is sent to the model only, never to the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub question: &'static str,
    pub rubric: &'static str,
}

pub const INTERVIEW_QUESTIONS: &[Question] = &[
    Question {
        question: "Hello! I am your AI-powered interviewer for the Excel proficiency assessment. \
            To start, can you please explain the difference between the SUM and SUMIF functions in Excel?",
        rubric: "A good answer should correctly define SUM for unconditional addition and SUMIF for \
            conditional addition. An excellent answer will provide a clear, practical example \
            (e.g., summing total sales vs. summing sales for a specific region).",
    },
    Question {
        question: "Great. For your next question, please explain the difference between VLOOKUP and \
            INDEX/MATCH. Why might you choose to use INDEX/MATCH?",
        rubric: "A good answer identifies VLOOKUP as a simpler, vertical lookup tool and INDEX/MATCH as \
            a more flexible combination. An excellent answer explicitly states VLOOKUP's limitations \
            (e.g., only looks left-to-right, breaks if columns are inserted) and highlights \
            INDEX/MATCH's advantages in solving these issues.",
    },
    Question {
        question: "Understood. Now, let's talk about data visualization. What is a Pivot Table, and \
            what is it primarily used for?",
        rubric: "A good answer defines a Pivot Table as a data summarization tool. An excellent answer \
            provides examples of its use (e.g., grouping, summing, averaging large datasets) and \
            mentions its key interactive features, like drag-and-drop fields to rearrange data \
            dynamically.",
    },
    Question {
        question: "This concludes our interview. Thank you for your time!",
        rubric: "",
    },
];

/// Read-only view over an ordered question list whose last entry is the terminal sentinel.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    /// Panics on an empty list: a bank without a terminal entry cannot clamp indices.
    pub const fn new(questions: &'static [Question]) -> Self {
        assert!(!questions.is_empty(), "question bank needs a terminal entry");
        Self { questions }
    }

    pub fn terminal_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn terminal(&self) -> &Question {
        &self.questions[self.terminal_index()]
    }

    pub fn is_terminal(&self, index: usize) -> bool {
        index >= self.terminal_index()
    }

    /// Panics past the terminal entry; callers check `is_terminal` first.
    pub fn question(&self, index: usize) -> &Question {
        &self.questions[index]
    }

    pub fn first(&self) -> &Question {
        &self.questions[0]
    }

    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.terminal_index())
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new(INTERVIEW_QUESTIONS)
    }
}
