use serde::Serialize;

use crate::analysis::{
    AnswerSet, AnswerTag, LESION_CHANGE_QUESTION, SKIN_TYPE_QUESTION, SYMPTOM_QUESTION,
};

/// One selectable option presented to the user.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerOption {
    pub tag: AnswerTag,
    pub label: &'static str,
}

/// One quiz question with its closed answer vocabulary.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDefinition {
    pub id: u8,
    pub key: &'static str,
    pub prompt: &'static str,
    pub options: Vec<AnswerOption>,
}

impl QuestionDefinition {
    pub fn offers(&self, tag: AnswerTag) -> bool {
        self.options.iter().any(|option| option.tag == tag)
    }
}

/// Raised when a recorded answer does not belong to the quiz.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireViolation {
    #[error("question {0} is not part of the questionnaire")]
    UnknownQuestion(u8),
    #[error("answer {tag:?} is not offered for question {question}")]
    UnofferedAnswer { question: u8, tag: AnswerTag },
}

/// The fixed three-question quiz feeding the decision engine.
#[derive(Debug)]
pub struct Questionnaire {
    questions: Vec<QuestionDefinition>,
}

impl Questionnaire {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn question(&self, id: u8) -> Option<&QuestionDefinition> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Validate that `(question, tag)` is a combination the quiz presents.
    pub fn ensure_offered(
        &self,
        question: u8,
        tag: AnswerTag,
    ) -> Result<(), QuestionnaireViolation> {
        let definition = self
            .question(question)
            .ok_or(QuestionnaireViolation::UnknownQuestion(question))?;

        if definition.offers(tag) {
            Ok(())
        } else {
            Err(QuestionnaireViolation::UnofferedAnswer { question, tag })
        }
    }

    pub fn is_complete(&self, answers: &AnswerSet) -> bool {
        self.questions
            .iter()
            .all(|question| answers.get(question.id).is_some())
    }

    /// Lowest-id question still missing an answer, for wizard progression.
    pub fn next_unanswered(&self, answers: &AnswerSet) -> Option<u8> {
        self.questions
            .iter()
            .map(|question| question.id)
            .find(|id| answers.get(*id).is_none())
    }
}

fn standard_questions() -> Vec<QuestionDefinition> {
    vec![
        QuestionDefinition {
            id: LESION_CHANGE_QUESTION,
            key: "lesion_change",
            prompt: "Has a mole, spot, or lesion changed in size, shape, or color recently?",
            options: vec![
                AnswerOption {
                    tag: AnswerTag::LowRisk,
                    label: "No change I have noticed",
                },
                AnswerOption {
                    tag: AnswerTag::MediumRisk,
                    label: "Possibly, something looks slightly different",
                },
                AnswerOption {
                    tag: AnswerTag::HighRisk,
                    label: "Yes, a clear change in size, shape, or color",
                },
            ],
        },
        QuestionDefinition {
            id: SYMPTOM_QUESTION,
            key: "symptom",
            prompt: "How does your skin feel at the moment?",
            options: vec![
                AnswerOption {
                    tag: AnswerTag::Clean,
                    label: "Calm, no particular concerns",
                },
                AnswerOption {
                    tag: AnswerTag::Sensitive,
                    label: "Tight or stinging now and then",
                },
                AnswerOption {
                    tag: AnswerTag::Inflammation,
                    label: "Red, itchy, or visibly inflamed",
                },
            ],
        },
        QuestionDefinition {
            id: SKIN_TYPE_QUESTION,
            key: "skin_type",
            prompt: "How would you describe your skin type?",
            options: vec![
                AnswerOption {
                    tag: AnswerTag::Dry,
                    label: "Dry, flaky or tight by midday",
                },
                AnswerOption {
                    tag: AnswerTag::Combination,
                    label: "Combination, oily T-zone with drier cheeks",
                },
                AnswerOption {
                    tag: AnswerTag::Oily,
                    label: "Oily, shine returns within hours",
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_quiz_has_three_questions() {
        let quiz = Questionnaire::standard();
        assert_eq!(quiz.questions().len(), 3);
        assert!(quiz.question(LESION_CHANGE_QUESTION).is_some());
        assert!(quiz.question(9).is_none());
    }

    #[test]
    fn ensure_offered_accepts_listed_combinations() {
        let quiz = Questionnaire::standard();
        assert!(quiz
            .ensure_offered(SKIN_TYPE_QUESTION, AnswerTag::Oily)
            .is_ok());
    }

    #[test]
    fn ensure_offered_rejects_foreign_tags() {
        let quiz = Questionnaire::standard();
        let error = quiz
            .ensure_offered(SKIN_TYPE_QUESTION, AnswerTag::HighRisk)
            .expect_err("skin type question never offers risk tags");
        assert!(matches!(
            error,
            QuestionnaireViolation::UnofferedAnswer { question, .. }
                if question == SKIN_TYPE_QUESTION
        ));
    }

    #[test]
    fn ensure_offered_rejects_unknown_questions() {
        let quiz = Questionnaire::standard();
        let error = quiz
            .ensure_offered(42, AnswerTag::Clean)
            .expect_err("question 42 does not exist");
        assert!(matches!(error, QuestionnaireViolation::UnknownQuestion(42)));
    }

    #[test]
    fn completion_tracks_every_question() {
        let quiz = Questionnaire::standard();
        let mut answers = AnswerSet::new();
        assert!(!quiz.is_complete(&answers));
        assert_eq!(quiz.next_unanswered(&answers), Some(LESION_CHANGE_QUESTION));

        answers.record(LESION_CHANGE_QUESTION, AnswerTag::LowRisk);
        answers.record(SYMPTOM_QUESTION, AnswerTag::Clean);
        assert_eq!(quiz.next_unanswered(&answers), Some(SKIN_TYPE_QUESTION));

        answers.record(SKIN_TYPE_QUESTION, AnswerTag::Dry);
        assert!(quiz.is_complete(&answers));
        assert_eq!(quiz.next_unanswered(&answers), None);
    }
}
