use crate::{
    backend::{ApiClient, questions::Questions},
    error::{ApiError, ViewError},
    types::{Answer, AnswerDraft, AnswerPatch, Level, Question, QuestionDraft, RecordId},
    views::{AnswerList, ResourceView},
};

/// Questions of one topic at one level, with the answers of the question
/// currently opened.
///
/// Questions that end up on another level after a create or update leave
/// the board.
#[derive(Debug, Clone)]
pub struct QuestionBoard {
    level: Level,
    questions: ResourceView<Questions>,
    answers: Option<AnswerList>,
}

impl QuestionBoard {
    pub fn new(client: &ApiClient, topic_id: RecordId, level: Level) -> Self {
        Self {
            level,
            questions: ResourceView::new(client, topic_id),
            answers: None,
        }
    }

    pub fn topic_id(&self) -> RecordId {
        self.questions.scope()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn questions(&self) -> &ResourceView<Questions> {
        &self.questions
    }

    pub async fn load(&mut self) -> Result<(), ApiError> {
        self.questions.load().await?;
        let level = self.level;
        self.questions.retain(|q| q.level == Some(level));
        Ok(())
    }

    pub async fn create_question(&mut self, draft: &QuestionDraft) -> Result<Question, ApiError> {
        let question = self.questions.create(draft).await?;
        self.drop_if_elsewhere(&question);
        Ok(question)
    }

    /// Replaces the question as a whole.
    pub async fn update_question(
        &mut self,
        id: RecordId,
        draft: &QuestionDraft,
    ) -> Result<Question, ApiError> {
        let question = self.questions.update(id, draft).await?;
        self.drop_if_elsewhere(&question);
        Ok(question)
    }

    /// Deletes the question; its answers are closed if it was open.
    pub async fn delete_question(&mut self, id: RecordId) -> Result<(), ApiError> {
        self.questions.delete(id).await?;
        if self.selected_question() == Some(id) {
            self.answers = None;
        }
        Ok(())
    }

    /// Opens a question and lists its answers.
    pub async fn open_question(&mut self, question_id: RecordId) -> Result<&AnswerList, ApiError> {
        let mut answers = AnswerList::new(self.questions.repository().client(), question_id);
        answers.load().await?;
        Ok(self.answers.insert(answers))
    }

    pub fn selected_question(&self) -> Option<RecordId> {
        self.answers.as_ref().map(|a| a.scope())
    }

    pub fn answers(&self) -> Option<&AnswerList> {
        self.answers.as_ref()
    }

    pub async fn create_answer(&mut self, text: &str, is_right: bool) -> Result<Answer, ViewError> {
        let answers = self.open_answers()?;
        let draft = AnswerDraft {
            text: text.to_string(),
            is_right,
            question: answers.scope(),
        };
        Ok(answers.create(&draft).await?)
    }

    pub async fn update_answer(
        &mut self,
        id: RecordId,
        patch: &AnswerPatch,
    ) -> Result<Answer, ViewError> {
        Ok(self.open_answers()?.update(id, patch).await?)
    }

    pub async fn delete_answer(&mut self, id: RecordId) -> Result<(), ViewError> {
        Ok(self.open_answers()?.delete(id).await?)
    }

    fn open_answers(&mut self) -> Result<&mut AnswerList, ViewError> {
        self.answers.as_mut().ok_or(ViewError::NoQuestionOpen)
    }

    /// Questions of another topic are dropped by the view itself.
    fn drop_if_elsewhere(&mut self, question: &Question) {
        if question.level != Some(self.level) {
            self.questions.discard(question.id);
        }
    }
}
