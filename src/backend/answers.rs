use crate::{
    backend::{Resource, repository::Repository},
    types::{Answer, AnswerDraft, AnswerPatch, RecordId},
};

#[derive(Debug, Clone, Copy)]
pub struct Answers;

impl Resource for Answers {
    type Record = Answer;
    type Draft = AnswerDraft;
    type Patch = AnswerPatch;
    /// Parent question.
    type Scope = RecordId;

    const NAME: &'static str = "answer";
    const BASE: &'static str = "/api/answers";

    fn list_path(question_id: RecordId) -> String {
        format!("{}/?question_id={}", Self::BASE, question_id)
    }

    fn scope_of(answer: &Answer) -> RecordId {
        answer.question
    }
}

pub type AnswerRepository = Repository<Answers>;
