//! Quiz module - Answer sheets, the question bank, and life-domain slicing.

mod answers;
mod bank;
mod domains;

pub use answers::AnswerSet;
pub use bank::{AnswerOption, Question, QuestionBank};
pub use domains::{AnswerCallout, DomainRange, DomainRangeTable, DomainSlices, LifeDomain};
