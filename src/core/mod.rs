pub mod answers;
pub mod convert;
pub mod etl;
pub mod keys;
pub mod merge;
pub mod validator;

pub use crate::domain::model::{ConvertedQuestion, ConvertedQuiz, MergedDataset, QuestionRecord};
pub use crate::domain::ports::{Confirm, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
