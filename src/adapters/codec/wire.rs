//! Wire field names. Matching on decode is case-insensitive; these are the
//! spellings written on encode.

pub const ID: &str = "id";
pub const QUESTION_TYPE: &str = "questionType";

// Question base
pub const SURVEY_ID: &str = "surveyId";
pub const TEXT: &str = "text";
pub const QUESTION_NUMBER: &str = "questionNumber";
pub const CREATED_DATE: &str = "createdDate";
pub const UPDATED_DATE: &str = "updatedDate";

// Question variants
pub const MAX_LENGTH: &str = "maxLength";
pub const OPTIONS: &str = "options";
pub const OPTION_TEXT: &str = "optionText";
pub const ORDER: &str = "order";

// Answers
pub const QUESTION_ID: &str = "questionId";
pub const VALUE: &str = "value";
pub const SELECTED_OPTION_ID: &str = "selectedOptionId";
pub const IS_SELECTED: &str = "isSelected";

// Surveys
pub const TITLE: &str = "title";
pub const QUESTIONS: &str = "questions";
