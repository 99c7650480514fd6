pub mod language;
pub mod reference_link;
pub mod response_field;
pub mod tagged_response;
pub use language::{LanguageOption, ProgrammingLanguage};
pub use reference_link::ReferenceLink;
pub use response_field::ResponseField;
pub use tagged_response::TaggedResponse;
