pub mod category_dto;
pub mod deserializers;
pub mod question_dto;
pub mod quiz_dto;
