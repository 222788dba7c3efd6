//! Data Transfer Objects (DTOs) for the service layer.

mod translation_dto;

pub use translation_dto::*;
