pub mod catalog;
pub mod professor;
pub mod rating;
