pub mod avatar;
pub mod comment;
pub mod error;
pub mod event;
pub mod form;
pub mod post;
pub mod timestamp;
pub mod view;
