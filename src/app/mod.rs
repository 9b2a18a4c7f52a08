//! Core application logic: form state, validation, event handling, and action dispatch.

pub mod action;
pub mod event;
pub mod form;
pub mod handler;
pub mod state;
pub mod validate;
