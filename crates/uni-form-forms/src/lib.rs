//! Forms consumed by the uni-form rendering layer
//!
//! This crate provides the form side of the contract the directives rely on:
//! - ordered fields with labels, help text, widgets and initial values
//! - bound fields exposing an element id, a value and an error list
//! - formsets of identically-shaped forms with a management form
//!
//! Data validation is out of scope. Errors are attached by the application
//! with [`Form::add_error`].

pub mod bound_field;
pub mod field;
pub mod fields;
pub mod form;
pub mod formset;

pub use bound_field::BoundField;
pub use field::{FormField, Widget};
pub use fields::{BooleanField, CharField, ChoiceField};
pub use form::{ALL_FIELDS_KEY, Form};
pub use formset::{DEFAULT_PREFIX, FormSet, FormSetFactory, formset_factory};
