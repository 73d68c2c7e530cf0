pub mod boolean_field;
pub mod char_field;
pub mod choice_field;

pub use boolean_field::BooleanField;
pub use char_field::CharField;
pub use choice_field::ChoiceField;
