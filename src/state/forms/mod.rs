//! Form domain layer
//!
//! Type-safe field values and the five editor form records. Every field has
//! a dedicated update operation; key handling edits through the generic
//! field operations on [`Form`].

mod field;
mod form_state;
mod options;

pub use field::{FieldProblem, FormField, TIME_FORMAT};
pub use form_state::{
    BusFareForm, BusNameForm, BusRouteForm, BusTimingForm, BusTypeForm, EditorForm, Form,
};
pub use options::{BusSubType, BusType, FareType};
