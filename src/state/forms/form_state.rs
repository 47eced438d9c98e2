//! Form state management and form structs

use super::field::{FieldProblem, FormField};
use super::options::{BusSubType, BusType, FareType};
use crate::photo::SelectedPhoto;
use crate::state::PageKind;

/// Trait for common form operations
///
/// Controls are indexed `0..field_count()` for the visible input fields,
/// followed by the submit button at `field_count()`.
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn get_field(&self, index: usize) -> Option<&FormField>;
    /// Route a new raw value for control `index` to that field's setter
    fn set_field_text(&mut self, index: usize, value: String);
    /// Route a new selection for control `index` to that field's setter
    fn select_option(&mut self, _index: usize, _option: Option<usize>) {}

    fn next_field(&mut self) {
        let count = self.field_count() + 1;
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count() + 1;
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// Returns true if the submit button is the active control
    fn is_submit_active(&self) -> bool {
        self.active_field() == self.field_count()
    }
    /// Type one character into the active field
    fn type_char(&mut self, c: char) {
        let index = self.active_field();
        if let Some(value) = self.get_field(index).and_then(|f| f.with_char(c)) {
            self.set_field_text(index, value);
        }
    }
    /// Delete the last character of the active field
    fn backspace(&mut self) {
        let index = self.active_field();
        if let Some(value) = self.get_field(index).and_then(|f| f.without_last_char()) {
            self.set_field_text(index, value);
        }
    }
    /// Cycle the active select field, if the active control is one
    fn cycle_active_choice(&mut self, forward: bool) {
        let index = self.active_field();
        if let Some(option) = self.get_field(index).and_then(|f| f.next_option(forward)) {
            self.select_option(index, Some(option));
        }
    }
    /// First control that blocks submission, and why
    fn first_problem(&self) -> Option<(usize, FieldProblem)> {
        (0..self.field_count()).find_map(|i| {
            self.get_field(i)
                .and_then(|f| f.problem())
                .map(|problem| (i, problem))
        })
    }
}

/// The form of one mounted editor page
#[derive(Debug, Clone)]
pub enum EditorForm {
    BusName(BusNameForm),
    BusRoute(BusRouteForm),
    BusFare(BusFareForm),
    BusTiming(BusTimingForm),
    BusType(BusTypeForm),
}

impl EditorForm {
    /// Fresh form with the page's empty/default values
    pub fn new(kind: PageKind) -> Self {
        match kind {
            PageKind::BusName => Self::BusName(BusNameForm::new()),
            PageKind::BusRoute => Self::BusRoute(BusRouteForm::new()),
            PageKind::BusFare => Self::BusFare(BusFareForm::new()),
            PageKind::BusTiming => Self::BusTiming(BusTimingForm::new()),
            PageKind::BusType => Self::BusType(BusTypeForm::new()),
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            Self::BusName(_) => PageKind::BusName,
            Self::BusRoute(_) => PageKind::BusRoute,
            Self::BusFare(_) => PageKind::BusFare,
            Self::BusTiming(_) => PageKind::BusTiming,
            Self::BusType(_) => PageKind::BusType,
        }
    }

    pub fn as_form(&self) -> &dyn Form {
        match self {
            Self::BusName(f) => f,
            Self::BusRoute(f) => f,
            Self::BusFare(f) => f,
            Self::BusTiming(f) => f,
            Self::BusType(f) => f,
        }
    }

    pub fn as_form_mut(&mut self) -> &mut dyn Form {
        match self {
            Self::BusName(f) => f,
            Self::BusRoute(f) => f,
            Self::BusFare(f) => f,
            Self::BusTiming(f) => f,
            Self::BusType(f) => f,
        }
    }
}

// Bus Name Form
#[derive(Debug, Clone)]
pub struct BusNameForm {
    pub name: FormField,
    /// Where to pick the photo from; the chosen file itself lives in `photo`
    pub photo_path: FormField,
    pub photo: Option<SelectedPhoto>,
    pub active_field_index: usize,
}

impl BusNameForm {
    pub const NAME: usize = 0;
    pub const PHOTO: usize = 1;

    pub fn new() -> Self {
        Self {
            name: FormField::text("busName", "Bus Name", "Enter bus name", true),
            photo_path: FormField::text(
                "busPhoto",
                "Upload Bus Photo",
                "Type an image path, Enter to choose",
                true,
            ),
            photo: None,
            active_field_index: 0,
        }
    }

    pub fn set_name(&mut self, value: String) {
        self.name.set_text(value);
    }

    pub fn set_photo_path(&mut self, value: String) {
        self.photo_path.set_text(value);
    }

    pub fn set_photo(&mut self, photo: SelectedPhoto) {
        self.photo = Some(photo);
    }
}

impl Default for BusNameForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for BusNameForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            Self::NAME => Some(&self.name),
            Self::PHOTO => Some(&self.photo_path),
            _ => None,
        }
    }
    fn set_field_text(&mut self, index: usize, value: String) {
        match index {
            Self::NAME => self.set_name(value),
            Self::PHOTO => self.set_photo_path(value),
            _ => {}
        }
    }
    /// The typed path only locates the file; what counts is the chosen photo
    fn first_problem(&self) -> Option<(usize, FieldProblem)> {
        if let Some(problem) = self.name.problem() {
            return Some((Self::NAME, problem));
        }
        self.photo
            .is_none()
            .then_some((Self::PHOTO, FieldProblem::NoFile))
    }
}

// Bus Route Form
#[derive(Debug, Clone)]
pub struct BusRouteForm {
    pub departure: FormField,
    pub arrival: FormField,
    pub stops: Vec<FormField>,
    pub active_field_index: usize,
}

/// Index of the first stop control
const FIRST_STOP: usize = 2;

fn stop_field(index: usize, value: String) -> FormField {
    let label = format!("Stop {}", index + 1);
    let mut field = FormField::text(&format!("routeStops[{index}]"), &label, &label, false);
    field.set_text(value);
    field
}

impl BusRouteForm {
    pub fn new() -> Self {
        Self {
            departure: FormField::text(
                "departureLocation",
                "Departure Location",
                "Enter departure location",
                true,
            ),
            arrival: FormField::text(
                "arrivalLocation",
                "Arrival Location",
                "Enter arrival location",
                true,
            ),
            stops: vec![stop_field(0, String::new())],
            active_field_index: 0,
        }
    }

    pub fn set_departure(&mut self, value: String) {
        self.departure.set_text(value);
    }

    pub fn set_arrival(&mut self, value: String) {
        self.arrival.set_text(value);
    }

    /// Overwrite one stop; other stops and the list length are untouched
    pub fn set_stop(&mut self, index: usize, value: String) {
        if let Some(stop) = self.stops.get_mut(index) {
            stop.set_text(value);
        }
    }

    /// Append an empty stop and return its index
    pub fn add_stop(&mut self) -> usize {
        let index = self.stops.len();
        self.stops.push(stop_field(index, String::new()));
        index
    }

    /// Remove the stop at `index`, renumbering the ones after it
    pub fn remove_stop(&mut self, index: usize) {
        if index >= self.stops.len() {
            return;
        }
        let values: Vec<String> = self
            .stops
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, s)| s.as_text().to_string())
            .collect();
        self.stops = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| stop_field(i, v))
            .collect();
        self.active_field_index = self.active_field_index.min(self.field_count());
    }

    /// Whether the remove control is offered at all
    pub fn can_remove_stop(&self) -> bool {
        self.stops.len() > 1
    }

    pub fn stop_values(&self) -> Vec<String> {
        self.stops.iter().map(|s| s.as_text().to_string()).collect()
    }

    /// Stop index of the active control, if it is a stop
    pub fn active_stop(&self) -> Option<usize> {
        self.active_field_index
            .checked_sub(FIRST_STOP)
            .filter(|i| *i < self.stops.len())
    }

    /// Control index of a stop
    pub fn stop_control(index: usize) -> usize {
        FIRST_STOP + index
    }
}

impl Default for BusRouteForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for BusRouteForm {
    fn field_count(&self) -> usize {
        FIRST_STOP + self.stops.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count());
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.departure),
            1 => Some(&self.arrival),
            i => self.stops.get(i - FIRST_STOP),
        }
    }
    fn set_field_text(&mut self, index: usize, value: String) {
        match index {
            0 => self.set_departure(value),
            1 => self.set_arrival(value),
            i => self.set_stop(i - FIRST_STOP, value),
        }
    }
}

// Bus Fare Form
#[derive(Debug, Clone)]
pub struct BusFareForm {
    pub amount: FormField,
    pub fare_type: FormField,
    pub active_field_index: usize,
}

impl BusFareForm {
    pub fn new() -> Self {
        Self {
            amount: FormField::number("fareAmount", "Fare Amount", "Enter fare amount"),
            fare_type: FormField::choice(
                "fareType",
                "Fare Type",
                "",
                FareType::LABELS,
                Some(0),
                false,
            ),
            active_field_index: 0,
        }
    }

    pub fn set_amount(&mut self, value: String) {
        self.amount.set_text(value);
    }

    pub fn set_fare_type(&mut self, fare_type: FareType) {
        let index = FareType::ALL.iter().position(|f| *f == fare_type);
        self.fare_type.select(index);
    }

    pub fn fare_type(&self) -> FareType {
        self.fare_type
            .selected()
            .and_then(FareType::from_index)
            .unwrap_or_default()
    }
}

impl Default for BusFareForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for BusFareForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.amount),
            1 => Some(&self.fare_type),
            _ => None,
        }
    }
    fn set_field_text(&mut self, index: usize, value: String) {
        if index == 0 {
            self.set_amount(value);
        }
    }
    fn select_option(&mut self, index: usize, option: Option<usize>) {
        if let Some(fare_type) = option.and_then(FareType::from_index).filter(|_| index == 1) {
            self.set_fare_type(fare_type);
        }
    }
}

// Bus Timing Form
#[derive(Debug, Clone)]
pub struct BusTimingForm {
    pub departure_time: FormField,
    pub arrival_time: FormField,
    pub active_field_index: usize,
}

impl BusTimingForm {
    pub fn new() -> Self {
        Self {
            departure_time: FormField::time("departureTime", "Departure Time"),
            arrival_time: FormField::time("arrivalTime", "Arrival Time"),
            active_field_index: 0,
        }
    }

    pub fn set_departure_time(&mut self, value: String) {
        self.departure_time.set_text(value);
    }

    pub fn set_arrival_time(&mut self, value: String) {
        self.arrival_time.set_text(value);
    }
}

impl Default for BusTimingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for BusTimingForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.departure_time),
            1 => Some(&self.arrival_time),
            _ => None,
        }
    }
    fn set_field_text(&mut self, index: usize, value: String) {
        match index {
            0 => self.set_departure_time(value),
            1 => self.set_arrival_time(value),
            _ => {}
        }
    }
}

// Bus Type Form
#[derive(Debug, Clone)]
pub struct BusTypeForm {
    pub bus_type: FormField,
    /// Only shown once a bus type has been chosen
    pub sub_type: FormField,
    pub active_field_index: usize,
}

impl BusTypeForm {
    pub fn new() -> Self {
        Self {
            bus_type: FormField::choice(
                "busType",
                "Select Bus Type",
                "Select bus type",
                BusType::LABELS,
                None,
                true,
            ),
            sub_type: FormField::choice(
                "busSubType",
                "Select Bus Sub-Type",
                "Select bus sub-type",
                BusSubType::LABELS,
                None,
                true,
            ),
            active_field_index: 0,
        }
    }

    /// Set the bus type. The sub-type always goes back to empty.
    pub fn set_bus_type(&mut self, bus_type: Option<BusType>) {
        self.bus_type.select(bus_type.map(|t| t.index()));
        self.sub_type.select(None);
    }

    pub fn set_bus_subtype(&mut self, sub_type: Option<BusSubType>) {
        self.sub_type.select(sub_type.map(|s| s.index()));
    }

    pub fn bus_type(&self) -> Option<BusType> {
        self.bus_type.selected().and_then(BusType::from_index)
    }

    pub fn bus_subtype(&self) -> Option<BusSubType> {
        self.sub_type.selected().and_then(BusSubType::from_index)
    }

    pub fn is_subtype_visible(&self) -> bool {
        self.bus_type().is_some()
    }
}

impl Default for BusTypeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for BusTypeForm {
    fn field_count(&self) -> usize {
        if self.is_subtype_visible() {
            2
        } else {
            1
        }
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count());
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.bus_type),
            1 if self.is_subtype_visible() => Some(&self.sub_type),
            _ => None,
        }
    }
    fn set_field_text(&mut self, _index: usize, _value: String) {}
    fn select_option(&mut self, index: usize, option: Option<usize>) {
        match index {
            0 => self.set_bus_type(option.and_then(BusType::from_index)),
            1 if self.is_subtype_visible() => {
                self.set_bus_subtype(option.and_then(BusSubType::from_index))
            }
            _ => {}
        }
    }
}
