//! Request bodies for the update endpoints
//!
//! Built from a form only when it passes the required-field check; the
//! builders return `None` otherwise.

use super::error::ApiError;
use super::traits::BackendClientTrait;
use crate::photo::SelectedPhoto;
use crate::state::{
    BusFareForm, BusNameForm, BusRouteForm, BusSubType, BusTimingForm, BusType, BusTypeForm,
    EditorForm, FareType, Form, PageKind,
};
use chrono::NaiveTime;
use serde::Serialize;

/// Multipart body of `/api/update-bus-details`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusDetailsUpdate {
    pub bus_name: String,
    pub bus_photo: SelectedPhoto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusRouteUpdate {
    pub departure_location: String,
    pub arrival_location: String,
    pub route_stops: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusFareUpdate {
    /// Sent exactly as typed once it passes the number check
    pub fare_amount: String,
    pub fare_type: FareType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusTimingUpdate {
    #[serde(with = "hh_mm")]
    pub departure_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub arrival_time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusTypeUpdate {
    pub bus_type: BusType,
    pub bus_sub_type: BusSubType,
}

mod hh_mm {
    use crate::state::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }
}

impl BusDetailsUpdate {
    pub fn from_form(form: &BusNameForm) -> Option<Self> {
        if form.first_problem().is_some() {
            return None;
        }
        Some(Self {
            bus_name: form.name.as_text().to_string(),
            bus_photo: form.photo.clone()?,
        })
    }
}

impl BusRouteUpdate {
    pub fn from_form(form: &BusRouteForm) -> Option<Self> {
        if form.first_problem().is_some() {
            return None;
        }
        Some(Self {
            departure_location: form.departure.as_text().to_string(),
            arrival_location: form.arrival.as_text().to_string(),
            route_stops: form.stop_values(),
        })
    }
}

impl BusFareUpdate {
    pub fn from_form(form: &BusFareForm) -> Option<Self> {
        if form.first_problem().is_some() {
            return None;
        }
        Some(Self {
            fare_amount: form.amount.as_text().to_string(),
            fare_type: form.fare_type(),
        })
    }
}

impl BusTimingUpdate {
    pub fn from_form(form: &BusTimingForm) -> Option<Self> {
        if form.first_problem().is_some() {
            return None;
        }
        Some(Self {
            departure_time: form.departure_time.as_time()?,
            arrival_time: form.arrival_time.as_time()?,
        })
    }
}

impl BusTypeUpdate {
    pub fn from_form(form: &BusTypeForm) -> Option<Self> {
        if form.first_problem().is_some() {
            return None;
        }
        Some(Self {
            bus_type: form.bus_type()?,
            bus_sub_type: form.bus_subtype()?,
        })
    }
}

/// One page's submission, ready to send
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateRequest {
    BusDetails(BusDetailsUpdate),
    BusRoute(BusRouteUpdate),
    BusFare(BusFareUpdate),
    BusTiming(BusTimingUpdate),
    BusType(BusTypeUpdate),
}

impl UpdateRequest {
    /// Snapshot the form's current values into a request body
    pub fn from_form(form: &EditorForm) -> Option<Self> {
        match form {
            EditorForm::BusName(f) => BusDetailsUpdate::from_form(f).map(Self::BusDetails),
            EditorForm::BusRoute(f) => BusRouteUpdate::from_form(f).map(Self::BusRoute),
            EditorForm::BusFare(f) => BusFareUpdate::from_form(f).map(Self::BusFare),
            EditorForm::BusTiming(f) => BusTimingUpdate::from_form(f).map(Self::BusTiming),
            EditorForm::BusType(f) => BusTypeUpdate::from_form(f).map(Self::BusType),
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            Self::BusDetails(_) => PageKind::BusName,
            Self::BusRoute(_) => PageKind::BusRoute,
            Self::BusFare(_) => PageKind::BusFare,
            Self::BusTiming(_) => PageKind::BusTiming,
            Self::BusType(_) => PageKind::BusType,
        }
    }

    /// Issue the single POST for this request. Returns the response body.
    pub async fn send(&self, client: &dyn BackendClientTrait) -> Result<String, ApiError> {
        match self {
            Self::BusDetails(update) => client.update_bus_details(update).await,
            Self::BusRoute(update) => client.update_bus_route(update).await,
            Self::BusFare(update) => client.update_bus_fare(update).await,
            Self::BusTiming(update) => client.update_bus_timing(update).await,
            Self::BusType(update) => client.update_bus_type(update).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBackendClientTrait;
    use serde_json::json;

    mod json_bodies {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_route_body_keeps_empty_stops() {
            let mut form = BusRouteForm::new();
            form.set_departure("Central".to_string());
            form.set_arrival("Harbour".to_string());
            form.set_stop(0, "Market".to_string());
            form.add_stop();
            let update = BusRouteUpdate::from_form(&form).unwrap();
            assert_eq!(
                serde_json::to_value(&update).unwrap(),
                json!({
                    "departureLocation": "Central",
                    "arrivalLocation": "Harbour",
                    "routeStops": ["Market", ""]
                })
            );
        }

        #[test]
        fn test_untouched_fare_type_is_economy() {
            let mut form = BusFareForm::new();
            form.set_amount("350".to_string());
            let update = BusFareUpdate::from_form(&form).unwrap();
            assert_eq!(
                serde_json::to_value(&update).unwrap(),
                json!({ "fareAmount": "350", "fareType": "Economy" })
            );
        }

        #[test]
        fn test_fractional_fare() {
            let mut form = BusFareForm::new();
            form.set_amount("19.5".to_string());
            form.set_fare_type(FareType::Business);
            let update = BusFareUpdate::from_form(&form).unwrap();
            assert_eq!(
                serde_json::to_value(&update).unwrap(),
                json!({ "fareAmount": "19.5", "fareType": "Business" })
            );
        }

        #[test]
        fn test_fare_amount_not_renormalised() {
            for typed in ["012", "1.50", "-0"] {
                let mut form = BusFareForm::new();
                form.set_amount(typed.to_string());
                let update = BusFareUpdate::from_form(&form).unwrap();
                assert_eq!(
                    serde_json::to_value(&update).unwrap()["fareAmount"],
                    json!(typed)
                );
            }
        }

        #[test]
        fn test_bad_amount_refused() {
            let mut form = BusFareForm::new();
            form.set_amount("1.2.3".to_string());
            assert!(BusFareUpdate::from_form(&form).is_none());
        }

        #[test]
        fn test_timing_body_uses_hh_mm() {
            let mut form = BusTimingForm::new();
            form.set_departure_time("23:15".to_string());
            form.set_arrival_time("05:40".to_string());
            let update = BusTimingUpdate::from_form(&form).unwrap();
            assert_eq!(
                serde_json::to_value(&update).unwrap(),
                json!({ "departureTime": "23:15", "arrivalTime": "05:40" })
            );
        }

        #[test]
        fn test_type_body() {
            let mut form = BusTypeForm::new();
            form.set_bus_type(Some(BusType::NonAc));
            form.set_bus_subtype(Some(BusSubType::Sleeper));
            let update = BusTypeUpdate::from_form(&form).unwrap();
            assert_eq!(
                serde_json::to_value(&update).unwrap(),
                json!({ "busType": "Non-AC", "busSubType": "Sleeper" })
            );
        }
    }

    mod incomplete_forms {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_details_need_photo() {
            let mut form = BusNameForm::new();
            form.set_name("Coastal".to_string());
            assert!(BusDetailsUpdate::from_form(&form).is_none());
        }

        #[test]
        fn test_type_needs_subtype() {
            let mut form = BusTypeForm::new();
            form.set_bus_type(Some(BusType::Ac));
            assert!(BusTypeUpdate::from_form(&form).is_none());
        }

        #[test]
        fn test_bad_time_refused() {
            let mut form = BusTimingForm::new();
            form.set_departure_time("7".to_string());
            form.set_arrival_time("08:00".to_string());
            assert!(BusTimingUpdate::from_form(&form).is_none());
        }

        #[test]
        fn test_request_kind_follows_form() {
            let mut form = BusFareForm::new();
            form.set_amount("10".to_string());
            let request = UpdateRequest::from_form(&EditorForm::BusFare(form)).unwrap();
            assert_eq!(request.kind(), PageKind::BusFare);
            assert!(UpdateRequest::from_form(&EditorForm::new(PageKind::BusRoute)).is_none());
        }
    }

    mod dispatch {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_send_routes_to_matching_endpoint() {
            let mut mock = MockBackendClientTrait::new();
            mock.expect_update_bus_timing()
                .times(1)
                .returning(|_| Ok("{}".to_string()));
            mock.expect_update_bus_fare().never();

            let mut form = BusTimingForm::new();
            form.set_departure_time("10:00".to_string());
            form.set_arrival_time("12:00".to_string());
            let request = UpdateRequest::from_form(&EditorForm::BusTiming(form)).unwrap();

            let body = request.send(&mock).await.unwrap();
            assert_eq!(body, "{}");
        }

        #[tokio::test]
        async fn test_send_passes_errors_through() {
            let mut mock = MockBackendClientTrait::new();
            mock.expect_update_bus_type().times(1).returning(|_| {
                Err(ApiError::Status {
                    status: 503,
                    body: "down".to_string(),
                })
            });

            let request = UpdateRequest::BusType(BusTypeUpdate {
                bus_type: BusType::Ac,
                bus_sub_type: BusSubType::Seater,
            });
            let err = request.send(&mock).await.unwrap_err();
            assert!(matches!(err, ApiError::Status { status: 503, .. }));
        }
    }
}
