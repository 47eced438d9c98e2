//! Editor pages: one mounted form plus its submission status

use super::forms::{EditorForm, FieldProblem};
use super::submission::SubmitStatus;

/// The five editor pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    BusName,
    BusRoute,
    BusFare,
    BusTiming,
    BusType,
}

impl PageKind {
    pub const ALL: [PageKind; 5] = [
        Self::BusName,
        Self::BusRoute,
        Self::BusFare,
        Self::BusTiming,
        Self::BusType,
    ];

    /// Label used on the "Updating..." button while a request is in flight
    pub const IN_PROGRESS_LABEL: &'static str = "Updating...";

    /// Short name used in navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::BusName => "Bus Name",
            Self::BusRoute => "Bus Route",
            Self::BusFare => "Bus Fare",
            Self::BusTiming => "Bus Timing",
            Self::BusType => "Bus Type",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BusName => "Edit Bus Details",
            Self::BusRoute => "Edit Bus Route",
            Self::BusFare => "Edit Bus Fare",
            Self::BusTiming => "Edit Bus Timing",
            Self::BusType => "Edit Bus Type",
        }
    }

    /// Backend path this page posts to
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::BusName => "/api/update-bus-details",
            Self::BusRoute => "/api/update-bus-route",
            Self::BusFare => "/api/update-bus-fare",
            Self::BusTiming => "/api/update-bus-timing",
            Self::BusType => "/api/update-bus-type",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::BusName => "Update Bus Details",
            Self::BusRoute => "Update Bus Route",
            Self::BusFare => "Update Bus Fare",
            Self::BusTiming => "Update Bus Timing",
            Self::BusType => "Update Bus Type",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::BusName => "Bus details successfully updated!",
            Self::BusRoute => "Bus route successfully updated!",
            Self::BusFare => "Bus fare successfully updated!",
            Self::BusTiming => "Bus timing successfully updated!",
            Self::BusType => "Bus type successfully updated!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::BusName => "Failed to update bus details. Please try again.",
            Self::BusRoute => "Failed to update bus route. Please try again.",
            Self::BusFare => "Failed to update bus fare. Please try again.",
            Self::BusTiming => "Failed to update bus timing. Please try again.",
            Self::BusType => "Failed to update bus type. Please try again.",
        }
    }
}

/// A mounted editor page
///
/// Created fresh on every mount and dropped on navigation away. `mount_id`
/// tells outcomes of this instance apart from those of earlier mounts.
#[derive(Debug, Clone)]
pub struct EditorPage {
    pub mount_id: u64,
    pub form: EditorForm,
    pub status: SubmitStatus,
}

impl EditorPage {
    pub fn mount(kind: PageKind, mount_id: u64) -> Self {
        Self {
            mount_id,
            form: EditorForm::new(kind),
            status: SubmitStatus::Idle,
        }
    }

    pub fn kind(&self) -> PageKind {
        self.form.kind()
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.status.error_message()
    }

    /// Label of the submit button in its current state
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            PageKind::IN_PROGRESS_LABEL
        } else {
            self.kind().submit_label()
        }
    }

    /// Required-field check. On a problem, focus jumps to the offending control.
    pub fn validate(&mut self) -> Result<(), FieldProblem> {
        match self.form.as_form().first_problem() {
            Some((index, problem)) => {
                self.form.as_form_mut().set_active_field(index);
                Err(problem)
            }
            None => Ok(()),
        }
    }

    /// Start a submission. False if one is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        self.status.begin()
    }

    /// Settle the in-flight submission with the page's fixed messages
    pub fn finish_submit(&mut self, succeeded: bool) {
        let failure = (!succeeded).then(|| self.kind().failure_message());
        self.status.finish(failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::BusType;

    mod page_kind {
        use super::*;
        use std::collections::HashSet;

        #[test]
        fn test_endpoints() {
            assert_eq!(PageKind::BusName.endpoint(), "/api/update-bus-details");
            assert_eq!(PageKind::BusRoute.endpoint(), "/api/update-bus-route");
            assert_eq!(PageKind::BusFare.endpoint(), "/api/update-bus-fare");
            assert_eq!(PageKind::BusTiming.endpoint(), "/api/update-bus-timing");
            assert_eq!(PageKind::BusType.endpoint(), "/api/update-bus-type");
        }

        #[test]
        fn test_messages_are_page_specific() {
            let failures: HashSet<_> = PageKind::ALL.iter().map(|k| k.failure_message()).collect();
            let successes: HashSet<_> = PageKind::ALL.iter().map(|k| k.success_message()).collect();
            assert_eq!(failures.len(), 5);
            assert_eq!(successes.len(), 5);
            assert_eq!(
                PageKind::BusTiming.success_message(),
                "Bus timing successfully updated!"
            );
        }
    }

    mod editor_page {
        use super::*;

        #[test]
        fn test_mount_is_idle_and_fresh() {
            let page = EditorPage::mount(PageKind::BusFare, 7);
            assert_eq!(page.mount_id, 7);
            assert_eq!(page.kind(), PageKind::BusFare);
            assert_eq!(page.status, SubmitStatus::Idle);
            assert_eq!(page.submit_label(), "Update Bus Fare");
        }

        #[test]
        fn test_label_changes_while_submitting() {
            let mut page = EditorPage::mount(PageKind::BusRoute, 1);
            assert!(page.begin_submit());
            assert!(page.is_submitting());
            assert_eq!(page.submit_label(), "Updating...");
            page.finish_submit(true);
            assert_eq!(page.submit_label(), "Update Bus Route");
        }

        #[test]
        fn test_failure_sets_fixed_message() {
            let mut page = EditorPage::mount(PageKind::BusType, 1);
            page.begin_submit();
            page.finish_submit(false);
            assert!(!page.is_submitting());
            assert_eq!(
                page.error_message(),
                Some("Failed to update bus type. Please try again.")
            );
        }

        #[test]
        fn test_validate_focuses_first_problem() {
            let mut page = EditorPage::mount(PageKind::BusType, 1);
            if let EditorForm::BusType(form) = &mut page.form {
                form.set_bus_type(Some(BusType::Ac));
            }
            page.form.as_form_mut().set_active_field(0);
            assert_eq!(page.validate(), Err(FieldProblem::Unselected));
            assert_eq!(page.form.as_form().active_field(), 1);
        }

        #[test]
        fn test_validate_does_not_touch_status() {
            let mut page = EditorPage::mount(PageKind::BusTiming, 1);
            page.status = SubmitStatus::Failed("old".to_string());
            assert!(page.validate().is_err());
            assert_eq!(page.error_message(), Some("old"));
        }
    }
}
