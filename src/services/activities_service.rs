use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::error::AppError;
use crate::models::Activity;
use crate::services::validation::is_valid_email;

pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
    pub spots_left: usize,
    pub is_full: bool,
}

pub struct BoardPageData {
    pub activities: Vec<ActivityCardView>,
    pub total_participants: usize,
}

pub fn list_activities(store: &ActivityStore) -> BTreeMap<String, Activity> {
    store.snapshot()
}

pub fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: Option<&str>,
) -> Result<String, AppError> {
    let email = require_email(email)?;

    match store.add_participant(activity_name, email) {
        Ok(count) => {
            info!(activity = %activity_name, participants = count, "signup accepted");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, reason = %e, "signup rejected");
            Err(e.into())
        }
    }
}

pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: Option<&str>,
) -> Result<String, AppError> {
    let email = require_email(email)?;

    match store.remove_participant(activity_name, email) {
        Ok(count) => {
            info!(activity = %activity_name, participants = count, "unregister accepted");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, reason = %e, "unregister rejected");
            Err(e.into())
        }
    }
}

pub fn build_board_page(store: &ActivityStore) -> BoardPageData {
    let activities: Vec<ActivityCardView> = store
        .snapshot()
        .into_iter()
        .map(|(name, activity)| build_card(name, activity))
        .collect();
    let total_participants = activities.iter().map(|a| a.participants.len()).sum();

    BoardPageData {
        activities,
        total_participants,
    }
}

fn build_card(name: String, activity: Activity) -> ActivityCardView {
    let spots_left = activity.spots_left();
    ActivityCardView {
        name,
        description: activity.description,
        schedule: activity.schedule,
        max_participants: activity.max_participants,
        participants: activity.participants,
        spots_left,
        is_full: spots_left == 0,
    }
}

/// Returns the email when present and well formed.
pub fn require_email(email: Option<&str>) -> Result<&str, AppError> {
    match email {
        Some(e) if is_valid_email(Some(e)) => Ok(e),
        _ => {
            warn!("rejected malformed email");
            Err(AppError::InvalidEmail)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::database::seed::default_activities;
    use crate::database::StoreError;

    fn store() -> ActivityStore {
        ActivityStore::new(default_activities())
    }

    #[test]
    fn signup_reports_message() {
        let store = store();
        let msg = signup(&store, "Chess Club", Some("user+tag@domain.com")).unwrap();
        assert_eq!(msg, "Signed up user+tag@domain.com for Chess Club");
        assert!(store
            .get("Chess Club")
            .unwrap()
            .is_signed_up("user+tag@domain.com"));
    }

    #[test]
    fn email_is_checked_before_activity() {
        let store = store();
        let err = signup(&store, "No Such Club", Some("user..name@domain.com")).unwrap_err();
        assert!(matches!(err, AppError::InvalidEmail));

        let err = unregister(&store, "No Such Club", None).unwrap_err();
        assert!(matches!(err, AppError::InvalidEmail));
    }

    #[test]
    fn unregister_reports_message() {
        let store = store();
        let msg = unregister(&store, "Soccer Team", Some("alex@mergington.edu")).unwrap();
        assert_eq!(msg, "Unregistered alex@mergington.edu from Soccer Team");

        let err = unregister(&store, "Soccer Team", Some("alex@mergington.edu")).unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::NotSignedUp)));
    }

    #[test]
    fn board_cards_follow_store() {
        let store = store();
        let page = build_board_page(&store);
        assert_eq!(page.activities.len(), 9);
        assert_eq!(page.total_participants, 18);

        let art = page.activities.iter().find(|a| a.name == "Art Club").unwrap();
        assert_eq!(art.spots_left, 16);
        assert!(!art.is_full);
        // Listing is ordered by name.
        assert_eq!(page.activities[0].name, "Art Club");
    }
}
