use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::Activity;
use crate::services::validation::is_valid_email;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Activity {activity} seeds {count} participants but allows {max}")]
    OverCapacity {
        activity: String,
        count: usize,
        max: usize,
    },

    #[error("Activity {activity} seeds invalid email {email}")]
    InvalidEmail { activity: String, email: String },
}

/// The catalogue the school starts every term with.
pub fn default_activities() -> BTreeMap<String, Activity> {
    let seeds = [
        (
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in local tournaments",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                25,
            )
            .with_participants(&["alex@mergington.edu", "sarah@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice basketball skills and participate in inter-school games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(&["james@mergington.edu", "lisa@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore various art mediums including painting, drawing, and sculpture",
                "Thursdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(&["emily@mergington.edu", "david@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Perform in school plays and develop acting and stage skills",
                "Mondays and Fridays, 3:30 PM - 5:00 PM",
                20,
            )
            .with_participants(&["anna@mergington.edu", "robert@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills through competitive debates",
                "Wednesdays, 3:30 PM - 5:00 PM",
                16,
            )
            .with_participants(&["william@mergington.edu", "elizabeth@mergington.edu"]),
        ),
        (
            "Science Olympiad",
            Activity::new(
                "Compete in science and engineering challenges at regional competitions",
                "Tuesdays, 3:30 PM - 5:00 PM",
                24,
            )
            .with_participants(&["benjamin@mergington.edu", "charlotte@mergington.edu"]),
        ),
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
    ];

    seeds
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

/// Loads activities from a JSON object of `name -> activity`.
pub fn load_seed_file(path: &Path) -> Result<BTreeMap<String, Activity>, SeedError> {
    let shown = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: shown.clone(),
        source,
    })?;
    let activities: BTreeMap<String, Activity> =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: shown.clone(),
            source,
        })?;

    check_seed(&activities)?;
    info!("Loaded {} activities from {}", activities.len(), shown);
    Ok(activities)
}

fn check_seed(activities: &BTreeMap<String, Activity>) -> Result<(), SeedError> {
    for (name, activity) in activities {
        if activity.participants.len() > activity.max_participants {
            return Err(SeedError::OverCapacity {
                activity: name.clone(),
                count: activity.participants.len(),
                max: activity.max_participants,
            });
        }
        if let Some(bad) = activity
            .participants
            .iter()
            .find(|p| !is_valid_email(Some(p.as_str())))
        {
            return Err(SeedError::InvalidEmail {
                activity: name.clone(),
                email: bad.clone(),
            });
        }
    }
    Ok(())
}
