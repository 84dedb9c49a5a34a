//! Seed data for the catalog.
//!
//! The built-in seed is the Mergington High School activity list. An alternate
//! seed can be read from a TOML file of `[[activity]]` tables:
//!
//! ```toml
//! [[activity]]
//! name = "Chess Club"
//! description = "Learn strategies and compete in chess tournaments"
//! schedule = "Fridays, 3:30 PM - 5:00 PM"
//! max_participants = 12
//! participants = ["michael@mergington.edu"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::activity::Activity;
use crate::error::{Error, Result};

/// A named activity as it appears in a seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedEntry {
    /// Catalog key.
    pub name: String,
    /// Initial record.
    pub activity: Activity,
}

impl SeedEntry {
    fn new(name: &str, activity: Activity) -> Self {
        Self {
            name: name.to_string(),
            activity,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    #[serde(default, rename = "activity")]
    activities: Vec<RawEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

/// The built-in Mergington High School catalog, in display order.
pub fn builtin() -> Vec<SeedEntry> {
    vec![
        SeedEntry::new(
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        SeedEntry::new(
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        SeedEntry::new(
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        SeedEntry::new(
            "Basketball Team",
            Activity::new(
                "Practice and compete in interscholastic basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(["james@mergington.edu"]),
        ),
        SeedEntry::new(
            "Soccer Club",
            Activity::new(
                "Train in soccer skills and play friendly matches",
                "Wednesdays, 3:30 PM - 5:30 PM",
                22,
            )
            .with_participants(["lucas@mergington.edu", "mia@mergington.edu"]),
        ),
        SeedEntry::new(
            "Art Studio",
            Activity::new(
                "Explore painting, drawing, and sculpture",
                "Mondays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        SeedEntry::new(
            "Drama Club",
            Activity::new(
                "Act, direct, and produce the school plays",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            )
            .with_participants(["ella@mergington.edu", "noah@mergington.edu"]),
        ),
        SeedEntry::new(
            "Math Olympiad",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
        SeedEntry::new(
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
            )
            .with_participants(["isabella@mergington.edu", "ethan@mergington.edu"]),
        ),
    ]
}

/// Parse a seed from TOML text.
pub fn from_toml_str(content: &str) -> Result<Vec<SeedEntry>> {
    let file: SeedFile = toml::from_str(content).map_err(|e| Error::seed(e.to_string()))?;
    Ok(file
        .activities
        .into_iter()
        .map(|raw| SeedEntry {
            name: raw.name,
            activity: Activity {
                description: raw.description,
                schedule: raw.schedule,
                max_participants: raw.max_participants,
                participants: raw.participants,
            },
        })
        .collect())
}

/// Read and parse a seed file.
pub fn from_path(path: &Path) -> Result<Vec<SeedEntry>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    from_toml_str(&content)
}
