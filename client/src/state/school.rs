#[cfg(test)]
#[path = "school_test.rs"]
mod school_test;

/// Display data for one school shown on the schools page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchoolInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub head_teacher: String,
}

impl SchoolInfo {
    /// Placeholder record rendered until the schools API is wired in.
    // TODO: replace with a fetch from /api/schools once that endpoint lands.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: "Riverside Primary School".to_owned(),
            address: "14 Bridge Street".to_owned(),
            phone: "+44 20 7946 0321".to_owned(),
            head_teacher: "A. Whitfield".to_owned(),
        }
    }
}
