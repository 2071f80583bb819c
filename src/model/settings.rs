use serde::{Deserialize, Serialize};

/// Header data printed on every sheet and carried in backups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub teacher_name: String,
    pub institute_name: String,
    pub academic_year: String,
}

impl Settings {
    /// One-line header, skipping empty fields.
    pub fn header(&self) -> String {
        [&self.institute_name, &self.teacher_name, &self.academic_year]
            .into_iter()
            .filter(|field| !field.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" · ")
    }
}
