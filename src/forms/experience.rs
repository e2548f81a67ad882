use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Experience {
    #[validate(min_length = 1)]
    pub title: String,
    #[validate(min_length = 1)]
    pub company: String,
    pub from: DateTime<Utc>,
    pub location: Option<String>,
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl From<Experience> for models::Experience {
    fn from(form: Experience) -> Self {
        models::Experience {
            id: Uuid::new_v4(),
            title: form.title,
            company: form.company,
            location: form.location,
            from: form.from,
            to: form.to,
            current: form.current,
            description: form.description,
        }
    }
}
