use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Education {
    #[validate(min_length = 1)]
    pub school: String,
    #[validate(min_length = 1)]
    pub degree: String,
    #[validate(min_length = 1)]
    pub fieldofstudy: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl From<Education> for models::Education {
    fn from(form: Education) -> Self {
        models::Education {
            id: Uuid::new_v4(),
            school: form.school,
            degree: form.degree,
            fieldofstudy: form.fieldofstudy,
            from: form.from,
            to: form.to,
            current: form.current,
            description: form.description,
        }
    }
}
