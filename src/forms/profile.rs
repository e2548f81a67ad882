use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use sqlx::types::Json;

/// Create-or-update payload for a profile. Status and skills are mandatory;
/// everything else is merged over the stored profile only when supplied.
/// Skills arrive as a single comma-separated string.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(min_length = 1)]
    pub status: String,
    #[validate(min_length = 1)]
    pub skills: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl Profile {
    pub fn skills_list(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(String::from)
            .collect()
    }

    fn social(&self) -> models::Social {
        models::Social {
            youtube: self.youtube.clone(),
            twitter: self.twitter.clone(),
            facebook: self.facebook.clone(),
            linkedin: self.linkedin.clone(),
            instagram: self.instagram.clone(),
        }
    }

    /// Merges the submitted fields over `profile`. Mandatory fields and the
    /// social block always replace the stored values; optional fields are
    /// left untouched when absent from the payload.
    pub fn apply_to(self, profile: &mut models::Profile) {
        profile.skills = self.skills_list();
        profile.social = Json(self.social());
        profile.status = self.status;

        if let Some(company) = self.company {
            profile.company = Some(company);
        }
        if let Some(website) = self.website {
            profile.website = Some(website);
        }
        if let Some(location) = self.location {
            profile.location = Some(location);
        }
        if let Some(bio) = self.bio {
            profile.bio = Some(bio);
        }
        if let Some(githubusername) = self.githubusername {
            profile.githubusername = Some(githubusername);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_are_split_and_trimmed() {
        let form = Profile {
            skills: " rust, actix ,, sql ".to_string(),
            ..Profile::default()
        };

        assert_eq!(form.skills_list(), vec!["rust", "actix", "sql"]);
    }

    #[test]
    fn absent_optional_fields_do_not_clobber_stored_values() {
        let mut profile = models::Profile::new("u1".to_string());
        profile.company = Some("ACME".to_string());
        profile.bio = Some("hello".to_string());

        let form = Profile {
            status: "Developer".to_string(),
            skills: "rust".to_string(),
            location: Some("Berlin".to_string()),
            ..Profile::default()
        };
        form.apply_to(&mut profile);

        assert_eq!(profile.status, "Developer");
        assert_eq!(profile.skills, vec!["rust"]);
        assert_eq!(profile.company.as_deref(), Some("ACME"));
        assert_eq!(profile.bio.as_deref(), Some("hello"));
        assert_eq!(profile.location.as_deref(), Some("Berlin"));
    }

    #[test]
    fn empty_status_fails_validation() {
        let form = Profile {
            status: String::new(),
            skills: "rust".to_string(),
            ..Profile::default()
        };

        assert!(form.validate().is_err());
    }
}
