use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::portfolios::catalog::{is_known_skill, MAX_SKILLS, MIN_SKILLS, PLACEHOLDER_IMAGES};
use crate::portfolios::repo_types::Portfolio;
use crate::users::repo_types::{User, DEFAULT_ROLE, MAX_AGE, MIN_AGE};

/// A generated record broke the data contract of its collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("invalid email {0:?}")]
    InvalidEmail(String),
    #[error("age {0} outside 18..=65")]
    AgeOutOfRange(u8),
    #[error("role must be \"user\", got {0:?}")]
    UnexpectedRole(String),
    #[error("seeded users must not have MFA configured")]
    MfaConfigured,
    #[error("title {0:?} must start with an upper-case letter")]
    TitleNotCapitalized(String),
    #[error("description {0:?} is not a sentence")]
    NotASentence(String),
    #[error("expected 3 images, got {0}")]
    ImageCount(usize),
    #[error("skill count {0} outside 3..=7")]
    SkillCount(usize),
    #[error("duplicate skill {0:?}")]
    DuplicateSkill(String),
    #[error("skill {0:?} is not in the catalog")]
    UnknownSkill(String),
    #[error("invalid {0} url {1:?}")]
    InvalidUrl(&'static str, String),
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn is_valid_url(url: &str) -> bool {
    lazy_static! {
        static ref URL_RE: Regex = Regex::new(r"^https?://[^\s/?#]+\.[^\s/?#]+(/\S*)?$").unwrap();
    }
    URL_RE.is_match(url)
}

pub fn validate_user(user: &User) -> Result<(), ValidationError> {
    for (field, value) in [
        ("username", &user.username),
        ("password", &user.password),
        ("firstName", &user.first_name),
        ("lastName", &user.last_name),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::Empty(field));
        }
    }
    if !is_valid_email(&user.email) {
        return Err(ValidationError::InvalidEmail(user.email.clone()));
    }
    if !(MIN_AGE..=MAX_AGE).contains(&user.age) {
        return Err(ValidationError::AgeOutOfRange(user.age));
    }
    if user.role != DEFAULT_ROLE {
        return Err(ValidationError::UnexpectedRole(user.role.clone()));
    }
    if user.is_mfa_enabled || user.mfa_secret.is_some() || user.otp_url.is_some() {
        return Err(ValidationError::MfaConfigured);
    }
    Ok(())
}

pub fn validate_portfolio(portfolio: &Portfolio) -> Result<(), ValidationError> {
    match portfolio.title.chars().next() {
        None => return Err(ValidationError::Empty("title")),
        Some(c) if !c.is_uppercase() => {
            return Err(ValidationError::TitleNotCapitalized(portfolio.title.clone()))
        }
        Some(_) => {}
    }

    let description = portfolio.description.trim();
    if description.is_empty() {
        return Err(ValidationError::Empty("description"));
    }
    // exactly one terminal full stop
    if !description.ends_with('.') || description[..description.len() - 1].contains('.') {
        return Err(ValidationError::NotASentence(portfolio.description.clone()));
    }

    if portfolio.images.len() != PLACEHOLDER_IMAGES.len() {
        return Err(ValidationError::ImageCount(portfolio.images.len()));
    }

    let count = portfolio.skills.len();
    if !(MIN_SKILLS..=MAX_SKILLS).contains(&count) {
        return Err(ValidationError::SkillCount(count));
    }
    let mut seen = HashSet::with_capacity(count);
    for skill in &portfolio.skills {
        if !is_known_skill(skill) {
            return Err(ValidationError::UnknownSkill(skill.clone()));
        }
        if !seen.insert(skill.as_str()) {
            return Err(ValidationError::DuplicateSkill(skill.clone()));
        }
    }

    for (name, url) in [
        ("github", &portfolio.links.github),
        ("linkedin", &portfolio.links.linkedin),
    ] {
        if !is_valid_url(url) {
            return Err(ValidationError::InvalidUrl(name, url.clone()));
        }
    }
    Ok(())
}
