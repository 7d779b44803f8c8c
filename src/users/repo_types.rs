use serde::Serialize;

/// Password stored on every seeded account.
pub const PLACEHOLDER_PASSWORD: &str = "password123";
pub const DEFAULT_ROLE: &str = "user";
pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
}

/// User document as written to the `users` collection.
/// The id is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub gender: Gender,
    pub role: String,
    #[serde(rename = "isMFAEnabled")]
    pub is_mfa_enabled: bool,
    #[serde(rename = "MFASecret")]
    pub mfa_secret: Option<String>,
    #[serde(rename = "OTPUrl")]
    pub otp_url: Option<String>,
}

#[cfg(test)]
mod user_tests {
    use super::*;

    #[test]
    fn serializes_with_backend_field_names() {
        let user = User {
            username: "jdoe".into(),
            password: PLACEHOLDER_PASSWORD.into(),
            email: "jdoe@example.com".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            age: 30,
            gender: Gender::Other,
            role: DEFAULT_ROLE.into(),
            is_mfa_enabled: false,
            mfa_secret: None,
            otp_url: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["gender"], "other");
        assert_eq!(json["isMFAEnabled"], false);
        assert!(json["MFASecret"].is_null());
        assert!(json["OTPUrl"].is_null());
        assert!(json.get("id").is_none());
    }
}
