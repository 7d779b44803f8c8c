use rand::seq::SliceRandom;
use rand::Rng;

use super::repo_types::{Gender, User, DEFAULT_ROLE, MAX_AGE, MIN_AGE, PLACEHOLDER_PASSWORD};
use crate::fake_data::FakeData;

/// Build a fresh user with randomized identity fields and fixed account flags.
pub fn generate_user(fake: &mut FakeData) -> User {
    let username = fake.username();
    let email = fake.email();
    let first_name = fake.first_name();
    let last_name = fake.last_name();
    let age = fake.rng().gen_range(MIN_AGE..=MAX_AGE);
    let gender = *Gender::ALL.choose(fake.rng()).unwrap_or(&Gender::Other);

    User {
        username,
        password: PLACEHOLDER_PASSWORD.to_string(),
        email,
        first_name,
        last_name,
        age,
        gender,
        role: DEFAULT_ROLE.to_string(),
        is_mfa_enabled: false,
        mfa_secret: None,
        otp_url: None,
    }
}
