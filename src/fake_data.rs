//! Seedable source of fake values.
//!
//! Every random decision the seeder makes goes through [`FakeData`], so a run
//! started from the same seed produces the same records.

use fake::faker::internet::en::{DomainSuffix, SafeEmail, Username};
use fake::faker::lorem::en::{Word, Words};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct FakeData {
    rng: StdRng,
}

impl FakeData {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Raw access for range and sampling draws.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn username(&mut self) -> String {
        Username().fake_with_rng(&mut self.rng)
    }

    pub fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    pub fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    pub fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    pub fn word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }

    pub fn capitalized_word(&mut self) -> String {
        capitalize(&self.word())
    }

    /// 4 to 9 lorem words, capitalised and closed with a full stop.
    pub fn sentence(&mut self) -> String {
        let words: Vec<String> = Words(4..10).fake_with_rng(&mut self.rng);
        format!("{}.", capitalize(&words.join(" ")))
    }

    pub fn url(&mut self) -> String {
        let scheme = if self.rng.gen_bool(0.5) { "https" } else { "http" };
        let host = self.word().to_lowercase();
        let suffix: String = DomainSuffix().fake_with_rng(&mut self.rng);
        format!("{scheme}://www.{host}.{suffix}/")
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod fake_data_tests {
    use super::*;

    #[test]
    fn capitalize_handles_edges() {
        assert_eq!(capitalize("rust"), "Rust");
        assert_eq!(capitalize("Rust"), "Rust");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn same_seed_same_values() {
        let mut a = FakeData::seeded(7);
        let mut b = FakeData::seeded(7);
        assert_eq!(a.username(), b.username());
        assert_eq!(a.email(), b.email());
        assert_eq!(a.sentence(), b.sentence());
        assert_eq!(a.url(), b.url());
    }

    #[test]
    fn sentence_shape() {
        let mut fake = FakeData::seeded(1);
        for _ in 0..50 {
            let s = fake.sentence();
            assert!(s.ends_with('.'));
            assert!(s.chars().next().unwrap().is_uppercase());
            let words = s.trim_end_matches('.').split_whitespace().count();
            assert!((4..=9).contains(&words), "{s:?} has {words} words");
        }
    }

    #[test]
    fn url_shape() {
        let mut fake = FakeData::seeded(2);
        for _ in 0..50 {
            let url = fake.url();
            assert!(url.starts_with("http://www.") || url.starts_with("https://www."));
            assert!(url.ends_with('/'));
            assert!(!url.contains(' '));
        }
    }
}
