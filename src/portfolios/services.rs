use rand::seq::index;
use rand::Rng;

use super::catalog::{MAX_SKILLS, MIN_SKILLS, PLACEHOLDER_IMAGES, WEB_SKILLS};
use super::repo_types::{Portfolio, PortfolioLinks};
use crate::fake_data::FakeData;
use crate::storage::DocumentId;

/// Build a portfolio owned by `created_by`.
pub fn generate_portfolio(fake: &mut FakeData, created_by: DocumentId) -> Portfolio {
    let title = fake.capitalized_word();
    let description = fake.sentence();
    let skills = sample_skills(fake);
    let links = PortfolioLinks {
        github: fake.url(),
        linkedin: fake.url(),
    };

    Portfolio {
        title,
        description,
        images: PLACEHOLDER_IMAGES.iter().map(|s| s.to_string()).collect(),
        skills,
        links,
        created_by,
    }
}

/// Draw between `MIN_SKILLS` and `MAX_SKILLS` distinct catalog entries, in random order.
pub fn sample_skills(fake: &mut FakeData) -> Vec<String> {
    let rng = fake.rng();
    let amount = rng.gen_range(MIN_SKILLS..=MAX_SKILLS);
    index::sample(rng, WEB_SKILLS.len(), amount)
        .into_iter()
        .map(|i| WEB_SKILLS[i].to_string())
        .collect()
}

#[cfg(test)]
mod generate_portfolio_tests {
    use super::*;
    use crate::portfolios::catalog::is_known_skill;
    use crate::validation::validate_portfolio;
    use mongodb::bson::oid::ObjectId;
    use std::collections::HashSet;

    #[test]
    fn skills_are_distinct_catalog_entries() {
        let mut fake = FakeData::seeded(5);
        for _ in 0..500 {
            let skills = sample_skills(&mut fake);
            assert!((3..=7).contains(&skills.len()));
            let unique: HashSet<&String> = skills.iter().collect();
            assert_eq!(unique.len(), skills.len(), "duplicates in {skills:?}");
            assert!(skills.iter().all(|s| is_known_skill(s)));
        }
    }

    #[test]
    fn skill_count_reaches_both_bounds() {
        let mut fake = FakeData::seeded(6);
        let sizes: HashSet<usize> = (0..500).map(|_| sample_skills(&mut fake).len()).collect();
        assert_eq!(sizes, (3..=7).collect::<HashSet<usize>>());
    }

    #[test]
    fn portfolio_references_given_owner() {
        let owner = DocumentId::Object(ObjectId::new());
        let mut fake = FakeData::seeded(8);
        let portfolio = generate_portfolio(&mut fake, owner);

        assert_eq!(portfolio.created_by, owner);
        assert_eq!(portfolio.images, PLACEHOLDER_IMAGES);
        assert!(portfolio.title.chars().next().unwrap().is_uppercase());
        validate_portfolio(&portfolio).expect("generated portfolio must validate");
    }
}
