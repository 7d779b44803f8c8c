use serde::Serialize;

use crate::storage::DocumentId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioLinks {
    pub github: String,
    pub linkedin: String,
}

/// Portfolio document as written to the `portfolios` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub skills: Vec<String>,
    pub links: PortfolioLinks,
    pub created_by: DocumentId, // owning user, inserted just before
}

#[cfg(test)]
mod portfolio_tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn serializes_links_and_owner() {
        let owner = Uuid::new_v4();
        let portfolio = Portfolio {
            title: "Atlas".into(),
            description: "Lorem ipsum dolor sit.".into(),
            images: vec!["a".into(), "b".into(), "c".into()],
            skills: vec!["Rust".into()],
            links: PortfolioLinks {
                github: "https://www.github.com/".into(),
                linkedin: "https://www.linkedin.com/".into(),
            },
            created_by: DocumentId::Uuid(owner),
        };

        let json = serde_json::to_value(&portfolio).unwrap();
        assert_eq!(json["createdBy"], owner.to_string());
        let links = json["links"].as_object().unwrap();
        let mut keys: Vec<&String> = links.keys().collect();
        keys.sort();
        assert_eq!(keys, ["github", "linkedin"]);
    }
}
