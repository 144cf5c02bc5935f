//! Country reference catalog

use serde::{Deserialize, Serialize};
use streamify_core::types::CountryId;

/// A country with a naturalization requirements summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Stable identifier (lowercase country slug)
    pub id: CountryId,

    /// Country name
    pub name: String,

    /// Flag emoji
    pub flag: String,

    /// Condensed naturalization requirements
    pub requirements: String,
}

impl Country {
    fn new(slug: &str, name: &str, flag: &str, requirements: &str) -> Self {
        Self {
            id: CountryId::new(slug),
            name: name.to_string(),
            flag: flag.to_string(),
            requirements: requirements.to_string(),
        }
    }
}

/// The built-in country catalog, sorted by name
pub fn catalog() -> Vec<Country> {
    let mut countries = vec![
        Country::new(
            "portugal",
            "Portugal",
            "\u{1F1F5}\u{1F1F9}",
            "5 years of legal residency. Portuguese at A2 level, basic civic \
             knowledge, proof of financial means. Golden Visa from EUR 500,000 \
             in real estate.",
        ),
        Country::new(
            "spain",
            "Spain",
            "\u{1F1EA}\u{1F1F8}",
            "10 years of legal residency (5 for refugees, 2 for Ibero-American \
             nationals). Spanish at A2 level, CCSE civic test, proof of \
             financial means. Golden Visa from EUR 500,000 in real estate.",
        ),
        Country::new(
            "greece",
            "Greece",
            "\u{1F1EC}\u{1F1F7}",
            "7 years of legal residency. Greek at A2 level, basic civic \
             knowledge, proof of financial means. Golden Visa from EUR 250,000 \
             in real estate.",
        ),
        Country::new(
            "switzerland",
            "Switzerland",
            "\u{1F1E8}\u{1F1ED}",
            "10 years of residency (5 for spouses via simplified \
             naturalization). One national language at B1 spoken / A2 written, \
             civic knowledge, no reliance on social welfare.",
        ),
        Country::new(
            "sweden",
            "Sweden",
            "\u{1F1F8}\u{1F1EA}",
            "5 years of legal residency. Adequate Swedish, basic civic \
             knowledge, proof of financial means.",
        ),
        Country::new(
            "ireland",
            "Ireland",
            "\u{1F1EE}\u{1F1EA}",
            "5 years of legal residency (3 for spouses of Irish citizens). \
             English or Irish proficiency, basic civic knowledge, proof of \
             financial means.",
        ),
        Country::new(
            "norway",
            "Norway",
            "\u{1F1F3}\u{1F1F4}",
            "7 years of legal residency. Norwegian at B1 level, basic civic \
             knowledge, proof of financial means.",
        ),
    ];
    countries.sort_by(|a, b| a.name.cmp(&b.name));
    countries
}
