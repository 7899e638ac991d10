use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating slug path parameters (categories, articles)
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "otc-pain-relievers", "eye-drops", "foil-seal2"
    /// - Invalid: "-otc", "otc-", "otc--pain", "OTC", "otc_pain"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}
