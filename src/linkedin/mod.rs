//! LinkedIn URL cleaning, handle extraction and URN parsing.

pub mod cleaner;
pub mod patterns;
pub mod urn;

pub use cleaner::{
    clean_linkedin_url, contact_profile_url, extract_linkedin_slug, extract_sales_nav_id_from_url,
    is_linkedin_url, match_linkedin_url, match_linkedin_url_by_id_or_handle,
    organization_profile_url, retain_matching_linkedin_url, try_clean_linkedin_url,
    url_profile_extract, LinkedinUrlGetter,
};
pub use urn::{
    entity_urn, extract_sales_profile_id_from_urn, sales_company_url_from_urn,
    sales_profile_url_from_urn, urn_extractor, Urn,
};
