use scraper::{Html, Selector};

/// Package page scraping (download counts)
pub mod package_page;
/// User page scraping (collaborated packages)
pub mod user_page;

pub use package_page::{parse_package_page, PackageStats, UNKNOWN};
pub use user_page::parse_user_page;

/// Collects the trimmed text of every element matching `selector`, in document order
///
/// An invalid selector matches nothing.
pub(crate) fn select_texts(document: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}
