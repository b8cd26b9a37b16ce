use super::select_texts;
use scraper::Html;

const PACKAGE_LINK_SELECTOR: &str = ".collaborated-packages a";

/// Extracts the names of the packages a user collaborates on from their profile page
///
/// Names come back in document order with duplicates preserved. Links
/// without text are skipped.
pub fn parse_user_page(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    select_texts(&document, PACKAGE_LINK_SELECTOR)
        .into_iter()
        .filter(|name| !name.is_empty())
        .collect()
}
