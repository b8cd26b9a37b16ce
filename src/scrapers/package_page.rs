use super::select_texts;
use scraper::Html;
use serde::{Deserialize, Serialize};

/// Placeholder for a statistic that could not be scraped
pub const UNKNOWN: &str = "unknown";

const DAILY_SELECTOR: &str = ".daily-downloads";
const WEEKLY_SELECTOR: &str = ".weekly-downloads";
const MONTHLY_SELECTOR: &str = ".monthly-downloads";

/// Download counts scraped from a package page
///
/// Values are kept exactly as displayed on the page (e.g. `"1,234"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageStats {
    /// Downloads in the last day
    pub daily_downloads: String,
    /// Downloads in the last week
    pub weekly_downloads: String,
    /// Downloads in the last month
    pub monthly_downloads: String,
}

impl Default for PackageStats {
    fn default() -> Self {
        Self {
            daily_downloads: UNKNOWN.to_string(),
            weekly_downloads: UNKNOWN.to_string(),
            monthly_downloads: UNKNOWN.to_string(),
        }
    }
}

/// Extracts the daily, weekly and monthly download counts from a package page
///
/// Never fails: any field whose element is missing or empty is reported as
/// [`UNKNOWN`].
pub fn parse_package_page(html: &str) -> PackageStats {
    let document = Html::parse_document(html);

    PackageStats {
        daily_downloads: text_or_unknown(&document, DAILY_SELECTOR),
        weekly_downloads: text_or_unknown(&document, WEEKLY_SELECTOR),
        monthly_downloads: text_or_unknown(&document, MONTHLY_SELECTOR),
    }
}

fn text_or_unknown(document: &Html, selector: &str) -> String {
    let text = select_texts(document, selector).concat();
    if text.is_empty() {
        UNKNOWN.to_string()
    } else {
        text
    }
}
