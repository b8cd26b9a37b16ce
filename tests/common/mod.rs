#![allow(dead_code)]

use mockito::{Mock, ServerGuard};
use std::path::PathBuf;
use tempfile::TempDir;

pub mod test_helpers {
    use super::*;

    pub fn setup_test_logger() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    /// Temporary directory holding the stored query for one test
    pub struct TestContext {
        pub temp_dir: TempDir,
        pub query_file: PathBuf,
    }

    impl TestContext {
        pub fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let query_file = temp_dir.path().join("stored-query.json");
            Self { temp_dir, query_file }
        }
    }

    pub fn user_page(packages: &[&str]) -> String {
        let links: String = packages
            .iter()
            .map(|name| format!("<li><a href=\"/package/{0}\">{0}</a></li>", name))
            .collect();
        format!(
            "<html><body><h2>Packages</h2><ul class=\"collaborated-packages\">{}</ul></body></html>",
            links
        )
    }

    pub fn package_page(daily: &str, weekly: &str, monthly: &str) -> String {
        format!(
            r#"<html><body><ul class="box">
                <li><strong class="daily-downloads">{}</strong> downloads in the last day</li>
                <li><strong class="weekly-downloads">{}</strong> downloads in the last week</li>
                <li><strong class="monthly-downloads">{}</strong> downloads in the last month</li>
            </ul></body></html>"#,
            daily, weekly, monthly
        )
    }

    pub async fn mock_page_async(server: &mut ServerGuard, path: &str, body: String) -> Mock {
        server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(body)
            .create_async()
            .await
    }
}
