//! Query builder for the disclosure list endpoint.

use chrono::NaiveDate;
use url::Url;

/// Query parameters for `list.json`.
///
/// OpenDART expects dates as `YYYYMMDD` and pages results 1-indexed with
/// at most 100 entries per page.
#[derive(Debug, Default, Clone)]
pub struct DisclosureQuery {
    pub corp_code: Option<String>,
    pub begin_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page_no: Option<i64>,
    pub page_count: Option<i64>,
}

impl DisclosureQuery {
    /// Restricts results to one registrant.
    pub fn with_corp_code(mut self, corp_code: &str) -> Self {
        self.corp_code = Some(corp_code.to_string());
        self
    }

    /// Sets the receipt-date search window (inclusive).
    pub fn with_date_range(mut self, begin: NaiveDate, end: NaiveDate) -> Self {
        self.begin_date = Some(begin);
        self.end_date = Some(end);
        self
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page_no: i64) -> Self {
        self.page_no = Some(page_no);
        self
    }

    /// Sets the number of results per page (1-100).
    pub fn with_page_count(mut self, page_count: i64) -> Self {
        self.page_count = Some(page_count);
        self
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(corp_code) = &self.corp_code {
            url.query_pairs_mut()
                .append_pair("corp_code", corp_code.as_str());
        }
        if let Some(begin) = self.begin_date {
            url.query_pairs_mut()
                .append_pair("bgn_de", begin.format("%Y%m%d").to_string().as_str());
        }
        if let Some(end) = self.end_date {
            url.query_pairs_mut()
                .append_pair("end_de", end.format("%Y%m%d").to_string().as_str());
        }
        if let Some(page_no) = self.page_no {
            url.query_pairs_mut()
                .append_pair("page_no", page_no.to_string().as_str());
        }
        if let Some(page_count) = self.page_count {
            url.query_pairs_mut()
                .append_pair("page_count", page_count.to_string().as_str());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_adds_nothing() {
        let url = Url::parse("https://example.com/api/list.json").unwrap();
        let out = DisclosureQuery::default().add_to_url(&url);
        assert_eq!(out.query(), None);
    }

    #[test]
    fn full_query_serializes_all_parameters() {
        let url = Url::parse("https://example.com/api/list.json").unwrap();
        let query = DisclosureQuery::default()
            .with_corp_code("00126380")
            .with_date_range(
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            )
            .with_page(2)
            .with_page_count(50);
        let out = query.add_to_url(&url);
        let query_string = out.query().unwrap();
        assert!(query_string.contains("corp_code=00126380"));
        assert!(query_string.contains("bgn_de=20230101"));
        assert!(query_string.contains("end_de=20231231"));
        assert!(query_string.contains("page_no=2"));
        assert!(query_string.contains("page_count=50"));
    }
}
