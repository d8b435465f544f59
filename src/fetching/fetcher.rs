//! Subset retrieval over the dataset-server rows API.
use log::{debug, info};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::Error;
use crate::pipelines::conllu::types::Document;

const BASE_URL: &str = "https://datasets-server.huggingface.co/rows";
const ORGANIZATION: &str = "common-pile";
const SPLIT: &str = "train";

/// Maximum page size accepted by the rows endpoint.
const PAGE_SIZE: usize = 100;

#[derive(Debug, Deserialize)]
struct RowsPage {
    rows: Vec<RowEntry>,
    num_rows_total: usize,
}

#[derive(Debug, Deserialize)]
struct RowEntry {
    row: Document,
}

/// Holds the subset coordinates and the http client that
/// will page through its rows.
pub struct Fetcher {
    subset: String,
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new(subset: &str) -> Self {
        Self {
            subset: subset.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn dataset(&self) -> String {
        format!("{}/{}", ORGANIZATION, self.subset)
    }

    fn get_page(&self, offset: usize) -> Result<RowsPage, Error> {
        let dataset = self.dataset();
        let offset = offset.to_string();
        let length = PAGE_SIZE.to_string();
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("dataset", dataset.as_str()),
                ("config", "default"),
                ("split", SPLIT),
                ("offset", offset.as_str()),
                ("length", length.as_str()),
            ])
            .send()?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(Error::SubsetNotFound(self.dataset()));
        }
        if !resp.status().is_success() {
            return Err(Error::Custom(format!(
                "rows request for {} failed with status {}",
                self.dataset(),
                resp.status()
            )));
        }

        Ok(resp.json::<RowsPage>()?)
    }

    /// Retrieve every row of the subset's train split, in corpus order.
    ///
    /// The rows endpoint is paged, so this performs
    /// `ceil(num_rows_total / PAGE_SIZE)` requests.
    pub fn fetch(&self) -> Result<Vec<Document>, Error> {
        let first = self.get_page(0)?;
        let total = first.num_rows_total;
        info!("{}: {} rows available", self.dataset(), total);

        let mut rows: Vec<Document> = first.rows.into_iter().map(|e| e.row).collect();

        while rows.len() < total {
            let page = self.get_page(rows.len())?;
            if page.rows.is_empty() {
                // server returned fewer rows than announced
                debug!(
                    "{}: got {}/{} rows, stopping early",
                    self.dataset(),
                    rows.len(),
                    total
                );
                break;
            }
            rows.extend(page.rows.into_iter().map(|e| e.row));
            debug!("{}: fetched {}/{} rows", self.dataset(), rows.len(), total);
        }

        Ok(rows)
    }
}
