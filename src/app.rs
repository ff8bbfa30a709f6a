//! The product search driver.
//!
//! Reads `--name`, queries the catalog, and writes one line per
//! product/variant pair. API failures are logged, never propagated.

use std::io::{self, Write};

use crate::catalog::{self, Product, ProductsData};
use crate::cli::{ArgumentParser, NAME_FLAG};
use crate::clients::graphql::{GraphqlClient, GraphqlError};

/// How a run ended. None of these is a process failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// `--name` was missing; no request was sent.
    MissingName,
    /// Results were printed.
    Printed {
        /// Number of products returned.
        products: usize,
        /// Number of product/variant lines written.
        lines: usize,
    },
    /// The API call failed and the error was logged.
    Failed,
}

/// Application driver wrapping a [`GraphqlClient`].
#[derive(Debug)]
pub struct App {
    client: GraphqlClient,
}

impl App {
    /// Creates a driver that searches through `client`.
    #[must_use]
    pub const fn new(client: GraphqlClient) -> Self {
        Self { client }
    }

    /// Runs one search over `args` (program name excluded), writing
    /// results to `out`.
    ///
    /// # Errors
    ///
    /// Only I/O errors from `out` are returned. API errors are logged at
    /// error level and reported as [`RunOutcome::Failed`].
    pub async fn run<W: Write>(&self, args: &[String], out: &mut W) -> io::Result<RunOutcome> {
        let parser = ArgumentParser::new(args.iter().cloned());

        let Some(name) = parser.get_arg_value(NAME_FLAG).filter(|name| !name.is_empty()) else {
            tracing::error!("Name parameter not provided");
            return Ok(RunOutcome::MissingName);
        };

        match self.search(name).await {
            Ok(products) => Self::print_products(&products, out),
            Err(e) => {
                tracing::error!("Error fetching data: {e}");
                Ok(RunOutcome::Failed)
            }
        }
    }

    /// Fetches every product whose title contains `name`.
    ///
    /// # Errors
    ///
    /// Propagates any [`GraphqlError`] from pagination.
    pub async fn search(&self, name: &str) -> Result<Vec<Product>, GraphqlError> {
        tracing::info!(name, "Searching products");
        self.client
            .fetch_all::<ProductsData>(
                catalog::PRODUCTS_QUERY,
                catalog::search_variables(name),
                self.client.page_size(),
            )
            .await
    }

    fn print_products<W: Write>(products: &[Product], out: &mut W) -> io::Result<RunOutcome> {
        writeln!(out, "Output: ")?;

        let mut lines = 0;
        for product in products {
            if product.has_more_variants() {
                tracing::warn!(
                    product = %product.title,
                    "Only the first page of variants was returned; remaining variants are not shown"
                );
            }
            for variant in product.variants() {
                writeln!(
                    out,
                    "{} - {} - price ${}",
                    product.title, variant.title, variant.price
                )?;
                lines += 1;
            }
        }

        Ok(RunOutcome::Printed {
            products: products.len(),
            lines,
        })
    }
}
