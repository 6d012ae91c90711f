//! Quote of the day over HTTP.
//!
//! Understands the ZenQuotes shape (`[{"q": ..., "a": ...}]`) and plain
//! `{"quote"|"content": ..., "author": ...}` objects.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::{IntegrationError, Quote, QuoteProvider};
use crate::config::QuoteConfig;

const SERVICE: &str = "quote";

#[derive(Debug, Deserialize)]
struct ZenQuote {
    q: String,
    a: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UpstreamQuote {
    Zen(Vec<ZenQuote>),
    Plain {
        #[serde(alias = "content")]
        quote: String,
        author: String,
    },
}

impl UpstreamQuote {
    fn into_quote(self) -> Option<Quote> {
        let (quote, author) = match self {
            UpstreamQuote::Zen(quotes) => {
                let first = quotes.into_iter().next()?;
                (first.q, first.a)
            }
            UpstreamQuote::Plain { quote, author } => (quote, author),
        };

        if quote.trim().is_empty() {
            return None;
        }
        Some(Quote {
            quote: quote.trim().to_string(),
            author: author.trim().to_string(),
        })
    }
}

/// [`QuoteProvider`] backed by a ZenQuotes-compatible HTTP API
pub struct HttpQuoteProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteProvider {
    /// Build the provider with an HTTP client using the configured timeout
    pub fn new(config: &QuoteConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl QuoteProvider for HttpQuoteProvider {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch_quote(&self) -> Result<Quote, IntegrationError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| IntegrationError::upstream(SERVICE, e))?;

        let body: UpstreamQuote = response
            .json()
            .await
            .map_err(|e| IntegrationError::upstream(SERVICE, e))?;

        body.into_quote()
            .ok_or_else(|| IntegrationError::upstream(SERVICE, "empty quote payload"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zen_quotes_list() {
        let body: UpstreamQuote = serde_json::from_str(r#"[{"q": "Act. ", "a": "Someone", "h": "<b>"}]"#).unwrap();
        assert_eq!(
            body.into_quote(),
            Some(Quote {
                quote: "Act.".to_string(),
                author: "Someone".to_string()
            })
        );
    }

    #[test]
    fn parses_plain_object() {
        let body: UpstreamQuote = serde_json::from_str(r#"{"content": "Go", "author": "Me"}"#).unwrap();
        assert_eq!(body.into_quote().unwrap().quote, "Go");
    }

    #[test]
    fn empty_list_has_no_quote() {
        let body: UpstreamQuote = serde_json::from_str("[]").unwrap();
        assert!(body.into_quote().is_none());
    }
}
