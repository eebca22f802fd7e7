//! Minimal RSS item extraction. Feeds differ wildly in markup quality, so
//! items are pulled with regexes and scrubbed instead of full XML parsing.

use std::time::Duration;

use regex::Regex;

pub struct RssFeed {
    pub url: &'static str,
    pub source: &'static str,
}

/// Feed sources per category, each a staple of interpreter training corpora.
pub const RSS_FEEDS: &[(&str, &[RssFeed])] = &[
    (
        "economy",
        &[
            RssFeed { url: "https://feeds.reuters.com/reuters/businessNews", source: "Reuters" },
            RssFeed { url: "https://feeds.bbci.co.uk/news/business/rss.xml", source: "BBC" },
        ],
    ),
    (
        "politics",
        &[
            RssFeed { url: "https://feeds.reuters.com/Reuters/worldNews", source: "Reuters" },
            RssFeed { url: "https://feeds.bbci.co.uk/news/world/rss.xml", source: "BBC" },
            RssFeed { url: "https://www.theguardian.com/world/rss", source: "The Guardian" },
        ],
    ),
    (
        "law",
        &[RssFeed { url: "https://feeds.reuters.com/reuters/politicsNews", source: "Reuters" }],
    ),
    (
        "health",
        &[
            RssFeed { url: "https://feeds.reuters.com/reuters/healthNews", source: "Reuters" },
            RssFeed { url: "https://feeds.bbci.co.uk/news/health/rss.xml", source: "BBC" },
        ],
    ),
    (
        "tech",
        &[
            RssFeed { url: "https://feeds.reuters.com/reuters/technologyNews", source: "Reuters" },
            RssFeed { url: "https://feeds.bbci.co.uk/news/technology/rss.xml", source: "BBC" },
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RssItem {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

pub struct RssParser {
    item: Regex,
    title: Regex,
    description: Regex,
    link: Regex,
    tag: Regex,
}

impl RssParser {
    pub fn new() -> Self {
        Self {
            item: Regex::new(r"(?s)<(?:item|entry)\b[^>]*>(.*?)</(?:item|entry)>")
                .expect("static regex"),
            title: Regex::new(r"(?s)<title[^>]*>(.*?)</title>")
                .expect("static regex"),
            description: Regex::new(r"(?s)<(?:description|summary|content)[^>]*>(.*?)</(?:description|summary|content)>")
                .expect("static regex"),
            link: Regex::new(r#"(?s)<link[^>]*?href="([^"]+)"|<link[^>]*>(.*?)</link>"#)
                .expect("static regex"),
            tag: Regex::new(r"<[^>]+>").expect("static regex"),
        }
    }

    /// All items of an RSS or Atom document, in document order. Items with
    /// no title are dropped.
    pub fn items(&self, body: &str) -> Vec<RssItem> {
        self.item
            .captures_iter(body)
            .filter_map(|cap| {
                let block = &cap[1];
                let title = self.field(&self.title, block)?;
                let description = self.field(&self.description, block).unwrap_or_default();
                let link = self.link.captures(block).and_then(|c| {
                    c.get(1)
                        .or_else(|| c.get(2))
                        .map(|m| self.scrub(m.as_str()))
                });
                Some(RssItem { title, description, link })
            })
            .collect()
    }

    fn field(&self, re: &Regex, block: &str) -> Option<String> {
        let raw = re.captures(block)?.get(1)?.as_str();
        let cleaned = self.scrub(raw);
        (!cleaned.is_empty()).then_some(cleaned)
    }

    /// Unwrap CDATA, strip markup, decode the few entities feeds actually use.
    fn scrub(&self, raw: &str) -> String {
        let raw = raw
            .trim()
            .strip_prefix("<![CDATA[")
            .and_then(|s| s.strip_suffix("]]>"))
            .unwrap_or(raw.trim());
        let stripped = self.tag.replace_all(raw, "");
        stripped
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&apos;", "'")
            .replace("&nbsp;", " ")
            .trim()
            .to_string()
    }
}

/// Fetch a feed URL and return its items; a dead feed yields an empty list.
pub async fn fetch_items(
    client: &reqwest::Client,
    parser: &RssParser,
    url: &str,
    timeout_secs: u64,
) -> Vec<RssItem> {
    let body = async {
        client
            .get(url)
            .timeout(Duration::from_secs(timeout_secs))
            .header("User-Agent", "Mozilla/5.0 (compatible; StudioGenerator/1.0)")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
    .await;

    match body {
        Ok(body) => parser.items(&body),
        Err(e) => {
            tracing::warn!(url, error = %e, "RSS fetch failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
  <title>World news</title>
  <item>
    <title><![CDATA[Central bank holds rates &amp; signals caution]]></title>
    <description>&lt;p&gt;The bank kept its benchmark rate unchanged.&lt;/p&gt;</description>
    <link>https://example.com/a</link>
  </item>
  <item>
    <title>Short</title>
    <description></description>
    <link>https://example.com/b</link>
  </item>
</channel></rss>"#;

    #[test]
    fn extracts_items_with_cdata_and_entities() {
        let items = RssParser::new().items(SAMPLE);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Central bank holds rates & signals caution");
        assert_eq!(items[0].description, "The bank kept its benchmark rate unchanged.");
        assert_eq!(items[0].link.as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn atom_entries_and_href_links_are_understood() {
        let atom = r#"<feed>
  <entry>
    <title>Vote scheduled on trade bill</title>
    <summary>Lawmakers will vote next week.</summary>
    <link href="https://example.com/atom"/>
  </entry>
</feed>"#;
        let items = RssParser::new().items(atom);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Vote scheduled on trade bill");
        assert_eq!(items[0].link.as_deref(), Some("https://example.com/atom"));
    }

    #[test]
    fn untitled_items_are_dropped() {
        let xml = "<rss><channel><item><description>text only</description></item></channel></rss>";
        assert!(RssParser::new().items(xml).is_empty());
    }
}
