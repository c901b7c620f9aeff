//! RSS 2.0 document writer

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::xml::{cdata, escape_xml};
use crate::config::{FeedConfig, SiteMetadata};
use crate::content::parse_date_string;
use crate::serialize::FeedEntry;

/// Render feed entries as an RSS 2.0 document
///
/// Entries are written in the order given. `built_at` becomes the channel's
/// `lastBuildDate`.
pub fn render_rss(
    site: &SiteMetadata,
    feed: &FeedConfig,
    entries: &[FeedEntry],
    tz: &Tz,
    built_at: DateTime<Utc>,
) -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(
        "<rss xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
         xmlns:content=\"http://purl.org/rss/1.0/modules/content/\" \
         xmlns:atom=\"http://www.w3.org/2005/Atom\" version=\"2.0\">\n",
    );
    xml.push_str("  <channel>\n");
    xml.push_str(&format!("    <title>{}</title>\n", cdata(&site.title)));
    xml.push_str(&format!(
        "    <description>{}</description>\n",
        cdata(&site.subtitle)
    ));
    xml.push_str(&format!("    <link>{}</link>\n", escape_xml(&site.url)));
    xml.push_str(&format!(
        "    <generator>{}</generator>\n",
        escape_xml(&feed.generator)
    ));
    xml.push_str(&format!(
        "    <lastBuildDate>{}</lastBuildDate>\n",
        built_at.to_rfc2822()
    ));
    xml.push_str(&format!(
        "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        escape_xml(&format!("{}{}", site.url, feed.output))
    ));

    for entry in entries {
        push_item(&mut xml, entry, tz);
    }

    xml.push_str("  </channel>\n");
    xml.push_str("</rss>\n");
    xml
}

fn push_item(xml: &mut String, entry: &FeedEntry, tz: &Tz) {
    xml.push_str("    <item>\n");
    xml.push_str(&format!("      <title>{}</title>\n", cdata(&entry.title)));
    xml.push_str(&format!(
        "      <description>{}</description>\n",
        cdata(entry.description.as_deref().unwrap_or_default())
    ));
    xml.push_str(&format!("      <link>{}</link>\n", escape_xml(&entry.url)));
    xml.push_str(&format!(
        "      <guid isPermaLink=\"false\">{}</guid>\n",
        escape_xml(&entry.guid)
    ));
    if let Some(layout) = &entry.layout {
        xml.push_str(&format!("      <category>{}</category>\n", cdata(layout)));
    }
    if let Some(date) = entry.date.as_deref() {
        match parse_date_string(date, tz) {
            Some(dt) => {
                xml.push_str(&format!("      <pubDate>{}</pubDate>\n", dt.to_rfc2822()))
            }
            None => tracing::warn!("Unparseable date {:?} for {}", date, entry.url),
        }
    }
    for element in &entry.custom_elements {
        for (name, value) in element {
            xml.push_str(&format!("      <{name}>{}</{name}>\n", cdata(value)));
        }
    }
    xml.push_str("    </item>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentDocument, FrontMatter};
    use crate::serialize::serialize_feed;
    use chrono::TimeZone;

    fn site() -> SiteMetadata {
        SiteMetadata {
            url: "https://example.com".to_string(),
            title: "Example & Co".to_string(),
            subtitle: "Web Developer".to_string(),
            ..Default::default()
        }
    }

    fn built_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn entries() -> Vec<FeedEntry> {
        let fm = FrontMatter {
            title: "Hello".to_string(),
            date: Some("2020-01-01".to_string()),
            layout: Some("post".to_string()),
            description: Some("first post".to_string()),
            ..Default::default()
        };
        let doc = ContentDocument::new(fm, "<p>Hi</p>", "/hello-world/");
        serialize_feed(&site(), &[doc])
    }

    #[test]
    fn test_channel() {
        let xml = render_rss(
            &site(),
            &FeedConfig::default(),
            &[],
            &chrono_tz::UTC,
            built_at(),
        );
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<title><![CDATA[Example & Co]]></title>"));
        assert!(xml.contains("<description><![CDATA[Web Developer]]></description>"));
        assert!(xml.contains("<link>https://example.com</link>"));
        assert!(xml.contains(
            "<atom:link href=\"https://example.com/rss.xml\" rel=\"self\" type=\"application/rss+xml\"/>"
        ));
        assert!(xml.contains("1 Mar 2024 12:00:00 +0000</lastBuildDate>"));
        assert!(!xml.contains("<item>"));
        assert!(xml.trim_end().ends_with("</rss>"));
    }

    #[test]
    fn test_item() {
        let xml = render_rss(
            &site(),
            &FeedConfig::default(),
            &entries(),
            &chrono_tz::UTC,
            built_at(),
        );
        assert_eq!(xml.matches("<item>").count(), 1);
        assert!(xml.contains("<title><![CDATA[Hello]]></title>"));
        assert!(xml.contains("<description><![CDATA[first post]]></description>"));
        assert!(xml.contains("<link>https://example.com/hello-world/</link>"));
        assert!(xml.contains(
            "<guid isPermaLink=\"false\">https://example.com/hello-world/</guid>"
        ));
        assert!(xml.contains("<category><![CDATA[post]]></category>"));
        assert!(xml.contains("1 Jan 2020 00:00:00 +0000</pubDate>"));
        assert!(xml.contains("<content:encoded><![CDATA[<p>Hi</p>]]></content:encoded>"));
    }

    #[test]
    fn test_item_without_optional_fields() {
        let mut entries = entries();
        entries[0].description = None;
        entries[0].date = Some("someday".to_string());
        let xml = render_rss(
            &site(),
            &FeedConfig::default(),
            &entries,
            &chrono_tz::UTC,
            built_at(),
        );
        assert!(xml.contains("<description><![CDATA[]]></description>"));
        assert!(!xml.contains("<pubDate>"));
    }

    #[test]
    fn test_deterministic() {
        let render = || {
            render_rss(
                &site(),
                &FeedConfig::default(),
                &entries(),
                &chrono_tz::UTC,
                built_at(),
            )
        };
        assert_eq!(render(), render());
    }
}
