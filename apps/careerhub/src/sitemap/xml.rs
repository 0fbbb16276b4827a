//! sitemaps.org 0.9 serializer for `<urlset>` and `<sitemapindex>` documents.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::sitemap::entry::{format_date, SitemapEntry};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Renders one sitemap file.
pub fn render_urlset(entries: &[SitemapEntry]) -> String {
    // ~150 bytes per <url> block
    let mut xml = String::with_capacity(128 + entries.len() * 160);
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    let _ = writeln!(xml, r#"<urlset xmlns="{SITEMAP_NS}">"#);
    for entry in entries {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape(&entry.loc));
        let _ = writeln!(xml, "    <lastmod>{}</lastmod>", entry.lastmod_str());
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.changefreq);
        let _ = writeln!(xml, "    <priority>{}</priority>", entry.priority);
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Renders the sitemap index pointing at `base_url/filename` for every file.
pub fn render_index<S: AsRef<str>>(base_url: &str, filenames: &[S], lastmod: NaiveDate) -> String {
    let lastmod = format_date(lastmod);
    let base_url = base_url.trim_end_matches('/');

    let mut xml = String::new();
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    let _ = writeln!(xml, r#"<sitemapindex xmlns="{SITEMAP_NS}">"#);
    for filename in filenames {
        let loc = format!("{base_url}/{}", filename.as_ref());
        xml.push_str("  <sitemap>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape(&loc));
        let _ = writeln!(xml, "    <lastmod>{lastmod}</lastmod>");
        xml.push_str("  </sitemap>\n");
    }
    xml.push_str("</sitemapindex>\n");
    xml
}

/// Escapes XML text content. Slugs never need it today; free-text slugs might.
pub fn escape(text: &str) -> String {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
