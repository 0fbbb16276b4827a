//! URL-space enumerator: turns the taxonomy tables into sitemap entries, one
//! category at a time.
//!
//! Every function here is pure: `lastmod` is threaded in by the caller so a run
//! stamps all entries with the same date and tests can pin it.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::sitemap::entry::{ChangeFreq, Priority, SitemapEntry};
use crate::sitemap::taxonomy::Taxonomy;
use crate::sitemap::BASE_URL;

const HUB: Priority = Priority::from_tenths(9);
const PRIMARY: Priority = Priority::from_tenths(8);
const STANDARD: Priority = Priority::from_tenths(7);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SitemapCategory {
    Core,
    Roles,
    Locations,
    Cities,
    Programmatic,
    Tools,
    Guides,
    Seasonal,
}

impl SitemapCategory {
    /// Index order. Also the order files are written in.
    pub const ALL: [SitemapCategory; 8] = [
        SitemapCategory::Core,
        SitemapCategory::Roles,
        SitemapCategory::Locations,
        SitemapCategory::Cities,
        SitemapCategory::Programmatic,
        SitemapCategory::Tools,
        SitemapCategory::Guides,
        SitemapCategory::Seasonal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SitemapCategory::Core => "core",
            SitemapCategory::Roles => "roles",
            SitemapCategory::Locations => "locations",
            SitemapCategory::Cities => "cities",
            SitemapCategory::Programmatic => "programmatic",
            SitemapCategory::Tools => "tools",
            SitemapCategory::Guides => "guides",
            SitemapCategory::Seasonal => "seasonal",
        }
    }

    pub fn filename(&self) -> String {
        format!("sitemap-{}.xml", self.name())
    }
}

impl fmt::Display for SitemapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Produces the ordered entries of one category.
pub fn enumerate(
    category: SitemapCategory,
    taxonomy: &Taxonomy<'_>,
    lastmod: NaiveDate,
) -> Vec<SitemapEntry> {
    let mut out = Emitter::new(lastmod);
    match category {
        SitemapCategory::Core => core_pages(taxonomy, &mut out),
        SitemapCategory::Roles => roles(taxonomy, &mut out),
        SitemapCategory::Locations => locations(taxonomy, &mut out),
        SitemapCategory::Cities => cities(taxonomy, &mut out),
        SitemapCategory::Programmatic => programmatic(taxonomy, &mut out),
        SitemapCategory::Tools => tools(taxonomy, &mut out),
        SitemapCategory::Guides => guides(taxonomy, &mut out),
        SitemapCategory::Seasonal => seasonal(taxonomy, &mut out),
    }
    out.entries
}

/// Every category in index order.
pub fn enumerate_all(
    taxonomy: &Taxonomy<'_>,
    lastmod: NaiveDate,
) -> Vec<(SitemapCategory, Vec<SitemapEntry>)> {
    SitemapCategory::ALL
        .iter()
        .map(|&category| (category, enumerate(category, taxonomy, lastmod)))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub category: SitemapCategory,
    pub filename: String,
    pub urls: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SitemapSummary {
    pub categories: Vec<CategoryCount>,
    pub total_urls: usize,
}

/// Per-category URL counts, for callers that need the size of the URL space
/// without writing any files.
pub fn summarize(taxonomy: &Taxonomy<'_>, lastmod: NaiveDate) -> SitemapSummary {
    let categories: Vec<CategoryCount> = enumerate_all(taxonomy, lastmod)
        .into_iter()
        .map(|(category, entries)| CategoryCount {
            category,
            filename: category.filename(),
            urls: entries.len(),
        })
        .collect();
    let total_urls = categories.iter().map(|c| c.urls).sum();
    SitemapSummary {
        categories,
        total_urls,
    }
}

/// A `loc` produced by more than one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossCategoryDuplicate {
    pub loc: String,
    pub categories: Vec<SitemapCategory>,
}

/// Reports URLs that appear in more than one sitemap file. Nothing is removed:
/// the caller decides whether to warn or fail.
pub fn cross_category_duplicates(
    sets: &[(SitemapCategory, Vec<SitemapEntry>)],
) -> Vec<CrossCategoryDuplicate> {
    let mut seen: HashMap<&str, Vec<SitemapCategory>> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for (category, entries) in sets {
        for entry in entries {
            let cats = seen.entry(entry.loc.as_str()).or_insert_with(|| {
                order.push(entry.loc.as_str());
                Vec::new()
            });
            if !cats.contains(category) {
                cats.push(*category);
            }
        }
    }

    order
        .into_iter()
        .filter_map(|loc| {
            let categories = seen.remove(loc)?;
            (categories.len() > 1).then(|| CrossCategoryDuplicate {
                loc: loc.to_string(),
                categories,
            })
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Category rules
// ────────────────────────────────────────────────────────────────────────────

struct Emitter {
    lastmod: NaiveDate,
    entries: Vec<SitemapEntry>,
}

impl Emitter {
    fn new(lastmod: NaiveDate) -> Self {
        Self {
            lastmod,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, path: &str, changefreq: ChangeFreq, priority: Priority) {
        self.entries.push(SitemapEntry::new(
            format!("{BASE_URL}{path}"),
            self.lastmod,
            changefreq,
            priority,
        ));
    }
}

fn core_pages(t: &Taxonomy<'_>, out: &mut Emitter) {
    for page in t.core_pages {
        out.push(page.path, page.changefreq, page.priority);
    }
}

fn roles(t: &Taxonomy<'_>, out: &mut Emitter) {
    for role in t.roles {
        out.push(
            &format!("/career-hub/roles/{}", role.slug),
            ChangeFreq::Monthly,
            PRIMARY,
        );
    }
}

fn locations(t: &Taxonomy<'_>, out: &mut Emitter) {
    for location in t.locations {
        let base = format!("/career-hub/locations/{}", location.slug);
        out.push(&base, ChangeFreq::Monthly, HUB);
        for role in t.roles {
            out.push(
                &format!("{base}/{}", role.slug),
                ChangeFreq::Monthly,
                STANDARD,
            );
        }
    }
}

fn cities(t: &Taxonomy<'_>, out: &mut Emitter) {
    for city in t.cities {
        let base = format!("/career-hub/cities/{}", city.slug);
        out.push(&base, ChangeFreq::Weekly, PRIMARY);
        for role in t.roles {
            out.push(
                &format!("{base}/{}", role.slug),
                ChangeFreq::Monthly,
                STANDARD,
            );
        }
    }
}

fn programmatic(t: &Taxonomy<'_>, out: &mut Emitter) {
    for city in t.cities {
        for industry in t.industries {
            out.push(
                &format!("/{}-jobs-{}", industry.slug, city.slug),
                ChangeFreq::Weekly,
                PRIMARY,
            );
        }
        out.push(
            &format!("/how-to-find-work-in-{}", city.slug),
            ChangeFreq::Monthly,
            STANDARD,
        );
        out.push(
            &format!("/best-paying-jobs-in-{}", city.slug),
            ChangeFreq::Monthly,
            STANDARD,
        );
    }
}

fn tools(t: &Taxonomy<'_>, out: &mut Emitter) {
    for tool in t.tools {
        out.push(
            &format!("/tools/{}", tool.slug),
            ChangeFreq::Monthly,
            STANDARD,
        );
    }
}

fn guides(t: &Taxonomy<'_>, out: &mut Emitter) {
    for guide in t.guides.iter().chain(t.seasonal_guides) {
        out.push(
            &format!("/guides/{}", guide.slug),
            ChangeFreq::Monthly,
            STANDARD,
        );
    }
    for tip in t.financial_tips {
        out.push(
            &format!("/guides/financial-tips/{}", tip.slug),
            ChangeFreq::Monthly,
            STANDARD,
        );
    }
}

fn seasonal(t: &Taxonomy<'_>, out: &mut Emitter) {
    out.push("/seasonal-jobs", ChangeFreq::Weekly, HUB);

    for season in t.seasons {
        out.push(
            &format!("/seasonal-jobs/{}", season.slug),
            ChangeFreq::Weekly,
            PRIMARY,
        );
    }
    for season in t.seasons {
        for city in t.cities {
            out.push(
                &format!("/{}-{}", season.location_prefix, city.slug),
                ChangeFreq::Weekly,
                STANDARD,
            );
        }
    }

    for event in t.events {
        out.push(
            &format!("/seasonal-jobs/events/{}", event.slug),
            ChangeFreq::Weekly,
            PRIMARY,
        );
    }
    for event in t.flagship_events() {
        for city in t.cities {
            out.push(
                &format!("/{}-jobs-{}", event.slug, city.slug),
                ChangeFreq::Weekly,
                STANDARD,
            );
        }
    }

    for guide in t.seasonal_guides {
        for location in t.locations {
            out.push(
                &format!("/guides/{}/{}", guide.slug, location.slug),
                ChangeFreq::Monthly,
                STANDARD,
            );
        }
    }
}
