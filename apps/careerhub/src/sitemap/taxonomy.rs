//! Taxonomy tables: the leaf lists every sitemap category is enumerated from.
//!
//! Tables are plain ordered slices. Slugs are expected to be unique within a
//! table but nothing checks it: a duplicate slug yields a duplicate URL.

use serde::Serialize;

use crate::sitemap::data;
use crate::sitemap::entry::{ChangeFreq, Priority};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Role {
    pub slug: &'static str,
    pub title: &'static str,
    pub industry: &'static str,
}

/// An active market: a location where shifts are currently offered.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Location {
    pub slug: &'static str,
    pub name: &'static str,
    pub state: &'static str,
}

/// A city with programmatic pages, active market or not.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct City {
    pub slug: &'static str,
    pub name: &'static str,
    pub state: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Season {
    pub id: &'static str,
    pub slug: &'static str,
    /// Prefix of the per-city landing page, e.g. `summer-jobs-in` → `/summer-jobs-in-austin`.
    pub location_prefix: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeasonalEvent {
    pub slug: &'static str,
    pub name: &'static str,
    /// Flagship events also get one page per city.
    pub flagship: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GuideArticle {
    pub slug: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FinancialTip {
    pub slug: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tool {
    pub slug: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Industry {
    pub slug: &'static str,
    pub name: &'static str,
}

/// A fixed hub page. `path` is relative to the base URL and starts with `/`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CorePage {
    pub path: &'static str,
    pub changefreq: ChangeFreq,
    pub priority: Priority,
}

/// Borrowed view over every table the enumerator reads.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy<'a> {
    pub core_pages: &'a [CorePage],
    pub roles: &'a [Role],
    pub locations: &'a [Location],
    pub cities: &'a [City],
    pub industries: &'a [Industry],
    pub tools: &'a [Tool],
    pub guides: &'a [GuideArticle],
    pub seasonal_guides: &'a [GuideArticle],
    pub financial_tips: &'a [FinancialTip],
    pub seasons: &'a [Season],
    pub events: &'a [SeasonalEvent],
}

impl Taxonomy<'static> {
    /// The site's static tables.
    pub fn builtin() -> Self {
        Taxonomy {
            core_pages: data::CORE_PAGES,
            roles: data::ROLES,
            locations: data::LOCATIONS,
            cities: data::CITIES,
            industries: data::INDUSTRIES,
            tools: data::TOOLS,
            guides: data::GUIDES,
            seasonal_guides: data::SEASONAL_GUIDES,
            financial_tips: data::FINANCIAL_TIPS,
            seasons: data::SEASONS,
            events: data::SEASONAL_EVENTS,
        }
    }
}

impl<'a> Taxonomy<'a> {
    /// A taxonomy with every table empty. Tests fill in only what they need.
    pub fn empty() -> Self {
        Taxonomy {
            core_pages: &[],
            roles: &[],
            locations: &[],
            cities: &[],
            industries: &[],
            tools: &[],
            guides: &[],
            seasonal_guides: &[],
            financial_tips: &[],
            seasons: &[],
            events: &[],
        }
    }

    pub fn flagship_events(&self) -> impl Iterator<Item = &'a SeasonalEvent> {
        self.events.iter().filter(|e| e.flagship)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_unique<'s>(table: &str, slugs: impl Iterator<Item = &'s str>) {
        let mut seen = HashSet::new();
        for slug in slugs {
            assert!(seen.insert(slug), "duplicate slug '{slug}' in {table}");
        }
    }

    #[test]
    fn test_builtin_slugs_unique_per_table() {
        let t = Taxonomy::builtin();
        assert_unique("core_pages", t.core_pages.iter().map(|p| p.path));
        assert_unique("roles", t.roles.iter().map(|r| r.slug));
        assert_unique("locations", t.locations.iter().map(|l| l.slug));
        assert_unique("cities", t.cities.iter().map(|c| c.slug));
        assert_unique("industries", t.industries.iter().map(|i| i.slug));
        assert_unique("tools", t.tools.iter().map(|x| x.slug));
        assert_unique("guides", t.guides.iter().map(|g| g.slug));
        assert_unique("seasonal_guides", t.seasonal_guides.iter().map(|g| g.slug));
        assert_unique("financial_tips", t.financial_tips.iter().map(|f| f.slug));
        assert_unique("seasons", t.seasons.iter().map(|s| s.slug));
        assert_unique("events", t.events.iter().map(|e| e.slug));
    }

    #[test]
    fn test_builtin_has_two_flagship_events() {
        assert_eq!(Taxonomy::builtin().flagship_events().count(), 2);
    }

    #[test]
    fn test_builtin_slugs_are_url_safe() {
        let t = Taxonomy::builtin();
        let slugs = t
            .roles
            .iter()
            .map(|r| r.slug)
            .chain(t.locations.iter().map(|l| l.slug))
            .chain(t.cities.iter().map(|c| c.slug))
            .chain(t.industries.iter().map(|i| i.slug))
            .chain(t.seasons.iter().map(|s| s.location_prefix));
        for slug in slugs {
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug '{slug}' is not lowercase kebab-case"
            );
        }
    }

    #[test]
    fn test_core_pages_are_rooted() {
        for page in Taxonomy::builtin().core_pages {
            assert!(page.path.starts_with('/'), "{} is not rooted", page.path);
        }
    }
}
