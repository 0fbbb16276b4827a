use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::research::prompts::{
    ARTICLE_QUERIES, ARTICLE_SYSTEM, PERSONA_QUERIES, PERSONA_SYSTEM, RESUME_QUERIES,
    RESUME_SYSTEM,
};

/// What a research request is about. Each kind has its own prompts and table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchKind {
    Article,
    Persona,
    Resume,
}

impl ResearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchKind::Article => "article",
            ResearchKind::Persona => "persona",
            ResearchKind::Resume => "resume",
        }
    }

    /// Table the aggregated research is upserted into, keyed by slug.
    pub fn table(&self) -> &'static str {
        match self {
            ResearchKind::Article => "article_research",
            ResearchKind::Persona => "persona_research",
            ResearchKind::Resume => "resume_research",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            ResearchKind::Article => ARTICLE_SYSTEM,
            ResearchKind::Persona => PERSONA_SYSTEM,
            ResearchKind::Resume => RESUME_SYSTEM,
        }
    }

    /// Queries used when the request does not override them.
    pub fn default_queries(&self, slug: &str) -> Vec<String> {
        let templates = match self {
            ResearchKind::Article => ARTICLE_QUERIES,
            ResearchKind::Persona => PERSONA_QUERIES,
            ResearchKind::Resume => RESUME_QUERIES,
        };
        let topic = topic_from_slug(slug);
        templates
            .iter()
            .map(|t| t.replace("{topic}", &topic))
            .collect()
    }
}

impl fmt::Display for ResearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResearchKind {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "article" => Ok(ResearchKind::Article),
            "persona" => Ok(ResearchKind::Persona),
            "resume" => Ok(ResearchKind::Resume),
            _ => Err(format!("Unknown research kind: {input}")),
        }
    }
}

/// `forklift-driver` → `forklift driver`
pub fn topic_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_from_slug() {
        assert_eq!(topic_from_slug("forklift-driver"), "forklift driver");
        assert_eq!(topic_from_slug("-stay-at-home--parents-"), "stay at home parents");
    }

    #[test]
    fn test_default_queries_substitute_topic() {
        let queries = ResearchKind::Resume.default_queries("line-cook");
        assert_eq!(queries.len(), 4);
        assert_eq!(queries[0], "What skills should a line cook list on a resume?");
        assert!(queries.iter().all(|q| !q.contains("{topic}")));
    }

    #[test]
    fn test_tables_per_kind() {
        assert_eq!(ResearchKind::Article.table(), "article_research");
        assert_eq!(ResearchKind::Persona.table(), "persona_research");
        assert_eq!(ResearchKind::Resume.table(), "resume_research");
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("Persona".parse::<ResearchKind>(), Ok(ResearchKind::Persona));
        assert!("podcast".parse::<ResearchKind>().is_err());
    }
}
