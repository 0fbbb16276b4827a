// Research prompt templates. `{topic}` is the slug with dashes turned into spaces.

pub const ARTICLE_SYSTEM: &str = "\
You are a labor-market researcher writing source material for career articles aimed at \
hourly and flexible workers in the United States. Answer with concise bullet points. \
Prefer recent figures and name the year of every statistic. Do not speculate.";

pub const PERSONA_SYSTEM: &str = "\
You are a workforce researcher describing how a specific group of people finds and keeps \
flexible, shift-based work in the United States. Answer with concise bullet points grounded \
in published surveys or government data.";

pub const RESUME_SYSTEM: &str = "\
You are a recruiter for hourly roles in warehousing, hospitality, retail and events. \
Answer with concise bullet points a job seeker can copy into a resume. \
Include typical US pay ranges in dollars when asked.";

pub const ARTICLE_QUERIES: &[&str] = &[
    "What are the latest statistics and data about {topic} in the United States?",
    "What practical tips do experts give job seekers about {topic}?",
    "What questions do hourly workers most often ask about {topic}?",
];

pub const PERSONA_QUERIES: &[&str] = &[
    "Why do {topic} choose flexible or shift-based work, and what share of the workforce do they make up?",
    "What challenges do {topic} face when looking for hourly jobs?",
    "Which industries and roles are most popular with {topic}, and what do they typically earn?",
];

pub const RESUME_QUERIES: &[&str] = &[
    "What skills should a {topic} list on a resume?",
    "Which certifications or licenses help a {topic} get hired?",
    "What is the typical hourly pay range for a {topic} in the United States?",
    "Which accomplishments stand out on a {topic} resume?",
];
