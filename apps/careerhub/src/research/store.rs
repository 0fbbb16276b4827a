use sqlx::PgPool;
use tracing::info;

use crate::models::research::ResearchRow;
use crate::research::kinds::ResearchKind;

/// Inserts or replaces the research row for `row.slug`.
pub async fn upsert_research(
    pool: &PgPool,
    kind: ResearchKind,
    row: &ResearchRow,
) -> sqlx::Result<()> {
    // Table names come from `ResearchKind::table`, never from input.
    let sql = format!(
        r#"
        INSERT INTO {table} (slug, queries, results, insights, citations, researched_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (slug) DO UPDATE SET
            queries = EXCLUDED.queries,
            results = EXCLUDED.results,
            insights = EXCLUDED.insights,
            citations = EXCLUDED.citations,
            researched_at = EXCLUDED.researched_at
        "#,
        table = kind.table()
    );

    sqlx::query(&sql)
        .bind(&row.slug)
        .bind(&row.queries)
        .bind(&row.results)
        .bind(&row.insights)
        .bind(&row.citations)
        .bind(row.researched_at)
        .execute(pool)
        .await?;

    info!("Upserted {} research for '{}'", kind, row.slug);
    Ok(())
}

/// Latest saved research for a slug, if any.
pub async fn get_research(
    pool: &PgPool,
    kind: ResearchKind,
    slug: &str,
) -> sqlx::Result<Option<ResearchRow>> {
    let sql = format!(
        "SELECT slug, queries, results, insights, citations, researched_at FROM {} WHERE slug = $1",
        kind.table()
    );
    let row = sqlx::query_as::<_, ResearchRow>(&sql)
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}
