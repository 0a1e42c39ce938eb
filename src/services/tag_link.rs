use std::collections::HashMap;

use sqlx::{FromRow, PgPool, Postgres, Transaction};

use crate::dto::common::TagSummary;
use crate::error::Result;

/// Join tables between postings and tech-stack tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagLink {
    Job,
    Intern,
}

impl TagLink {
    fn table(self) -> &'static str {
        match self {
            TagLink::Job => "jobs_tags",
            TagLink::Intern => "intern_tags",
        }
    }

    fn owner_column(self) -> &'static str {
        match self {
            TagLink::Job => "job_id",
            TagLink::Intern => "intern_id",
        }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    owner_id: i32,
    id: i32,
    name: String,
}

fn normalize(tag_ids: &[i32]) -> Vec<i32> {
    let mut ids = tag_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Delete-then-reinsert inside the caller's transaction. Unknown tag ids fail
/// on the foreign key and abort the whole write.
pub async fn replace_tags(
    tx: &mut Transaction<'_, Postgres>,
    link: TagLink,
    owner_id: i32,
    tag_ids: &[i32],
) -> Result<()> {
    sqlx::query(&format!(
        "DELETE FROM {} WHERE {} = $1",
        link.table(),
        link.owner_column()
    ))
    .bind(owner_id)
    .execute(&mut **tx)
    .await?;

    let ids = normalize(tag_ids);
    if ids.is_empty() {
        return Ok(());
    }

    sqlx::query(&format!(
        "INSERT INTO {} ({}, tag_id) SELECT $1, UNNEST($2::int[])",
        link.table(),
        link.owner_column()
    ))
    .bind(owner_id)
    .bind(&ids)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

pub async fn load_tags(
    pool: &PgPool,
    link: TagLink,
    owner_ids: &[i32],
) -> Result<HashMap<i32, Vec<TagSummary>>> {
    if owner_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, TagRow>(&format!(
        r#"
        SELECT l.{col} AS owner_id, t.id, t.name
        FROM {table} l
        JOIN tech_stack_tags t ON t.id = l.tag_id
        WHERE l.{col} = ANY($1)
        ORDER BY t.name, t.id
        "#,
        col = link.owner_column(),
        table = link.table()
    ))
    .bind(owner_ids)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<i32, Vec<TagSummary>> = HashMap::new();
    for row in rows {
        grouped.entry(row.owner_id).or_default().push(TagSummary {
            id: row.id,
            name: row.name,
        });
    }
    Ok(grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_tag_ids_collapse() {
        assert_eq!(normalize(&[3, 1, 3, 2, 1]), vec![1, 2, 3]);
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn link_tables() {
        assert_eq!(TagLink::Job.table(), "jobs_tags");
        assert_eq!(TagLink::Intern.owner_column(), "intern_id");
    }
}
