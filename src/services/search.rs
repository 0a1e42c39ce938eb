use chrono::NaiveDate;
use sqlx::{Encode, Postgres, QueryBuilder, Type};

use crate::utils::{time::day_bounds, validation::escape_like};

/// Appends optional WHERE conditions to a base SELECT. Every filter is a no-op
/// when its value is absent, so an empty search returns the full list.
pub struct Filter<'q> {
    builder: QueryBuilder<'q, Postgres>,
    has_where: bool,
}

impl<'q> Filter<'q> {
    pub fn new(select: &str) -> Self {
        Self {
            builder: QueryBuilder::new(select),
            has_where: false,
        }
    }

    fn clause(&mut self) -> &mut QueryBuilder<'q, Postgres> {
        self.builder
            .push(if self.has_where { " AND " } else { " WHERE " });
        self.has_where = true;
        &mut self.builder
    }

    /// Raw condition without binds, e.g. a soft-delete flag.
    pub fn condition(&mut self, sql: &str) -> &mut Self {
        self.clause().push(sql);
        self
    }

    /// Case-insensitive substring match over any of `columns`.
    pub fn keyword(&mut self, columns: &[&str], keyword: Option<&str>) -> &mut Self {
        let Some(keyword) = keyword.map(str::trim).filter(|k| !k.is_empty()) else {
            return self;
        };
        if columns.is_empty() {
            return self;
        }
        let pattern = format!("%{}%", escape_like(keyword));
        let builder = self.clause();
        builder.push("(");
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            builder
                .push("COALESCE(")
                .push(*column)
                .push(", '') ILIKE ")
                .push_bind(pattern.clone());
        }
        builder.push(")");
        self
    }

    pub fn eq<T>(&mut self, column: &str, value: Option<T>) -> &mut Self
    where
        T: 'q + Send + Encode<'q, Postgres> + Type<Postgres>,
    {
        if let Some(value) = value {
            self.clause().push(column).push(" = ").push_bind(value);
        }
        self
    }

    /// `[day, day + 1)` on a DATE or TIMESTAMPTZ column.
    pub fn on_day(&mut self, column: &str, day: Option<NaiveDate>) -> &mut Self {
        if let Some(day) = day {
            let (start, end) = day_bounds(day);
            self.clause()
                .push(column)
                .push(" >= ")
                .push_bind(start)
                .push(" AND ")
                .push(column)
                .push(" < ")
                .push_bind(end);
        }
        self
    }

    pub fn order_by(mut self, order: &str) -> QueryBuilder<'q, Postgres> {
        self.builder.push(" ORDER BY ").push(order);
        self.builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_keeps_base_query() {
        let filter = Filter::new("SELECT id FROM topics");
        let builder = filter.order_by("id DESC");
        assert_eq!(builder.sql(), "SELECT id FROM topics ORDER BY id DESC");
    }

    #[test]
    fn conditions_are_joined_with_and() {
        let mut filter = Filter::new("SELECT id FROM jobs j");
        filter
            .keyword(&["j.description", "jt.name"], Some("  rust "))
            .eq("j.job_title_id", Some(3_i32))
            .eq::<String>("j.status", None)
            .on_day("j.created_at", NaiveDate::from_ymd_opt(2026, 3, 1));
        let builder = filter.order_by("j.id DESC");
        assert_eq!(
            builder.sql(),
            "SELECT id FROM jobs j WHERE (COALESCE(j.description, '') ILIKE $1 OR COALESCE(jt.name, '') ILIKE $2) \
             AND j.job_title_id = $3 AND j.created_at >= $4 AND j.created_at < $5 ORDER BY j.id DESC"
        );
    }

    #[test]
    fn blank_keyword_is_ignored() {
        let mut filter = Filter::new("SELECT id FROM topics");
        filter.keyword(&["name"], Some("   "));
        filter.condition("NOT deleteflag");
        assert_eq!(
            filter.order_by("id DESC").sql(),
            "SELECT id FROM topics WHERE NOT deleteflag ORDER BY id DESC"
        );
    }
}
