// src/domain/article/query.rs
//! Declarative article listing queries.
//!
//! Composers return plain values; nothing here touches the store. Each
//! [`ArticleRepository`](super::ArticleRepository) implementation translates an
//! [`ArticleQuery`] into its own query language, and [`ArticleQuery::matches`]
//! plus [`ArticleQuery::compare`] define the semantics it has to reproduce.

use crate::domain::article::entity::Article;
use crate::domain::user::UserId;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleScope {
    All,
    ByAuthor(UserId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleOrder {
    UpdatedAtDesc,
    CreatedAtDesc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleQuery {
    scope: ArticleScope,
    order: ArticleOrder,
    join_category: bool,
}

impl ArticleQuery {
    pub fn scope(&self) -> ArticleScope {
        self.scope
    }

    pub fn order(&self) -> ArticleOrder {
        self.order
    }

    pub fn joins_category(&self) -> bool {
        self.join_category
    }

    pub fn author_filter(&self) -> Option<UserId> {
        match self.scope {
            ArticleScope::All => None,
            ArticleScope::ByAuthor(author) => Some(author),
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.author_filter()
            .is_none_or(|author| article.author_id == author)
    }

    /// Total order used for listing: the primary timestamp descending, then
    /// id descending so equal timestamps still page deterministically.
    pub fn compare(&self, a: &Article, b: &Article) -> Ordering {
        let primary = match self.order {
            ArticleOrder::UpdatedAtDesc => b.updated_at.cmp(&a.updated_at),
            ArticleOrder::CreatedAtDesc => b.created_at.cmp(&a.created_at),
        };
        primary.then_with(|| b.id.cmp(&a.id))
    }
}

/// Public and per-author listing: joined with the category, most recently
/// updated first.
pub fn compose_article_query(scope: ArticleScope) -> ArticleQuery {
    ArticleQuery {
        scope,
        order: ArticleOrder::UpdatedAtDesc,
        join_category: true,
    }
}

/// Administrative listing: every article, most recently created first. The
/// ordering differs from [`compose_article_query`] on purpose.
pub fn compose_admin_article_query() -> ArticleQuery {
    ArticleQuery {
        scope: ArticleScope::All,
        order: ArticleOrder::CreatedAtDesc,
        join_category: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleContent, ArticleId, ArticleTitle};
    use crate::domain::category::CategoryId;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn article(id: i64, author: i64, created: i64, updated: i64) -> Article {
        let mut article = Article::draft(
            ArticleTitle::new(format!("article {id}")).unwrap(),
            ArticleContent::new("body").unwrap(),
            CategoryId::new(1).unwrap(),
            UserId::new(author).unwrap(),
            at(created),
        );
        article.id = Some(ArticleId::new(id).unwrap());
        article.touch(at(updated));
        article
    }

    #[test]
    fn scoped_query_filters_by_author_and_orders_by_update() {
        let author = UserId::new(7).unwrap();
        let query = compose_article_query(ArticleScope::ByAuthor(author));
        assert_eq!(query.order(), ArticleOrder::UpdatedAtDesc);
        assert!(query.joins_category());
        assert!(query.matches(&article(1, 7, 0, 0)));
        assert!(!query.matches(&article(2, 8, 0, 0)));
    }

    #[test]
    fn unscoped_query_matches_everyone() {
        let query = compose_article_query(ArticleScope::All);
        assert_eq!(query.author_filter(), None);
        assert!(query.matches(&article(2, 8, 0, 0)));
    }

    #[test]
    fn admin_query_orders_by_creation_without_filter() {
        let query = compose_admin_article_query();
        assert_eq!(query.scope(), ArticleScope::All);
        assert_eq!(query.order(), ArticleOrder::CreatedAtDesc);
        assert!(!query.joins_category());
        assert_ne!(query, compose_article_query(ArticleScope::All));
    }

    #[test]
    fn compare_sorts_descending_with_id_tie_break() {
        let old_created_recent_update = article(1, 1, 0, 50);
        let new_created_stale_update = article(2, 1, 10, 10);
        let twin = article(3, 1, 10, 10);

        let mut rows = vec![
            old_created_recent_update.clone(),
            new_created_stale_update.clone(),
            twin.clone(),
        ];

        rows.sort_by(|a, b| compose_article_query(ArticleScope::All).compare(a, b));
        let ids: Vec<_> = rows.iter().map(|a| a.id.unwrap().0).collect();
        assert_eq!(ids, vec![1, 3, 2]);

        rows.sort_by(|a, b| compose_admin_article_query().compare(a, b));
        let ids: Vec<_> = rows.iter().map(|a| a.id.unwrap().0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
