use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, PaginatedResult},
        error::ApplicationResult,
    },
    domain::{
        article::{
            ArticleQuery, ArticleScope, ListedArticle, compose_admin_article_query,
            compose_article_query,
        },
        pagination::{PageRequest, paginate},
        user::Principal,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListArticlesQuery {
    pub page: PageRequest,
}

impl ArticleQueryService {
    /// The page `principal` is entitled to see.
    ///
    /// Admins take their own path: every article, newest *created* first.
    /// Signed-in authors see only their articles, most recently *updated*
    /// first. Principals with no user account fall back to the unscoped
    /// public listing.
    pub async fn get_paginated_list(
        &self,
        principal: &Principal,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        if principal.is_admin() {
            return self.get_admin_paginated_list(query).await;
        }

        match principal.user_id() {
            Some(author) => {
                tracing::debug!(author = %author, page = query.page.page(), "listing own articles");
                self.run(compose_article_query(ArticleScope::ByAuthor(author)), query)
                    .await
            }
            None => self.get_public_paginated_list(query).await,
        }
    }

    /// Unscoped listing used when no principal is involved.
    pub async fn get_public_paginated_list(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        tracing::debug!(page = query.page.page(), "listing all articles");
        self.run(compose_article_query(ArticleScope::All), query).await
    }

    pub async fn get_admin_paginated_list(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        tracing::debug!(page = query.page.page(), "listing articles for admin");
        self.run(compose_admin_article_query(), query).await
    }

    async fn run(
        &self,
        article_query: ArticleQuery,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        let page =
            paginate::<_, ListedArticle, _>(self.article_repo.as_ref(), &article_query, query.page)
                .await?;
        Ok(PaginatedResult::from_page(page))
    }
}
