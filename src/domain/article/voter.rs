// src/domain/article/voter.rs
//! Per-article authorization.
//!
//! Ownership is the only rule: a principal may view, edit or delete an
//! article iff it is the signed-in author. Admins get no override here even
//! though the admin listing shows them every article.

use crate::domain::article::entity::Article;
use crate::domain::user::Principal;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleAction {
    View,
    Edit,
    Delete,
}

impl ArticleAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::Edit => "EDIT",
            Self::Delete => "DELETE",
        }
    }
}

impl FromStr for ArticleAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VIEW" => Ok(Self::View),
            "EDIT" => Ok(Self::Edit),
            "DELETE" => Ok(Self::Delete),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Granted,
    Denied,
    /// The attribute or subject is not ours to judge.
    Abstain,
}

/// Pure ownership decision, identical for every action.
pub fn decide(action: ArticleAction, article: &Article, principal: &Principal) -> bool {
    match action {
        ArticleAction::View | ArticleAction::Edit | ArticleAction::Delete => principal
            .user_id()
            .is_some_and(|user_id| article.is_owned_by(user_id)),
    }
}

/// Attribute-string entry point. `subject` is `None` when the thing being
/// checked is not an article.
pub fn vote(attribute: &str, subject: Option<&Article>, principal: &Principal) -> Vote {
    let (Ok(action), Some(article)) = (attribute.parse::<ArticleAction>(), subject) else {
        return Vote::Abstain;
    };

    if decide(action, article, principal) {
        Vote::Granted
    } else {
        Vote::Denied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleContent, ArticleTitle};
    use crate::domain::category::CategoryId;
    use crate::domain::user::{Email, Role, UserId};
    use chrono::Utc;

    const ACTIONS: [ArticleAction; 3] = [
        ArticleAction::View,
        ArticleAction::Edit,
        ArticleAction::Delete,
    ];

    fn article_by(author: i64) -> Article {
        Article::draft(
            ArticleTitle::new("title").unwrap(),
            ArticleContent::new("content").unwrap(),
            CategoryId::new(1).unwrap(),
            UserId::new(author).unwrap(),
            Utc::now(),
        )
    }

    fn user(id: i64, role: Role) -> Principal {
        Principal::user(
            UserId::new(id).unwrap(),
            Email::new(format!("user{id}@example.com")).unwrap(),
            role,
        )
    }

    #[test]
    fn author_is_granted_every_action() {
        let article = article_by(1);
        for action in ACTIONS {
            assert!(decide(action, &article, &user(1, Role::Author)));
        }
    }

    #[test]
    fn other_author_is_denied_every_action() {
        let article = article_by(1);
        for action in ACTIONS {
            assert!(!decide(action, &article, &user(2, Role::Author)));
        }
    }

    #[test]
    fn admin_gets_no_override() {
        let article = article_by(1);
        for action in ACTIONS {
            assert!(!decide(action, &article, &user(2, Role::Admin)));
        }
        assert!(decide(ArticleAction::Edit, &article, &user(1, Role::Admin)));
    }

    #[test]
    fn anonymous_and_service_principals_are_denied() {
        let article = article_by(1);
        for action in ACTIONS {
            assert!(!decide(action, &article, &Principal::Anonymous));
            assert!(!decide(action, &article, &Principal::service("importer")));
        }
    }

    #[test]
    fn vote_abstains_on_unknown_attribute_or_subject() {
        let article = article_by(1);
        let owner = user(1, Role::Author);
        assert_eq!(vote("PUBLISH", Some(&article), &owner), Vote::Abstain);
        assert_eq!(vote("edit", Some(&article), &owner), Vote::Abstain);
        assert_eq!(vote("EDIT", None, &owner), Vote::Abstain);
        assert_eq!(vote("EDIT", Some(&article), &owner), Vote::Granted);
        assert_eq!(
            vote("DELETE", Some(&article), &Principal::Anonymous),
            Vote::Denied
        );
    }

    #[test]
    fn action_names_round_trip() {
        for action in ACTIONS {
            assert_eq!(action.as_str().parse::<ArticleAction>(), Ok(action));
        }
    }
}
