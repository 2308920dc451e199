// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Email, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};

/// Rebuild the caller identity from the authority facts of a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);

    let id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let email = ctx
        .email
        .ok_or_else(|| ApplicationError::unauthorized("missing email"))?;
    let role = ctx
        .role
        .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    Ok(AuthenticatedUser {
        id: UserId::new(id).map_err(|_| ApplicationError::unauthorized("invalid token subject"))?,
        email: Email::new(email)
            .map_err(|_| ApplicationError::unauthorized("invalid token subject"))?,
        role,
        issued_at,
        expires_at,
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    email: Option<String>,
    role: Option<Role>,
    issued_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = Self::default();
        for fact in facts {
            ctx.apply(&fact.predicate);
        }
        ctx
    }

    fn apply(&mut self, predicate: &Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(email)]) => {
                self.user_id = Some(*id);
                self.email = Some(email.clone());
            }
            ("role", [Term::Str(role)]) => self.role = role.parse().ok(),
            ("issued_at", [Term::Date(secs)]) => self.issued_at = date(*secs),
            ("expires_at", [Term::Date(secs)]) => self.expires_at = date(*secs),
            _ => {}
        }
    }
}

fn date(secs: u64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(i64::try_from(secs).ok()?, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(name: &str, terms: Vec<Term>) -> Fact {
        Fact::new(name.to_string(), terms)
    }

    fn full_facts() -> Vec<Fact> {
        vec![
            fact(
                "user",
                vec![Term::Integer(3), Term::Str("writer@example.com".into())],
            ),
            fact("role", vec![Term::Str("author".into())]),
            fact("issued_at", vec![Term::Date(1_700_000_000)]),
            fact("expires_at", vec![Term::Date(1_700_003_600)]),
        ]
    }

    #[test]
    fn complete_facts_yield_user() {
        let user = parse_claims(full_facts()).unwrap();
        assert_eq!(i64::from(user.id), 3);
        assert_eq!(user.email.as_str(), "writer@example.com");
        assert_eq!(user.role, Role::Author);
        assert_eq!(user.expires_at.timestamp(), 1_700_003_600);
    }

    #[test]
    fn missing_role_is_rejected() {
        let facts = full_facts()
            .into_iter()
            .filter(|f| f.predicate.name != "role")
            .collect();
        assert!(matches!(
            parse_claims(facts),
            Err(ApplicationError::Unauthorized(_))
        ));
    }
}
