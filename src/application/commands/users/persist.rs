// src/application/commands/users/persist.rs
use super::UserCommandService;
use crate::{application::error::ApplicationResult, domain::user::User};

impl UserCommandService {
    pub async fn save(&self, user: User) -> ApplicationResult<User> {
        Ok(self.user_repo.insert_or_update(user).await?)
    }

    /// Hard delete. Fails before touching the store when `user` was never saved.
    pub async fn delete(&self, user: &User) -> ApplicationResult<()> {
        let id = user.persisted_id()?;
        self.user_repo.remove(id).await?;
        tracing::info!(user = %id, "user deleted");
        Ok(())
    }
}
