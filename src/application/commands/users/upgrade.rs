// src/application/commands/users/upgrade.rs
use super::{
    UserCommandService,
    change_password::{password_principal, rehash},
};
use crate::{application::error::ApplicationResult, domain::user::Principal};

impl UserCommandService {
    /// Re-hash a plaintext the caller has just verified, using the hasher's
    /// current parameters.
    pub async fn upgrade_password(
        &self,
        principal: &Principal,
        plaintext: &str,
    ) -> ApplicationResult<()> {
        let actor = password_principal(principal)?;
        let hash = rehash(self.password_hasher.as_ref(), plaintext).await?;
        self.user_repo.update_password_hash(actor.id, &hash).await?;
        tracing::debug!(user = %actor.id, "password hash upgraded");
        Ok(())
    }
}
