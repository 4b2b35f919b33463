//! 刷新令牌黑名单存储操作
//!
//! 吊销按 jti 登记，自然过期的记录在写入时顺带清理。

use super::SeaOrmStorage;
use crate::entity::revoked_tokens::{ActiveModel, Column, Entity as RevokedTokens};
use crate::errors::{Result, SchoolSysError};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 吊销令牌
    ///
    /// 重复吊销同一 jti 视为成功（幂等）。
    pub async fn revoke_token_impl(
        &self,
        jti: &str,
        user_id: i64,
        expires_at: i64,
    ) -> Result<bool> {
        if self.is_token_revoked_impl(jti).await? {
            return Ok(true);
        }

        let model = ActiveModel {
            jti: Set(jti.to_string()),
            user_id: Set(user_id),
            expires_at: Set(expires_at),
            revoked_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("吊销令牌失败: {e}")))?;

        // 顺带清理已自然过期的记录
        let _ = self.purge_expired_revocations_impl().await;

        Ok(true)
    }

    /// 令牌是否已被吊销
    pub async fn is_token_revoked_impl(&self, jti: &str) -> Result<bool> {
        let count = RevokedTokens::find()
            .filter(Column::Jti.eq(jti))
            .count(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询令牌黑名单失败: {e}")))?;

        Ok(count > 0)
    }

    /// 清理已自然过期的吊销记录
    pub async fn purge_expired_revocations_impl(&self) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();

        let result = RevokedTokens::delete_many()
            .filter(Column::ExpiresAt.lt(now))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("清理令牌黑名单失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
