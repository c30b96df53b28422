//! Address repository.

use sqlx::PgPool;

use amrita_core::{AddressId, UserId};

use super::RepositoryError;
use crate::models::{Address, address::AddressPatch, address::NewAddress};

/// Repository for user address operations.
pub struct AddressRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the user's addresses, default first, then newest.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Address>, RepositoryError> {
        let addresses = sqlx::query_as::<_, Address>(
            r"
            SELECT id, user_id, full_name, phone, address_line1, address_line2,
                   city, state, pincode, is_default, created_at
            FROM addresses
            WHERE user_id = $1
            ORDER BY is_default DESC, created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(addresses)
    }

    /// Create an address for the user.
    ///
    /// If the new address is marked default, the user's previous default is
    /// cleared in the same transaction, so at most one default exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn create(
        &self,
        user_id: UserId,
        address: &NewAddress,
    ) -> Result<Address, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        if address.is_default {
            sqlx::query("UPDATE addresses SET is_default = FALSE WHERE user_id = $1")
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        let created = sqlx::query_as::<_, Address>(
            r"
            INSERT INTO addresses (
                user_id, full_name, phone, address_line1, address_line2,
                city, state, pincode, is_default
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, full_name, phone, address_line1, address_line2,
                      city, state, pincode, is_default, created_at
            ",
        )
        .bind(user_id)
        .bind(&address.full_name)
        .bind(&address.phone)
        .bind(&address.address_line1)
        .bind(&address.address_line2)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.pincode)
        .bind(address.is_default)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }

    /// Apply a partial update to one of the user's addresses.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the address doesn't exist or
    /// belongs to another user.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        user_id: UserId,
        address_id: AddressId,
        patch: &AddressPatch,
    ) -> Result<Address, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        if patch.is_default == Some(true) {
            sqlx::query("UPDATE addresses SET is_default = FALSE WHERE user_id = $1")
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        let updated = sqlx::query_as::<_, Address>(
            r"
            UPDATE addresses
            SET full_name = COALESCE($3, full_name),
                phone = COALESCE($4, phone),
                address_line1 = COALESCE($5, address_line1),
                address_line2 = COALESCE($6, address_line2),
                city = COALESCE($7, city),
                state = COALESCE($8, state),
                pincode = COALESCE($9, pincode),
                is_default = COALESCE($10, is_default),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, full_name, phone, address_line1, address_line2,
                      city, state, pincode, is_default, created_at
            ",
        )
        .bind(address_id)
        .bind(user_id)
        .bind(&patch.full_name)
        .bind(&patch.phone)
        .bind(&patch.address_line1)
        .bind(&patch.address_line2)
        .bind(&patch.city)
        .bind(&patch.state)
        .bind(&patch.pincode)
        .bind(patch.is_default)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        tx.commit().await?;

        Ok(updated)
    }

    /// Delete one of the user's addresses.
    ///
    /// # Returns
    ///
    /// Returns `true` if the address was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(
        &self,
        user_id: UserId,
        address_id: AddressId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM addresses
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(address_id)
        .bind(user_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
