use anyhow::{Context, Result};
use sqlx::{QueryBuilder, Sqlite};

use super::Database;
use crate::models::{Address, AddressSearchQuery, CreateAddress, UpdateAddress};

impl Database {
    pub async fn get_all_addresses(&self) -> Result<Vec<Address>> {
        let addresses = sqlx::query_as::<_, Address>(
            "SELECT id, house_id, street, city, postal_code, country, notes FROM addresses",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch addresses")?;

        Ok(addresses)
    }

    pub async fn get_address_by_id(&self, id: i64) -> Result<Option<Address>> {
        let address = sqlx::query_as::<_, Address>(
            "SELECT id, house_id, street, city, postal_code, country, notes FROM addresses WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch address by id")?;

        Ok(address)
    }

    pub async fn get_addresses_by_house_id(&self, house_id: i64) -> Result<Vec<Address>> {
        let addresses = sqlx::query_as::<_, Address>(
            "SELECT id, house_id, street, city, postal_code, country, notes FROM addresses WHERE house_id = ?",
        )
        .bind(house_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch addresses by house id")?;

        Ok(addresses)
    }

    pub async fn create_address(&self, address: CreateAddress) -> Result<Address> {
        let address = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (house_id, street, city, postal_code, country, notes)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, house_id, street, city, postal_code, country, notes
            "#,
        )
        .bind(address.house_id)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.postal_code)
        .bind(&address.country)
        .bind(&address.notes)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create address")?;

        Ok(address)
    }

    /// Overwrites the mutable fields of an existing row. `id` and `house_id`
    /// are left untouched. Returns None when no row has `id`.
    pub async fn update_address(
        &self,
        id: i64,
        update: UpdateAddress,
    ) -> Result<Option<Address>> {
        let address = sqlx::query_as::<_, Address>(
            r#"
            UPDATE addresses
            SET street = ?, city = ?, postal_code = ?, country = ?, notes = ?
            WHERE id = ?
            RETURNING id, house_id, street, city, postal_code, country, notes
            "#,
        )
        .bind(&update.street)
        .bind(&update.city)
        .bind(&update.postal_code)
        .bind(&update.country)
        .bind(&update.notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update address")?;

        Ok(address)
    }

    pub async fn delete_address(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete address")?;

        Ok(result.rows_affected() > 0)
    }

    /// Conjunctive substring search. Each non-empty parameter adds a
    /// `column LIKE '%value%'` clause; empty or absent parameters add
    /// nothing, so a filterless query returns the full set.
    pub async fn search_addresses(&self, query: &AddressSearchQuery) -> Result<Vec<Address>> {
        let filters: [(&str, &Option<String>); 5] = [
            ("street", &query.street),
            ("city", &query.city),
            ("postal_code", &query.postal_code),
            ("country", &query.country),
            ("notes", &query.notes),
        ];

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, house_id, street, city, postal_code, country, notes FROM addresses WHERE 1 = 1",
        );

        for (column, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                builder.push(format!(" AND {} LIKE ", column));
                builder.push_bind(format!("%{}%", value));
            }
        }

        let addresses = builder
            .build_query_as::<Address>()
            .fetch_all(&self.pool)
            .await
            .context("Failed to search addresses")?;

        Ok(addresses)
    }
}
