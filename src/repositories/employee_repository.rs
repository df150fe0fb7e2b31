//! Repositorio de empleados

use sqlx::PgPool;

use crate::models::employee::Employee;
use crate::utils::errors::AppError;

pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id_and_name(
        &self,
        id: i64,
        name: &str,
    ) -> Result<Option<Employee>, AppError> {
        let employee =
            sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1 AND name = $2")
                .bind(id)
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(employee)
    }
}
