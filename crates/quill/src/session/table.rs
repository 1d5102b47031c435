use super::Session;
use crate::Result;

use quill_core::stmt::{Statement, Type};

impl Session {
    /// Creates the table of the bound model unless it exists.
    pub async fn create_table(&mut self) -> Result<()> {
        let schema = self.ref_table()?;
        let columns = schema
            .fields()
            .map(|field| field.column_def())
            .collect::<Vec<_>>()
            .join(", ");
        let stmt = Statement::sql(format!(
            "CREATE TABLE IF NOT EXISTS {} ({columns})",
            schema.table_name
        ));

        self.exec_count(stmt).await?;
        Ok(())
    }

    pub async fn drop_table(&mut self) -> Result<()> {
        let stmt = Statement::sql(format!(
            "DROP TABLE IF EXISTS {}",
            self.ref_table()?.table_name
        ));

        self.exec_count(stmt).await?;
        Ok(())
    }

    /// Returns `true` if the table of the bound model exists.
    pub async fn has_table(&mut self) -> Result<bool> {
        let table_name = self.ref_table()?.table_name.clone();
        let stmt = self.dialect.table_exist_sql(&table_name);

        let mut rows = self.exec_query(stmt, vec![Type::String]).await?;

        Ok(match rows.next().await.transpose()? {
            Some(row) => row.first().and_then(|name| name.as_str()) == Some(&*table_name),
            None => false,
        })
    }
}
