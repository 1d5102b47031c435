use super::{run_hook, Session};
use crate::{IntoAssignments, Model, Result};

use quill_core::{stmt::Type, Error};
use quill_sql::{Args, Kind};

impl Session {
    /// Inserts `records` with a single `INSERT ... VALUES` statement and
    /// returns the number of rows affected.
    ///
    /// Inserting nothing executes nothing and returns `0`.
    pub async fn insert<'a, M: Model>(
        &mut self,
        records: impl IntoIterator<Item = &'a M>,
    ) -> Result<u64> {
        let res = self.insert_records(records).await;
        self.reset();
        res
    }

    async fn insert_records<'a, M: Model>(
        &mut self,
        records: impl IntoIterator<Item = &'a M>,
    ) -> Result<u64> {
        let table = self.bind::<M>()?;
        let mut rows = vec![];

        for record in records {
            run_hook!(self, "before_insert", record.before_insert(self));

            self.clause.set(Args::Insert {
                table: table.schema.table_name.clone(),
                fields: table.schema.field_names().to_vec(),
            });
            rows.push(table.schema.record_values(record)?);
        }

        if rows.is_empty() {
            return Ok(0);
        }

        self.clause.set(Args::Values(rows));
        let stmt = self.take_statement(&[Kind::Insert, Kind::Values]);
        let count = self.exec_count(stmt).await?;

        run_hook!(self, "after_insert", table.hooks.after_insert(self));
        Ok(count)
    }

    /// Appends the matching records to `dest`, in result order.
    ///
    /// If a row fails to load, the records loaded before it stay in `dest`.
    pub async fn find<M: Model>(&mut self, dest: &mut Vec<M>) -> Result<()> {
        let res = self.find_records(dest).await;
        self.reset();
        res
    }

    async fn find_records<M: Model>(&mut self, dest: &mut Vec<M>) -> Result<()> {
        let table = self.bind::<M>()?;

        run_hook!(self, "before_query", table.hooks.before_query(self));

        self.clause.set(Args::Select {
            table: table.schema.table_name.clone(),
            fields: table.schema.field_names().to_vec(),
        });
        let stmt = self.take_statement(&[Kind::Select, Kind::Where, Kind::OrderBy, Kind::Limit]);
        let ret = table.schema.fields().map(|field| field.native).collect();

        let mut rows = self.exec_query(stmt, ret).await?;

        while let Some(row) = rows.next().await {
            let mut record = M::load(row?)?;
            run_hook!(self, "after_query", record.after_query(self));
            dest.push(record);
        }

        Ok(())
    }

    /// Loads every matching record.
    pub async fn all<M: Model>(&mut self) -> Result<Vec<M>> {
        let mut dest = vec![];
        self.find(&mut dest).await?;
        Ok(dest)
    }

    /// Loads the first matching record.
    ///
    /// Fails with [`Error::record_not_found`] when nothing matches.
    pub async fn first<M: Model>(&mut self) -> Result<M> {
        self.limit(1);

        let mut dest = Vec::with_capacity(1);
        self.find(&mut dest).await?;

        dest.pop()
            .ok_or_else(|| Error::record_not_found(format!("table={}", M::def().name)))
    }

    /// Sets columns of the matching rows of the bound model and returns the
    /// number of rows affected.
    pub async fn update(&mut self, values: impl IntoAssignments) -> Result<u64> {
        let res = self.update_records(values).await;
        self.reset();
        res
    }

    async fn update_records(&mut self, values: impl IntoAssignments) -> Result<u64> {
        let table = self.table()?.clone();
        let assignments = values.into_assignments()?;

        if assignments.is_empty() {
            return Err(Error::invalid_statement("update without any assignment"));
        }

        run_hook!(self, "before_update", table.hooks.before_update(self));

        self.clause.set(Args::Update {
            table: table.schema.table_name.clone(),
            assignments,
        });
        let stmt = self.take_statement(&[Kind::Update, Kind::Where]);
        let count = self.exec_count(stmt).await?;

        run_hook!(self, "after_update", table.hooks.after_update(self));
        Ok(count)
    }

    /// Deletes the matching rows of the bound model and returns the number of
    /// rows affected.
    pub async fn delete(&mut self) -> Result<u64> {
        let res = self.delete_records().await;
        self.reset();
        res
    }

    async fn delete_records(&mut self) -> Result<u64> {
        let table = self.table()?.clone();

        run_hook!(self, "before_delete", table.hooks.before_delete(self));

        self.clause.set(Args::Delete {
            table: table.schema.table_name.clone(),
        });
        let stmt = self.take_statement(&[Kind::Delete, Kind::Where]);
        let count = self.exec_count(stmt).await?;

        run_hook!(self, "after_delete", table.hooks.after_delete(self));
        Ok(count)
    }

    /// Counts the matching rows of the bound model.
    pub async fn count(&mut self) -> Result<i64> {
        let res = self.count_records().await;
        self.reset();
        res
    }

    async fn count_records(&mut self) -> Result<i64> {
        let table_name = self.ref_table()?.table_name.clone();

        self.clause.set(Args::Count { table: table_name });
        let stmt = self.take_statement(&[Kind::Count, Kind::Where]);

        let mut rows = self.exec_query(stmt, vec![Type::I64]).await?;

        let Some(row) = rows.next().await else {
            return Err(Error::invalid_result("count returned no rows"));
        };

        let mut row = row?;
        if row.is_empty() {
            return Err(Error::invalid_result("count returned no columns"));
        }

        i64::try_from(row.take(0))
    }
}
