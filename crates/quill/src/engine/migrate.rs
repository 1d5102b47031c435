use super::Engine;
use crate::{Model, Result, Session};

use quill_core::err;

impl Engine {
    /// Brings the table of `M` in line with its fields, in one transaction.
    ///
    /// A missing table is created. Columns missing from the table are added;
    /// when the table has columns `M` no longer maps, it is rebuilt from the
    /// mapped columns.
    pub async fn migrate<M: Model>(&self) -> Result<()> {
        self.transaction(|session| Box::pin(migrate_table::<M>(session)))
            .await
    }
}

async fn migrate_table<M: Model>(session: &mut Session) -> Result<()> {
    session.model::<M>()?;

    if !session.has_table().await? {
        log::info!("table {} doesn't exist", M::def().name);
        return session.create_table().await;
    }

    let table = session.ref_table()?.clone();

    let rows = session
        .raw(format!("SELECT * FROM {} LIMIT 1", table.table_name), ())
        .query_rows()
        .await?;
    let columns = rows.columns().to_vec();

    let added = difference(table.field_names(), &columns);
    let dropped = difference(&columns, table.field_names());
    log::info!("added cols {added:?}, deleted cols {dropped:?}");

    for name in &added {
        let field = table
            .field(name)
            .ok_or_else(|| err!("`{}` has no field `{name}`", table.name))?;

        session
            .raw(
                format!(
                    "ALTER TABLE {} ADD COLUMN {} {}",
                    table.table_name, field.name, field.ty
                ),
                (),
            )
            .exec()
            .await?;
    }

    if dropped.is_empty() {
        return Ok(());
    }

    let tmp = format!("tmp_{}", table.table_name);
    let fields = table.field_names().join(", ");

    for sql in [
        format!("CREATE TABLE {tmp} AS SELECT {fields} from {}", table.table_name),
        format!("DROP TABLE {}", table.table_name),
        format!("ALTER TABLE {tmp} RENAME TO {}", table.table_name),
    ] {
        session.raw(sql, ()).exec().await?;
    }

    Ok(())
}

/// Entries of `a` not in `b`, in the order of `a`.
fn difference(a: &[String], b: &[String]) -> Vec<String> {
    a.iter().filter(|name| !b.contains(*name)).cloned().collect()
}
