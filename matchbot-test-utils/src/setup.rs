/// Create a [`TestContext`](crate::TestContext) with only the listed entity tables.
///
/// With no arguments the database is left empty, which is useful for asserting that operations
/// fail when their tables are missing.
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Create a [`TestContext`](crate::TestContext) with every matchbot table.
#[macro_export]
macro_rules! test_setup_with_all_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;
            setup.with_tables($crate::TestContext::all_tables()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
