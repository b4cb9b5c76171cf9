//! Shortcuts for tests that only need an empty schema.

/// Create a [`TestContext`](crate::TestContext) with tables for the provided entities.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::Users, entity::prelude::Projects)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Create a [`TestContext`](crate::TestContext) with every GHTorrent table.
#[macro_export]
macro_rules! test_setup_with_ghtorrent_tables {
    () => {{
        $crate::TestBuilder::new()
            .with_ghtorrent_tables()
            .build()
            .await
    }};
}
