use super::*;

/// Tests pagination metadata and alphabetical ordering by name.
///
/// Expected: total counts all rows; pages are sliced per_page in name order.
#[tokio::test]
async fn paginates_profiles_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alice", "Bob"] {
        factory::profile::ProfileFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = ProfileRepository::new(db);

    let (page_zero, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(page_zero.len(), 2);
    assert_eq!(page_zero[0].name, "Alice");
    assert_eq!(page_zero[1].name, "Bob");

    let (page_one, _) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(page_one.len(), 1);
    assert_eq!(page_one[0].name, "Charlie");

    Ok(())
}

/// Tests paginating an empty table.
///
/// Expected: empty page with zero total.
#[tokio::test]
async fn returns_empty_page_for_no_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (profiles, total) = ProfileRepository::new(db).get_all_paginated(0, 25).await?;

    assert!(profiles.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
