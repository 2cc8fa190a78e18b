use super::*;

/// Tests editing a post's title and body.
///
/// Expected: one row touched, content replaced, updated_at moved forward.
#[tokio::test]
async fn rewrites_title_and_body() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::profile::create_profile(db).await?;
    let post = factory::forum_post::create_post(db, author.id).await?;

    let repo = ForumPostRepository::new(db);

    let touched = repo
        .update(
            post.id,
            UpsertForumPostParam {
                title: "Edited".to_string(),
                body: "New body".to_string(),
            },
        )
        .await?;
    assert_eq!(touched, 1);

    let stored = repo.find_by_id(post.id).await?.unwrap();
    assert_eq!(stored.title, "Edited");
    assert_eq!(stored.body, "New body");
    assert!(stored.updated_at >= post.updated_at);

    Ok(())
}

/// Tests updating a post that does not exist.
///
/// Expected: zero rows touched, which the service maps to 404.
#[tokio::test]
async fn missing_post_touches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let touched = ForumPostRepository::new(db)
        .update(
            4242,
            UpsertForumPostParam {
                title: "Ghost".to_string(),
                body: "Ghost".to_string(),
            },
        )
        .await?;

    assert_eq!(touched, 0);

    Ok(())
}
