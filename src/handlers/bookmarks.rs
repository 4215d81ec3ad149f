use serde_json::Value;

use crate::api::LinkdingApi;
use crate::args::{BookmarkCreateArgs, BookmarkUpdateArgs, BookmarksCmd};
use crate::error::{CliError, NO_UPDATE_FIELDS};
use crate::payload;
use crate::print::Output;

pub async fn handle(api: &dyn LinkdingApi, cmd: BookmarksCmd) -> Result<Output, CliError> {
    match cmd {
        BookmarksCmd::All {
            archived,
            limit,
            offset,
            query,
        } => all(api, archived, limit, offset, query).await,
        BookmarksCmd::Get { bookmark_id } => get(api, bookmark_id).await,
        BookmarksCmd::Create(args) => create(api, args).await,
        BookmarksCmd::Update(args) => update(api, args).await,
        BookmarksCmd::Delete { bookmark_id } => {
            api.delete_bookmark(bookmark_id).await?;
            Ok(confirmation(bookmark_id, "deleted"))
        }
        BookmarksCmd::Archive { bookmark_id } => {
            api.archive_bookmark(bookmark_id).await?;
            Ok(confirmation(bookmark_id, "archived"))
        }
        BookmarksCmd::Unarchive { bookmark_id } => {
            api.unarchive_bookmark(bookmark_id).await?;
            Ok(confirmation(bookmark_id, "unarchived"))
        }
    }
}

async fn all(
    api: &dyn LinkdingApi,
    archived: bool,
    limit: Option<u32>,
    offset: Option<u32>,
    query: Option<String>,
) -> Result<Output, CliError> {
    let params = payload::build([
        ("limit", limit.map(Value::from)),
        ("offset", offset.map(Value::from)),
        ("query", query.map(Value::from)),
    ]);

    let data = if archived {
        api.archived_bookmarks(&params).await?
    } else {
        api.bookmarks(&params).await?
    };
    Ok(Output::Json(data))
}

async fn get(api: &dyn LinkdingApi, bookmark_id: u64) -> Result<Output, CliError> {
    let data = api.bookmark(bookmark_id).await?;
    Ok(Output::Json(data))
}

async fn create(api: &dyn LinkdingApi, args: BookmarkCreateArgs) -> Result<Output, CliError> {
    let BookmarkCreateArgs {
        url,
        archived,
        description,
        notes,
        shared,
        tags,
        title,
        unread,
    } = args;

    let payload = payload::build([
        ("title", title.map(Value::from)),
        ("description", description.map(Value::from)),
        ("notes", notes.map(Value::from)),
        ("tag_names", tags.as_deref().map(tag_names)),
        ("is_archived", Some(Value::from(archived))),
        ("unread", Some(Value::from(unread))),
        ("shared", Some(Value::from(shared))),
    ]);

    let data = api.create_bookmark(&url, &payload).await?;
    Ok(Output::Json(data))
}

async fn update(api: &dyn LinkdingApi, args: BookmarkUpdateArgs) -> Result<Output, CliError> {
    if !args.has_fields() {
        return Err(CliError::Validation(NO_UPDATE_FIELDS));
    }

    let BookmarkUpdateArgs {
        bookmark_id,
        url,
        description,
        notes,
        shared,
        tags,
        title,
        unread,
    } = args;

    let payload = payload::build([
        ("url", url.map(Value::from)),
        ("title", title.map(Value::from)),
        ("description", description.map(Value::from)),
        ("notes", notes.map(Value::from)),
        ("tag_names", tags.as_deref().map(tag_names)),
        ("unread", Some(Value::from(unread))),
        ("shared", Some(Value::from(shared))),
    ]);

    let data = api.update_bookmark(bookmark_id, &payload).await?;
    Ok(Output::Json(data))
}

fn tag_names(raw: &str) -> Value {
    Value::from(payload::split_tags(raw))
}

fn confirmation(bookmark_id: u64, outcome: &str) -> Output {
    Output::Message(format!("Bookmark {bookmark_id} {outcome}."))
}
