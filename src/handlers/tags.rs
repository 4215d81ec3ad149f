use serde_json::Value;

use crate::api::LinkdingApi;
use crate::args::TagsCmd;
use crate::error::CliError;
use crate::payload;
use crate::print::Output;

pub async fn handle(api: &dyn LinkdingApi, cmd: TagsCmd) -> Result<Output, CliError> {
    match cmd {
        TagsCmd::All { limit, offset } => all(api, limit, offset).await,
        TagsCmd::Get { tag_id } => {
            let data = api.tag(tag_id).await?;
            Ok(Output::Json(data))
        }
        TagsCmd::Create { tag_name } => {
            let data = api.create_tag(&tag_name).await?;
            Ok(Output::Json(data))
        }
    }
}

async fn all(
    api: &dyn LinkdingApi,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Result<Output, CliError> {
    let params = payload::build([
        ("limit", limit.map(Value::from)),
        ("offset", offset.map(Value::from)),
    ]);

    let data = api.tags(&params).await?;
    Ok(Output::Json(data))
}
