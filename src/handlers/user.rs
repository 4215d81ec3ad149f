use crate::api::LinkdingApi;
use crate::args::UserCmd;
use crate::error::CliError;
use crate::print::Output;

pub async fn handle(api: &dyn LinkdingApi, cmd: UserCmd) -> Result<Output, CliError> {
    match cmd {
        UserCmd::Profile => {
            let data = api.user_profile().await?;
            Ok(Output::Json(data))
        }
    }
}
