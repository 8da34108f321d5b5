use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::model::prompt::SessionUser;

#[derive(Debug, Parser)]
#[command(name = "promptfeed", about = "Serve the prompt feed")]
pub struct Cli {
    /// Directory holding the compiled site bundle
    #[arg(long, env = "LEPTOS_SITE_ROOT", default_value = "target/site")]
    pub site_root: String,

    /// Address to listen on
    #[arg(long, env = "LEPTOS_SITE_ADDR", default_value = "0.0.0.0:3000")]
    pub site_addr: SocketAddr,

    /// JSON file with the prompts served at /api/prompt
    #[arg(long, env = "PROMPTFEED_PROMPTS")]
    pub prompts: Option<PathBuf>,

    /// Treat every request as signed in with this user id
    #[arg(long, env = "PROMPTFEED_DEV_USER_ID")]
    pub dev_user_id: Option<String>,

    /// Display name of the development user
    #[arg(long, env = "PROMPTFEED_DEV_USER_NAME")]
    pub dev_user_name: Option<String>,
}

impl Cli {
    pub fn dev_session(&self) -> Option<SessionUser> {
        self.dev_user_id.as_ref().map(|id| SessionUser {
            id: id.clone(),
            name: self.dev_user_name.clone(),
            email: None,
            image: None,
        })
    }
}
