use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod connect;

#[derive(From, Subcommand)]
pub enum Applet {
    Connect(connect::Connect),
}

impl Applet {
    pub async fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Connect(a) => Ok(a.execute().await?),
        }
    }
}
