//! Command-line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

use crate::state::ChapterDispatch;

/// Story server configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "cyoa-web", version, about = "Choose-your-own-adventure story server")]
pub struct ServerConfig {
    /// The story file.
    #[arg(long, env = "STORY_FILE", default_value = "gopher.json")]
    pub file: PathBuf,

    /// The server port.
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Address to bind.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Serve the chapter named by the request path instead of always `intro`.
    #[arg(long, env = "FOLLOW_LINKS")]
    pub follow_links: bool,
}

impl ServerConfig {
    /// The address the listener binds to.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// How request paths map to chapters.
    #[must_use]
    pub fn dispatch(&self) -> ChapterDispatch {
        if self.follow_links {
            ChapterDispatch::FollowLinks
        } else {
            ChapterDispatch::IntroOnly
        }
    }
}
