#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod convert;
pub mod link;
pub mod render;
pub mod session;

pub use config::{ConfigError, Settings};
pub use convert::{convert, Conversion, ConversionError};
pub use link::{
    classify, extract_repo_info, is_valid_url, parse, LinkKind, ParseError, ParsedLink, RepoInfo,
};
pub use render::{render, DEFAULT_BRANCH};
pub use session::{ActionError, Clipboard, LinkOpener, Notice, NoticeLevel, Session};
