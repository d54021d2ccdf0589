//! Top level subcommands

pub(crate) mod command;
pub(crate) mod content_type;
pub(crate) mod decode;
pub(crate) mod encode;
