//! INI-style engine configuration (`misc` / `servers` / per-server sections).

use std::path::{Path, PathBuf};

use ini::Ini;

use super::error::{EngineError, Result};

/// Transfer mode selecting how `copyArticle` dispatches a fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Archive-style copy: `ARTICLE` on the source only, no destination write.
    Reader,
    /// Same as `Reader`; kept as a distinct variant to match the legacy name.
    Reader1,
    /// Ask-first: `IHAVE` on destination, then fetch from source if wanted.
    Ihave,
    /// Fetch-first: `ARTICLE` on source, then offer via `IHAVE`.
    Ihave2,
    /// `POST` with a header whitelist.
    Post,
    /// Count messages in an mbox file; does not transmit anywhere.
    Mbox,
}

impl Mode {
    fn parse(s: &str) -> Result<Self> {
        Ok(match s {
            "reader" => Mode::Reader,
            "reader1" => Mode::Reader1,
            "ihave" => Mode::Ihave,
            "ihave2" => Mode::Ihave2,
            "post" => Mode::Post,
            "mbox" => Mode::Mbox,
            other => {
                return Err(EngineError::Config(format!(
                    "unrecognized mode '{other}' (expected reader, reader1, ihave, ihave2, post, or mbox)"
                )))
            }
        })
    }
}

/// Connection details for one named server (`servers.from` / `servers.to`).
#[derive(Debug, Clone)]
pub struct ServerEntry {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Immutable engine configuration, passed by `Arc` to every component at construction.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub newsdb: PathBuf,
    pub pidfile: PathBuf,
    pub should_mark_articles: bool,
    pub max_articles: u64,
    pub workers: usize,
    pub mode: Mode,
    pub filter_list: Option<PathBuf>,
    pub global_filter_list: Option<PathBuf>,
    pub forced_list: Option<PathBuf>,
    pub use_ignore: bool,
    pub done_list: Option<PathBuf>,
    pub source: ServerEntry,
    pub destination: ServerEntry,
    pub mbox_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Load and validate configuration from an INI file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ini = Ini::load_from_file(path)
            .map_err(|e| EngineError::Config(format!("cannot read {}: {e}", path.display())))?;

        let misc = ini.section(Some("misc"));
        let get_misc = |key: &str| misc.and_then(|s| s.get(key));

        let newsdb = get_misc("newsdb").unwrap_or("newsdb").into();
        let pidfile = get_misc("pidfile").unwrap_or("nntpsucka.pid").into();
        let should_mark_articles = get_misc("shouldMarkArticles")
            .map(parse_bool)
            .unwrap_or(Ok(true))?;
        let max_articles = get_misc("maxArticles")
            .map(|v| v.parse::<u64>())
            .transpose()
            .map_err(|e| EngineError::Config(format!("maxArticles: {e}")))?
            .unwrap_or(0);
        let workers = get_misc("workers")
            .map(|v| v.parse::<usize>())
            .transpose()
            .map_err(|e| EngineError::Config(format!("workers: {e}")))?
            .unwrap_or(4);
        let mode = Mode::parse(get_misc("mode").unwrap_or("ihave"))?;
        let filter_list = get_misc("filterList").map(PathBuf::from);
        let global_filter_list = get_misc("globalfilterList").map(PathBuf::from);
        let forced_list = get_misc("forcedList").map(PathBuf::from);
        let use_ignore = get_misc("useIgnore").map(parse_bool).unwrap_or(Ok(false))?;
        let done_list = get_misc("doneList").map(PathBuf::from);
        let mbox_path = get_misc("mboxPath").map(PathBuf::from);
        let default_port: u16 = get_misc("port")
            .map(|v| v.parse::<u16>())
            .transpose()
            .map_err(|e| EngineError::Config(format!("port: {e}")))?
            .unwrap_or(119);

        let servers = ini
            .section(Some("servers"))
            .ok_or_else(|| EngineError::Config("missing [servers] section".into()))?;
        let from = servers
            .get("from")
            .ok_or_else(|| EngineError::Config("missing servers.from".into()))?;
        let to = servers
            .get("to")
            .ok_or_else(|| EngineError::Config("missing servers.to".into()))?;

        let source = Self::read_server(&ini, from, default_port)?;
        let destination = Self::read_server(&ini, to, default_port)?;

        Ok(Self {
            newsdb,
            pidfile,
            should_mark_articles,
            max_articles,
            workers,
            mode,
            filter_list,
            global_filter_list,
            forced_list,
            use_ignore,
            done_list,
            source,
            destination,
            mbox_path,
        })
    }

    fn read_server(ini: &Ini, name: &str, default_port: u16) -> Result<ServerEntry> {
        let section = ini.section(Some(name));
        let port = section
            .and_then(|s| s.get("port"))
            .map(|v| v.parse::<u16>())
            .transpose()
            .map_err(|e| EngineError::Config(format!("{name}.port: {e}")))?
            .unwrap_or(default_port);
        Ok(ServerEntry {
            host: name.to_string(),
            port,
            username: section.and_then(|s| s.get("username")).map(String::from),
            password: section.and_then(|s| s.get("password")).map(String::from),
        })
    }
}

fn parse_bool(s: &str) -> Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(EngineError::Config(format!("not a boolean: '{other}'"))),
    }
}
