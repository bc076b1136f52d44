//! Named contexts within one contexts directory

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::Value;

use crate::{Context, ContextFormat, Document, Error, Result, validate_name};
use occtx_fs::{io, is_context_entry};

/// File-backed store of contexts, bound to a single directory.
///
/// Performs no state bookkeeping; the manager decides when an operation is
/// allowed.
#[derive(Debug, Clone)]
pub struct ContextRepository {
    dir: PathBuf,
}

impl ContextRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Enumerate saved contexts, sorted by name.
    ///
    /// Only entries that resolve to regular files count, so symlinked
    /// contexts are listed and links to directories are not. Hidden files
    /// (including the state file) and anything that is not `.json`/`.jsonc`
    /// are skipped. A missing directory is empty.
    pub fn list(&self) -> Result<Vec<Context>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(occtx_fs::Error::io(&self.dir, e).into()),
        };

        let mut contexts = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| occtx_fs::Error::io(&self.dir, e))?;
            if !is_context_entry(&entry) {
                continue;
            }

            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };

            let path = entry.path();
            let Some(format) = ContextFormat::from_path(&path) else {
                continue;
            };
            let name = &file_name[..file_name.len() - format.extension().len() - 1];
            if name.is_empty() {
                continue;
            }

            contexts.push(Context::located(name, path, format));
        }

        contexts.sort_by(|a, b| a.name.cmp(&b.name).then(a.format.extension().cmp(b.format.extension())));
        Ok(contexts)
    }

    /// Locate the file for `name`, preferring `.json` over `.jsonc`.
    pub fn resolve(&self, name: &str) -> Result<Context> {
        validate_name(name)?;
        self.existing(name)?.ok_or_else(|| Error::NotFound {
            name: name.to_string(),
        })
    }

    /// Locate and parse a context.
    pub fn get(&self, name: &str) -> Result<Context> {
        self.load(name).map(|(context, _)| context)
    }

    /// Locate and parse a context, returning the exact bytes that were parsed.
    pub fn load(&self, name: &str) -> Result<(Context, Vec<u8>)> {
        let mut context = self.resolve(name)?;
        let raw = io::read_bytes(&context.file_path)?;
        context.data = Some(parse_document(name, context.format, &raw)?);
        Ok((context, raw))
    }

    /// Raw stored bytes of a context, comment header included.
    pub fn read_raw(&self, name: &str) -> Result<Vec<u8>> {
        let context = self.resolve(name)?;
        Ok(io::read_bytes(&context.file_path)?)
    }

    /// Create a context from the active configuration at `source`.
    pub fn create(&self, name: &str, format: ContextFormat, source: &Path) -> Result<Context> {
        validate_name(name)?;
        io::ensure_dir(&self.dir)?;
        self.ensure_free(name)?;

        let raw = match io::read_bytes(source) {
            Ok(raw) => raw,
            Err(e) if e.is_not_found() => {
                return Err(Error::source_invalid(source, "no active opencode.json found"));
            }
            Err(e) => return Err(e.into()),
        };
        let document = parse_object(&raw)
            .map_err(|message| Error::source_invalid(source, format!("not valid JSON: {}", message)))?;

        let context = Context::located(name, self.path_for(name, format), format);
        let content = format.render(name, &Value::Object(document), Local::now())?;
        io::write_atomic(&context.file_path, &content)?;

        tracing::info!(name, format = %format, path = %context.file_path.display(), "context created");
        Ok(context)
    }

    /// Create a plain JSON context from caller-supplied bytes.
    pub fn import(&self, name: &str, input: &[u8]) -> Result<Context> {
        validate_name(name)?;
        if input.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::SourceInvalid {
                source_name: "input".into(),
                message: "no input provided".into(),
            });
        }
        let document = parse_object(input).map_err(|message| Error::SourceInvalid {
            source_name: "input".into(),
            message: format!("not valid JSON: {}", message),
        })?;

        io::ensure_dir(&self.dir)?;
        self.ensure_free(name)?;

        let context = Context::located(name, self.path_for(name, ContextFormat::Json), ContextFormat::Json);
        let content = occtx_fs::json::to_pretty_bytes(&document)?;
        io::write_atomic(&context.file_path, &content)?;

        tracing::info!(name, path = %context.file_path.display(), "context imported");
        Ok(context)
    }

    /// Remove a context file.
    pub fn delete(&self, name: &str) -> Result<Context> {
        let context = self.resolve(name)?;
        fs::remove_file(&context.file_path).map_err(|e| occtx_fs::Error::io(&context.file_path, e))?;
        tracing::info!(name, path = %context.file_path.display(), "context deleted");
        Ok(context)
    }

    /// Rename a context file, keeping its format.
    ///
    /// The new name must be free under every extension. An embedded JSONC
    /// header keeps mentioning the old name.
    pub fn rename(&self, old_name: &str, new_name: &str) -> Result<Context> {
        validate_name(old_name)?;
        validate_name(new_name)?;

        let old = self.resolve(old_name)?;
        self.ensure_free(new_name)?;

        let new = Context::located(new_name, self.path_for(new_name, old.format), old.format);
        fs::rename(&old.file_path, &new.file_path).map_err(|e| occtx_fs::Error::io(&new.file_path, e))?;

        tracing::info!(from = old_name, to = new_name, "context renamed");
        Ok(new)
    }

    fn path_for(&self, name: &str, format: ContextFormat) -> PathBuf {
        self.dir.join(format.file_name(name))
    }

    /// First existing file for `name` in priority order.
    fn existing(&self, name: &str) -> Result<Option<Context>> {
        for format in ContextFormat::ALL {
            let path = self.path_for(name, format);
            if io::file_exists(&path)? {
                return Ok(Some(Context::located(name, path, format)));
            }
        }
        Ok(None)
    }

    fn ensure_free(&self, name: &str) -> Result<()> {
        match self.existing(name)? {
            Some(existing) => Err(Error::AlreadyExists {
                name: name.to_string(),
                format: existing.format,
            }),
            None => Ok(()),
        }
    }
}

/// Parse stored bytes of the given format into a JSON object.
fn parse_document(name: &str, format: ContextFormat, raw: &[u8]) -> Result<Document> {
    let invalid = |message: String| Error::InvalidContent {
        name: name.to_string(),
        message,
    };
    let text = std::str::from_utf8(raw).map_err(|e| invalid(e.to_string()))?;
    parse_object(format.strip(text).as_bytes()).map_err(invalid)
}

fn parse_object(raw: &[u8]) -> std::result::Result<Document, String> {
    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("expected a JSON object".to_string()),
        Err(e) => Err(e.to_string()),
    }
}
