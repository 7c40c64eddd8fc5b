//! Test helpers for writing snapshots, locating fixtures and stubbing the
//! café source.

use crate::CliError;
use crate::nearby::CafeSourceBuilder;
use camino::{Utf8Path, Utf8PathBuf};
use std::cell::RefCell;
use std::fs;
use vibe_core::CafeSource;
use vibe_data::source::HttpCafeSourceConfig;

/// Write `contents` to `path`, creating parent directories as needed.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(path, contents).expect("write file");
}

/// Path of the shared `/cafes` response fixture.
pub(super) fn cafes_fixture() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cafes.json")
}

/// Builder handing out clones of a fixed source and recording the config it
/// was asked to build for.
#[derive(Debug)]
pub(super) struct FixedSourceBuilder<S> {
    source: S,
    seen: RefCell<Option<HttpCafeSourceConfig>>,
}

impl<S> FixedSourceBuilder<S> {
    pub(super) const fn new(source: S) -> Self {
        Self {
            source,
            seen: RefCell::new(None),
        }
    }

    /// Config passed to the most recent `build` call.
    pub(super) fn seen(&self) -> Option<HttpCafeSourceConfig> {
        self.seen.borrow().clone()
    }
}

impl<S> CafeSourceBuilder for FixedSourceBuilder<S>
where
    S: CafeSource + Clone + 'static,
{
    fn build(&self, config: &HttpCafeSourceConfig) -> Result<Box<dyn CafeSource>, CliError> {
        self.seen.replace(Some(config.clone()));
        Ok(Box::new(self.source.clone()))
    }
}
