use std::fs::{self, File};
use std::io::Write as _;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use tracing::debug;

use crate::name::ComponentName;
use crate::template::{self, Mode, Templates};
use crate::utils::Result;

pub struct Component {
    pub name: ComponentName,
    pub base: PathBuf,
    pub templates: Templates,
}

impl Component {
    pub fn new(name: ComponentName, base: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            name,
            base: base.into(),
            templates: template::templates(mode),
        }
    }

    /// Directory the files are written to. A `.` base is dropped so the root
    /// reads as the bare component name.
    pub fn root(&self) -> PathBuf {
        if self.base == Path::new(".") {
            PathBuf::from(self.name.as_str())
        } else {
            self.base.join(self.name.as_str())
        }
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().copied()
    }

    /// Root followed by one line per file, the last one closing the branch.
    pub fn tree(&self) -> String {
        let mut tree = format!("{}{}\n", self.root().display(), MAIN_SEPARATOR);
        let count = self.templates.len();
        for (i, filename) in self.files().enumerate() {
            let branch = if i + 1 == count { "\\----" } else { "|----" };
            tree.push_str(&format!("    {branch} {filename}\n"));
        }
        tree
    }

    /// Writes every rendered template under [`Component::root`], creating it if
    /// needed. Existing files are truncated. A failure leaves the files already
    /// written in place.
    pub fn write(&self) -> Result<PathBuf> {
        let root = self.root();
        if !root.exists() {
            fs::create_dir_all(&root)?;
            debug!(root = %root.display(), "created component directory");
        }
        for (filename, body) in &self.templates {
            let path = root.join(filename);
            let mut file = File::create(&path)?;
            file.write_all(template::render(body, self.name.as_str()).as_bytes())?;
            debug!(path = %path.display(), "wrote file");
        }
        Ok(root)
    }
}
