use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

pub const MAX_LOGO_LINES: usize = 20;
/// Measured in grapheme clusters.
pub const MAX_LINE_WIDTH: usize = 50;
pub const DEFAULT_LOGO: &str = "default";

/// The lines of one logo, already cut down to the display limits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Logo {
    lines: Vec<String>,
}

impl Logo {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Widest line in grapheme clusters, 0 for an empty logo.
    pub fn width(&self) -> usize {
        self.lines.iter().map(|line| display_width(line)).max().unwrap_or(0)
    }

    pub fn read_from(reader: impl BufRead) -> io::Result<Self> {
        Ok(Self {
            lines: read_lines(reader, MAX_LOGO_LINES)?,
        })
    }
}

pub fn display_width(line: &str) -> usize {
    line.graphemes(true).count()
}

/// Asset key for a distribution name: lowercase, alphanumerics only.
/// `"Ubuntu 22.04.3 LTS"` becomes `"ubuntu22043lts"`.
pub fn normalize(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Looks up logo assets (`<key>.txt`) in a directory.
pub struct LogoResolver {
    dir: PathBuf,
}

impl LogoResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Logo for `distro`, else the default logo, else an empty one.
    pub fn resolve(&self, distro: &str) -> Logo {
        let key = normalize(distro);
        if !key.is_empty() {
            match self.load(&key) {
                Ok(logo) => return logo,
                Err(e) => debug!(%key, error = %e, "no logo asset, using default"),
            }
        }

        self.load(DEFAULT_LOGO).unwrap_or_else(|e| {
            debug!(error = %e, "default logo unavailable");
            Logo::default()
        })
    }

    fn asset_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.txt"))
    }

    fn load(&self, key: &str) -> io::Result<Logo> {
        let path = self.asset_path(key);
        let file = open(&path)?;
        Logo::read_from(BufReader::new(file))
    }
}

fn open(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        ));
    }
    Ok(file)
}

/// Reads at most `count` lines, each stripped of its line ending and cut to
/// [`MAX_LINE_WIDTH`] graphemes.
fn read_lines(mut reader: impl BufRead, count: usize) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    while lines.len() < count {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        lines.push(line.graphemes(true).take(MAX_LINE_WIDTH).collect());
    }
    Ok(lines)
}
