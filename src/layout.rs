use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use crate::templates;

const UNITY_TEMPLATE: &str = "unity/layout.toml";

/// The folder tree to scaffold: a base folder, the marker file name, and the
/// ordered list of directories below the base.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Layout {
    pub base: String,
    pub marker: String,
    pub directories: Vec<String>,
}

/// One directory of a layout resolved against a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry {
    pub relative: String,
    pub dir: Utf8PathBuf,
    pub marker: Utf8PathBuf,
}

impl Layout {
    /// The built-in Unity `Assets` layout compiled into the binary.
    pub fn unity() -> Result<Self> {
        let raw = templates::get_string(UNITY_TEMPLATE)?;
        Self::from_toml(&raw).with_context(|| format!("loading layout `{}`", UNITY_TEMPLATE))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let layout: Layout = toml::from_str(raw).context("parsing layout")?;
        layout.validate()?;
        Ok(layout)
    }

    fn validate(&self) -> Result<()> {
        if self.base.is_empty() {
            bail!("layout base must not be empty");
        }
        if self.marker.is_empty() {
            bail!("layout marker must not be empty");
        }
        if self.directories.is_empty() {
            bail!("layout has no directories");
        }
        if let Some(index) = self.directories.iter().position(String::is_empty) {
            bail!("layout directory #{} is empty", index + 1);
        }
        Ok(())
    }

    /// Resolve every directory against `root`, keeping list order.
    pub fn entries(&self, root: &Utf8Path) -> Vec<LayoutEntry> {
        let base = root.join(&self.base);
        self.directories
            .iter()
            .map(|relative| {
                let dir = base.join(relative);
                let marker = dir.join(&self.marker);
                LayoutEntry {
                    relative: relative.clone(),
                    dir,
                    marker,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_layout_matches_asset_folders() {
        let layout = Layout::unity().unwrap();
        assert_eq!(layout.base, "Assets");
        assert_eq!(layout.marker, ".gitkeep");
        assert_eq!(layout.directories.len(), 17);
        assert_eq!(layout.directories.first().map(String::as_str), Some("Scripts/Core"));
        assert_eq!(
            layout.directories.last().map(String::as_str),
            Some("StreamingAssets/dictionary")
        );
        assert!(layout.directories.iter().any(|d| d == "Resources/Prefabs/Board"));
    }

    #[test]
    fn entries_join_root_base_and_marker() {
        let layout = Layout::from_toml(
            r#"base = "Assets"
marker = ".keep"
directories = ["Scripts/Core", "Resources/Audio"]
"#,
        )
        .unwrap();

        let entries = layout.entries(Utf8Path::new("/tmp/game"));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].relative, "Scripts/Core");
        assert_eq!(entries[0].dir, Utf8PathBuf::from("/tmp/game/Assets/Scripts/Core"));
        assert_eq!(
            entries[1].marker,
            Utf8PathBuf::from("/tmp/game/Assets/Resources/Audio/.keep")
        );
    }

    #[test]
    fn rejects_empty_fields() {
        let err = Layout::from_toml("base = \"\"\nmarker = \".gitkeep\"\ndirectories = [\"a\"]\n")
            .unwrap_err();
        assert!(err.to_string().contains("base"));

        let err = Layout::from_toml("base = \"Assets\"\nmarker = \".gitkeep\"\ndirectories = []\n")
            .unwrap_err();
        assert!(err.to_string().contains("no directories"));

        let err =
            Layout::from_toml("base = \"Assets\"\nmarker = \".gitkeep\"\ndirectories = [\"a\", \"\"]\n")
                .unwrap_err();
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn rejects_missing_keys() {
        assert!(Layout::from_toml("base = \"Assets\"\n").is_err());
    }
}
