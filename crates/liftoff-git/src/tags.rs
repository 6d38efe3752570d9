//! Tag operations

use semver::Version;
use tracing::{debug, info, instrument};

use liftoff_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;

impl GitRepo {
    /// List all tags
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut tags = Vec::new();

        self.repo.tag_foreach(|oid, name| {
            let name = String::from_utf8_lossy(name)
                .trim_start_matches("refs/tags/")
                .to_string();

            if let Ok(commit) = self.repo.find_commit(oid) {
                // Lightweight tag: oid is the commit itself
                tags.push(TagInfo::new(&name, commit.id().to_string()));
            } else if let Ok(tag) = self.repo.find_tag(oid) {
                // Annotated tag: resolve to the target commit
                let mut tag_info = TagInfo::new(&name, tag.target_id().to_string());
                if let Some(msg) = tag.message() {
                    tag_info = tag_info.with_message(msg);
                }
                tags.push(tag_info);
            }

            true
        })?;

        debug!(count = tags.len(), "listed tags");
        Ok(tags)
    }

    /// Find the latest tag, ordered by semantic version after stripping the
    /// given prefix. Tags that do not parse as versions are ignored.
    #[instrument(skip(self))]
    pub fn find_latest_tag(&self, prefix: &str) -> Result<Option<TagInfo>> {
        let mut versioned: Vec<(TagInfo, Version)> = self
            .tags()?
            .into_iter()
            .filter_map(|t| {
                let version = Version::parse(t.version(prefix)).ok()?;
                Some((t, version))
            })
            .collect();

        versioned.sort_by(|a, b| b.1.cmp(&a.1));

        let result = versioned.into_iter().next().map(|(t, _)| t);
        debug!(latest = ?result.as_ref().map(|t| &t.name), "found latest tag");
        Ok(result)
    }

    /// Find a specific tag by name
    pub fn find_tag(&self, name: &str) -> Result<Option<TagInfo>> {
        let tag_ref = format!("refs/tags/{}", name);

        match self.repo.find_reference(&tag_ref) {
            Ok(reference) => {
                let target = reference.peel_to_commit()?;
                Ok(Some(TagInfo::new(name, target.id().to_string())))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// Create an annotated tag on HEAD
    #[instrument(skip(self, message))]
    pub fn create_tag(&self, name: &str, message: &str) -> Result<TagInfo> {
        if self.find_tag(name)?.is_some() {
            return Err(GitError::TagExists(name.to_string()));
        }

        let head = self.head_commit()?;
        let sig = self.repo.signature()?;
        self.repo.tag(name, head.as_object(), &sig, message, false)?;

        info!(name, "created tag");
        Ok(TagInfo::new(name, head.id().to_string()).with_message(message))
    }
}
