//! Branch containment queries

use git2::BranchType;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// List remote branch names whose tip contains the given commit.
    ///
    /// Cost is proportional to the number of remote branches; callers
    /// should treat this as a slow, opt-in lookup.
    #[instrument(skip(self))]
    pub fn branches_containing(&self, commitish: &str) -> Result<Vec<String>> {
        let commit_oid = self.resolve_ref(commitish)?;

        let mut names = Vec::new();
        for branch in self.repo.branches(Some(BranchType::Remote))? {
            let (branch, _) = branch?;
            let Some(tip) = branch.get().target() else {
                continue;
            };
            let contains =
                tip == commit_oid || self.repo.graph_descendant_of(tip, commit_oid)?;
            if contains {
                if let Some(name) = branch.name()? {
                    names.push(name.to_string());
                }
            }
        }

        debug!(
            commit = commitish,
            branches = names.len(),
            "branch containment lookup"
        );
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use std::path::Path;
    use tempfile::TempDir;

    fn setup_repo_with_remote_branch() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        let sig = Signature::now("Test", "test@example.com").unwrap();
        std::fs::write(temp.path().join("file.txt"), "content").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("file.txt")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, "feat: seed", &tree, &[])
            .unwrap();

        // Simulate a fetched remote branch pointing at the commit
        repo.reference(
            "refs/remotes/origin/ABC-123-add-feature",
            oid,
            false,
            "test",
        )
        .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        (temp, git_repo)
    }

    #[test]
    fn test_branches_containing() {
        let (_temp, repo) = setup_repo_with_remote_branch();
        let branches = repo.branches_containing("HEAD").unwrap();
        assert_eq!(branches, vec!["origin/ABC-123-add-feature".to_string()]);
    }

    #[test]
    fn test_branches_containing_unknown_commit() {
        let (_temp, repo) = setup_repo_with_remote_branch();
        assert!(repo.branches_containing("no-such-ref").is_err());
    }
}
