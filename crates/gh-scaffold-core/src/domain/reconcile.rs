//! Per-file write decision.
//!
//! Rules, in priority order:
//!
//! 1. `exists ∧ update ∧ ¬force` → managed update (markdown) or skip with a
//!    reason (anything else).
//! 2. `¬exists ∧ update ∧ ¬force ∧ markdown` → create, wrapped in a block.
//! 3. `exists ∧ ¬force` → skip.
//! 4. otherwise → create or overwrite.
//!
//! `force` suppresses both protections. Dry-run, print and diff do not
//! influence the decision; they only change how it is carried out.

/// Inputs to [`decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileState {
    pub exists: bool,
    pub force: bool,
    pub update: bool,
    pub markdown: bool,
    /// `behavior.managedMarkers`; controls rule 2 only.
    pub managed_markers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the existing file alone.
    Skip,
    /// Update mode on a file that cannot carry managed blocks.
    SkipNonMarkdown,
    /// Upsert the managed block into the existing file.
    ManagedUpdate,
    /// Write the whole file. `wrap` puts the content in a managed block first.
    Write { wrap: bool },
}

impl Action {
    pub const NON_MARKDOWN_REASON: &'static str = "update skipped: non-markdown";
}

pub fn decide(state: FileState) -> Action {
    let FileState {
        exists,
        force,
        update,
        markdown,
        managed_markers,
    } = state;

    if exists && update && !force {
        return if markdown {
            Action::ManagedUpdate
        } else {
            Action::SkipNonMarkdown
        };
    }

    if exists && !force {
        return Action::Skip;
    }

    let wrap = !exists && update && !force && markdown && managed_markers;
    Action::Write { wrap }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(exists: bool, force: bool, update: bool, markdown: bool) -> FileState {
        FileState {
            exists,
            force,
            update,
            markdown,
            managed_markers: true,
        }
    }

    #[test]
    fn existing_file_is_skipped_by_default() {
        assert_eq!(decide(state(true, false, false, true)), Action::Skip);
        assert_eq!(decide(state(true, false, false, false)), Action::Skip);
    }

    #[test]
    fn update_on_existing_markdown_is_managed() {
        assert_eq!(decide(state(true, false, true, true)), Action::ManagedUpdate);
    }

    #[test]
    fn update_on_existing_non_markdown_is_skipped_with_reason() {
        assert_eq!(decide(state(true, false, true, false)), Action::SkipNonMarkdown);
    }

    #[test]
    fn fresh_markdown_in_update_mode_is_wrapped() {
        assert_eq!(
            decide(state(false, false, true, true)),
            Action::Write { wrap: true }
        );
        assert_eq!(
            decide(state(false, false, true, false)),
            Action::Write { wrap: false }
        );
    }

    #[test]
    fn managed_markers_off_disables_wrapping() {
        let s = FileState {
            managed_markers: false,
            ..state(false, false, true, true)
        };
        assert_eq!(decide(s), Action::Write { wrap: false });
    }

    #[test]
    fn missing_file_is_created() {
        assert_eq!(
            decide(state(false, false, false, true)),
            Action::Write { wrap: false }
        );
    }

    #[test]
    fn force_always_writes() {
        for exists in [true, false] {
            for update in [true, false] {
                for markdown in [true, false] {
                    let action = decide(state(exists, true, update, markdown));
                    assert_eq!(action, Action::Write { wrap: false });
                }
            }
        }
    }

    #[test]
    fn skip_iff_exists_and_not_forced_and_not_updatable() {
        for exists in [true, false] {
            for force in [true, false] {
                for update in [true, false] {
                    for markdown in [true, false] {
                        let action = decide(state(exists, force, update, markdown));
                        let skipped =
                            matches!(action, Action::Skip | Action::SkipNonMarkdown);
                        let expected = exists && !force && !(update && markdown);
                        assert_eq!(skipped, expected, "{exists} {force} {update} {markdown}");
                    }
                }
            }
        }
    }
}
