//! Prompt templates for release notes and commit descriptions.
//!
//! Both templates embed the git output verbatim; no size limit is applied.

/// Build the release-notes prompt for a `left...right` comparison.
///
/// Branch names are interpolated as given.
pub fn build_release_notes_prompt(left_branch: &str, right_branch: &str, log: &str) -> String {
    format!(
        r#"Act as a release manager reviewing the commits between two branches.
Write release notes for these changes. In the notes themselves, avoid commit hashes and dates.

Branches compared: Left branch: {left_branch}, Right branch: {right_branch}.
In the log below, commits marked "<" are only on the left branch and commits marked ">" are only on the right branch.

Structure the release notes as follows:

## Summary
A short overview of what changed between the two branches.

## Major Changes
A detailed description of each significant change: what it does and why it matters.

## Technical Details
Implementation notes relevant to developers: refactors, dependency updates, migrations, configuration changes.

## Contributor Statistics
For each contributor, the number of commits and the lines added and removed, as far as the log allows.

Commit log:

{log}
"#
    )
}

/// Build the commit-description prompt from `git status -v` output.
pub fn build_commit_description_prompt(status: &str) -> String {
    format!(
        r#"Act as a senior developer writing a commit message for the pending changes below.
Summarize the changes professionally and concisely.

Respond using exactly this format:

Subject: <one line, imperative mood, at most 72 characters>

Description:
<a few sentences or bullet points explaining what changed and why>

Repository status:

{status}
"#
    )
}
