//! kubectl sub-command classification.

/// Behaviour a kubectl sub-command opts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTag {
    /// Mutates cluster state; ask before running.
    Confirmable,
    /// Gets `--as=<role>` when an elevated role is requested.
    ElevationEligible,
    /// Accepts `kind name` and rewrites it to `kind/name`.
    ResourceQualifiable,
}

use CommandTag::*;

const COMMANDS: &[(&str, &[CommandTag])] = &[
    ("annotate", &[Confirmable, ElevationEligible]),
    ("delete", &[Confirmable, ElevationEligible]),
    ("patch", &[Confirmable, ElevationEligible]),
    ("edit", &[ElevationEligible]),
    ("exec", &[ElevationEligible, ResourceQualifiable]),
    ("port-forward", &[ElevationEligible, ResourceQualifiable]),
    ("logs", &[ResourceQualifiable]),
];

/// Resource kinds kubectl accepts in `kind/name` form for the qualifiable
/// sub-commands.
const QUALIFIABLE_KINDS: &[&str] = &[
    "deployment",
    "deployments",
    "deploy",
    "statefulset",
    "statefulsets",
    "sts",
    "service",
    "services",
    "svc",
    "job",
    "jobs",
];

/// Tags of a sub-command; empty for unclassified commands.
pub fn tags(command: &str) -> &'static [CommandTag] {
    COMMANDS
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, tags)| *tags)
        .unwrap_or(&[])
}

pub fn has_tag(command: &str, tag: CommandTag) -> bool {
    tags(command).contains(&tag)
}

pub fn is_qualifiable_kind(kind: &str) -> bool {
    QUALIFIABLE_KINDS.contains(&kind)
}
