use anyhow::{Context, Result};
use numbered_lines::{NumberedLines, PreviewLimits, Slice};
use numbered_lines_config::Config;
use regex::Regex;

use crate::args::Step;

const BLANK_LINE: &str = r"^\s*$";

/// A step with its patterns compiled and config names resolved.
#[derive(Debug)]
pub enum Op {
    Filter(Regex),
    FilterOut(Regex),
    Slice(Slice),
    Reset,
}

impl Op {
    pub fn apply(&self, lines: &NumberedLines) -> NumberedLines {
        match self {
            Op::Filter(regex) => lines.filter(regex),
            Op::FilterOut(regex) => lines.filter_out(regex),
            Op::Slice(slice) => lines.slice_by(*slice),
            Op::Reset => lines.reset_index(),
        }
    }
}

pub fn compile(steps: &[Step], config: &Config) -> Result<Vec<Op>> {
    steps.iter().map(|step| compile_step(step, config)).collect()
}

fn compile_step(step: &Step, config: &Config) -> Result<Op> {
    let op = match step {
        Step::Grep(pattern) => Op::Filter(regex(pattern)?),
        Step::Exclude(pattern) => Op::FilterOut(regex(pattern)?),
        Step::Pattern(name) => Op::Filter(regex(named(config, name)?)?),
        Step::ExcludePattern(name) => Op::FilterOut(regex(named(config, name)?)?),
        Step::DropBlank => Op::FilterOut(regex(BLANK_LINE)?),
        Step::Slice(slice) => Op::Slice(*slice),
        Step::Reset => Op::Reset,
    };
    Ok(op)
}

fn regex(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("invalid pattern {pattern:?}"))
}

fn named<'a>(config: &'a Config, name: &str) -> Result<&'a str> {
    config
        .pattern(name)
        .with_context(|| format!("no pattern named {name:?} in config"))
}

pub fn run(lines: NumberedLines, ops: &[Op]) -> NumberedLines {
    ops.iter().fold(lines, |lines, op| {
        let next = op.apply(&lines);
        log::debug!("{op:?}: {} -> {} lines", lines.len(), next.len());
        next
    })
}

/// Output lines for `lines`, either in full or as a preview.
pub fn render(
    lines: &NumberedLines,
    pad: Option<usize>,
    preview: Option<&PreviewLimits>,
) -> Vec<String> {
    match preview {
        Some(limits) => lines.preview(limits, pad),
        None => lines.format(pad),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> NumberedLines {
        NumberedLines::from_text("intro\n\nTODO: one\n  \nbody\nTODO: two\nend")
    }

    #[test]
    fn runs_steps_in_order() {
        let ops = compile(
            &[
                Step::DropBlank,
                Step::Slice(Slice::from_start(1)),
                Step::Grep("TODO".into()),
            ],
            &Config::default(),
        )
        .unwrap();

        let out = run(sample(), &ops);

        assert_eq!(out.format(None), vec!["02: TODO: one", "05: TODO: two"]);
    }

    #[test]
    fn reset_renumbers_what_is_left() {
        let ops = compile(
            &[Step::Exclude("TODO".into()), Step::Reset],
            &Config::default(),
        )
        .unwrap();

        let out = run(sample(), &ops);

        assert_eq!(out.index(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn resolves_named_patterns() {
        let mut config = Config::default();
        config.patterns.insert("todo".into(), "^TODO".into());

        let ops = compile(&[Step::ExcludePattern("todo".into())], &config).unwrap();
        let out = run(sample(), &ops);

        assert_eq!(out.index(), &[0, 1, 3, 4, 6]);
    }

    #[test]
    fn unknown_pattern_name_fails() {
        let err = compile(&[Step::Pattern("nope".into())], &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "no pattern named \"nope\" in config");
    }

    #[test]
    fn invalid_regex_fails() {
        let err = compile(&[Step::Grep("(".into())], &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid pattern \"(\"");
    }

    #[test]
    fn render_preview_uses_fixed_pad() {
        let lines = NumberedLines::from_pages((0..6).map(|i| i.to_string()));
        let limits = PreviewLimits {
            head: 1,
            tail: 2,
            buffer: 0,
        };

        let out = render(&lines, Some(3), Some(&limits));

        assert_eq!(out, vec!["000: 0", "…", "004: 4", "005: 5"]);
    }

    #[test]
    fn render_without_preview_prints_everything() {
        let out = render(&sample(), None, None);
        assert_eq!(out.len(), 7);
        assert_eq!(out[6], "06: end");
    }
}
